use crate::models::LabeledSegment;

/// Force turn boundaries at speaker changes.
///
/// A change of speaker is a structural signal that the previous turn is
/// over, so a false classifier result is overridden to true whenever
/// the next segment resolves to a different role (including "Speaker
/// Unknown"). The last segment has no successor and always keeps its
/// raw classification. Returns the number of overrides applied.
pub fn force_turn_boundaries(segments: &mut [LabeledSegment]) -> usize {
    let mut forced = 0;

    for i in 0..segments.len().saturating_sub(1) {
        if !segments[i].end_of_turn && segments[i].role != segments[i + 1].role {
            segments[i].end_of_turn = true;
            forced += 1;
        }
    }

    forced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(role: &str, text: &str, start: f64, end_of_turn: bool) -> LabeledSegment {
        LabeledSegment {
            role: role.to_string(),
            text: text.to_string(),
            start,
            end_of_turn,
        }
    }

    #[test]
    fn test_speaker_change_forces_boundary() {
        let mut segments = vec![
            segment("Speaker 0", "and then", 0.0, false),
            segment("Speaker 1", "Right.", 1.0, true),
        ];

        let forced = force_turn_boundaries(&mut segments);

        assert_eq!(forced, 1);
        assert!(segments[0].end_of_turn);
    }

    #[test]
    fn test_same_speaker_is_left_alone() {
        let mut segments = vec![
            segment("Speaker 0", "and then", 0.0, false),
            segment("Speaker 0", "we left.", 1.0, true),
        ];

        assert_eq!(force_turn_boundaries(&mut segments), 0);
        assert!(!segments[0].end_of_turn);
    }

    #[test]
    fn test_last_segment_is_never_forced() {
        let mut segments = vec![
            segment("Speaker 0", "Hi.", 0.0, true),
            segment("Speaker 1", "Hello", 1.0, false),
        ];

        assert_eq!(force_turn_boundaries(&mut segments), 0);
        assert!(!segments[1].end_of_turn);
    }

    #[test]
    fn test_unknown_role_counts_as_a_change() {
        let mut segments = vec![
            segment("Speaker 0", "so", 0.0, false),
            segment("Speaker Unknown", "right", 1.0, false),
            segment("Speaker 0", "anyway", 2.0, false),
        ];

        let forced = force_turn_boundaries(&mut segments);

        assert_eq!(forced, 2);
        assert!(segments[0].end_of_turn);
        assert!(segments[1].end_of_turn);
        assert!(!segments[2].end_of_turn);
    }

    #[test]
    fn test_true_classifications_are_not_counted() {
        let mut segments = vec![
            segment("Speaker 0", "Done.", 0.0, true),
            segment("Speaker 1", "Okay.", 1.0, true),
        ];

        assert_eq!(force_turn_boundaries(&mut segments), 0);
    }

    #[test]
    fn test_empty_and_single_inputs() {
        let mut empty: Vec<LabeledSegment> = vec![];
        assert_eq!(force_turn_boundaries(&mut empty), 0);

        let mut single = vec![segment("Speaker 0", "well", 0.0, false)];
        assert_eq!(force_turn_boundaries(&mut single), 0);
        assert!(!single[0].end_of_turn);
    }
}
