use crate::heuristics::{determine_end_of_turn, force_turn_boundaries, EotConfig};
use crate::models::{
    speaker_role, LabeledSegment, RawSegment, SpeakerKey, SpeakerRoster, UNKNOWN_SPEAKER_ROLE,
};

/// Result of Stage 2 labeling
#[derive(Debug, Clone)]
pub struct LabelResult {
    /// Segments with resolved roles and final EOT labels, still in
    /// chronological order
    pub segments: Vec<LabeledSegment>,
    /// Number of distinct labeled speakers resolved
    pub speaker_count: usize,
    /// Number of EOT labels overridden at speaker changes
    pub forced_boundaries: usize,
}

/// Perform Stage 2: resolve speaker identities and label turn ends.
///
/// Identity assignment is a single left-to-right pass over the sorted
/// stream, so IDs come out dense and in first-appearance order. The
/// roster lives and dies with this call. Raw classifier output is then
/// post-processed so a speaker change forces a boundary.
pub fn label_segments(segments: &[RawSegment], config: &EotConfig) -> LabelResult {
    let mut roster = SpeakerRoster::new();

    let mut labeled: Vec<LabeledSegment> = segments
        .iter()
        .map(|s| {
            let role = match s.speaker {
                Some(speaker) => {
                    let key = SpeakerKey {
                        channel_index: s.channel_index,
                        speaker,
                    };
                    speaker_role(roster.assign(key))
                }
                None => UNKNOWN_SPEAKER_ROLE.to_string(),
            };

            LabeledSegment {
                role,
                end_of_turn: determine_end_of_turn(&s.text, config),
                text: s.text.clone(),
                start: s.start,
            }
        })
        .collect();

    let forced_boundaries = force_turn_boundaries(&mut labeled);

    LabelResult {
        segments: labeled,
        speaker_count: roster.len(),
        forced_boundaries,
    }
}
