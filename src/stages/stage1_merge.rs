use crate::models::RawSegment;

/// Perform Stage 1: order segments chronologically.
///
/// The sort is stable: segments sharing a start time keep their
/// extraction order, which downstream first-seen speaker-ID assignment
/// depends on.
pub fn merge_segments(mut segments: Vec<RawSegment>) -> Vec<RawSegment> {
    segments.sort_by(|a, b| a.start.total_cmp(&b.start));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(channel_index: usize, start: f64, text: &str) -> RawSegment {
        RawSegment {
            channel_index,
            speaker: Some(0),
            start,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_sorts_by_start_time() {
        let merged = merge_segments(vec![
            segment(0, 3.0, "third"),
            segment(0, 1.0, "first"),
            segment(0, 2.0, "second"),
        ]);

        let texts: Vec<&str> = merged.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ties_keep_extraction_order() {
        // Two channels legitimately sharing a start time
        let merged = merge_segments(vec![
            segment(0, 1.0, "channel zero"),
            segment(1, 1.0, "channel one"),
            segment(0, 0.5, "opener"),
        ]);

        let texts: Vec<&str> = merged.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["opener", "channel zero", "channel one"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_segments(vec![]).is_empty());
    }
}
