use crate::models::{LabeledSegment, TranscriptDocument, TurnRecord};

/// Configuration for Stage 3 rendering
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Attach an HH:MM:SS timestamp to each record
    pub include_timestamps: bool,
}

/// Perform Stage 3: assemble the output document.
///
/// One record per segment, in the order given; content is carried
/// verbatim. The timestamp field is attached only when requested,
/// omitted otherwise.
pub fn render_document(segments: &[LabeledSegment], config: &RenderConfig) -> TranscriptDocument {
    let results = segments
        .iter()
        .map(|s| TurnRecord {
            role: s.role.clone(),
            content: s.text.clone(),
            end_of_turn: s.end_of_turn,
            timestamp: config
                .include_timestamps
                .then(|| format_timestamp(s.start)),
        })
        .collect();

    TranscriptDocument { results }
}

/// Format seconds as HH:MM:SS, components zero-padded, fractions
/// floored.
fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
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
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00:00");
        assert_eq!(format_timestamp(59.999), "00:00:59");
        assert_eq!(format_timestamp(61.0), "00:01:01");
        assert_eq!(format_timestamp(3661.5), "01:01:01");
        assert_eq!(format_timestamp(7325.0), "02:02:05");
    }

    #[test]
    fn test_timestamps_attached_when_requested() {
        let segments = vec![segment("Speaker 0", "Hi.", 3661.5, true)];
        let config = RenderConfig {
            include_timestamps: true,
        };

        let document = render_document(&segments, &config);

        assert_eq!(document.results[0].timestamp.as_deref(), Some("01:01:01"));
    }

    #[test]
    fn test_timestamps_omitted_by_default() {
        let segments = vec![segment("Speaker 0", "Hi.", 3661.5, true)];

        let document = render_document(&segments, &RenderConfig::default());

        assert_eq!(document.results[0].timestamp, None);
        let json = serde_json::to_string(&document).unwrap();
        assert!(!json.contains("Timestamp"));
    }

    #[test]
    fn test_content_is_verbatim() {
        let segments = vec![segment("Speaker 0", "  Uneven   SPACING. ", 0.0, true)];

        let document = render_document(&segments, &RenderConfig::default());

        assert_eq!(document.results[0].content, "  Uneven   SPACING. ");
        assert_eq!(document.results[0].role, "Speaker 0");
    }

    #[test]
    fn test_empty_segments_render_empty_document() {
        let document = render_document(&[], &RenderConfig::default());
        assert!(document.is_empty());
    }
}
