use crate::models::{DeepgramChannel, DeepgramResponse, DeepgramUtterance, RawSegment};

/// Which segment-producing strategy the extractor selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentSource {
    /// Flattened utterance list (the provider's natural-pause
    /// segmentation)
    Utterances,
    /// Per-channel paragraph trees
    Paragraphs,
    /// Neither source was present
    None,
}

impl SegmentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentSource::Utterances => "utterances",
            SegmentSource::Paragraphs => "paragraphs",
            SegmentSource::None => "none",
        }
    }
}

/// Result of Stage 0 extraction
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Raw segments, flat across channels, in extraction order
    pub segments: Vec<RawSegment>,
    /// The strategy that produced them
    pub source: SegmentSource,
}

/// Perform Stage 0: normalize the provider response into raw segments.
///
/// Utterances are authoritative when present and non-empty, even if
/// paragraph data also exists; otherwise the per-channel paragraph
/// trees are aggregated. An absent or unusable response is a normal
/// outcome and yields no segments.
pub fn extract_segments(response: &DeepgramResponse) -> ExtractionResult {
    if let Some(utterances) = response.utterances() {
        return ExtractionResult {
            segments: from_utterances(utterances),
            source: SegmentSource::Utterances,
        };
    }

    let segments = from_paragraphs(response.channels());
    let source = if segments.is_empty() {
        SegmentSource::None
    } else {
        SegmentSource::Paragraphs
    };

    ExtractionResult { segments, source }
}

fn from_utterances(utterances: &[DeepgramUtterance]) -> Vec<RawSegment> {
    utterances
        .iter()
        .map(|u| RawSegment {
            channel_index: u.channel,
            speaker: u.speaker,
            start: u.start,
            text: u.transcript.clone().unwrap_or_default(),
        })
        .collect()
}

fn from_paragraphs(channels: &[DeepgramChannel]) -> Vec<RawSegment> {
    let mut segments = Vec::new();

    for (channel_index, channel) in channels.iter().enumerate() {
        let Some(paragraphs) = channel
            .alternatives
            .first()
            .and_then(|a| a.paragraphs.as_ref())
        else {
            continue;
        };

        for paragraph in &paragraphs.paragraphs {
            let text = paragraph
                .sentences
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            segments.push(RawSegment {
                channel_index,
                speaker: paragraph.speaker,
                start: paragraph.start,
                text,
            });
        }
    }

    segments
}
