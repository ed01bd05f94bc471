use serde::{Deserialize, Serialize};

/// Root response from the Deepgram API.
///
/// Every field is optional or defaulted: responses arrive partially
/// populated depending on the features requested (diarization,
/// utterances, paragraphs), and a missing piece is not an error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeepgramResponse {
    #[serde(default)]
    pub results: Option<DeepgramResults>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeepgramResults {
    /// Flattened utterance list, present when utterance segmentation
    /// was requested. Preferred over the paragraph tree when non-empty.
    #[serde(default)]
    pub utterances: Option<Vec<DeepgramUtterance>>,
    /// Per-channel recognition alternatives.
    #[serde(default)]
    pub channels: Vec<DeepgramChannel>,
}

/// A provider-segmented speech unit with channel, optional speaker,
/// start time, and text
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeepgramUtterance {
    #[serde(default)]
    pub channel: usize,
    /// Numeric speaker label, channel-scoped; absent when diarization
    /// was off or the provider could not attribute the utterance
    #[serde(default)]
    pub speaker: Option<u32>,
    /// Start timestamp in seconds
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeepgramChannel {
    #[serde(default)]
    pub alternatives: Vec<DeepgramAlternative>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeepgramAlternative {
    #[serde(default)]
    pub paragraphs: Option<DeepgramParagraphGroup>,
}

/// Wrapper object the provider nests the paragraph list under.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeepgramParagraphGroup {
    #[serde(default)]
    pub paragraphs: Vec<DeepgramParagraph>,
}

/// A group of sentences within one channel's primary alternative.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeepgramParagraph {
    /// Start timestamp in seconds
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub speaker: Option<u32>,
    #[serde(default)]
    pub sentences: Vec<DeepgramSentence>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeepgramSentence {
    #[serde(default)]
    pub text: String,
}

impl DeepgramResponse {
    /// Interpret an arbitrary JSON value as a response.
    ///
    /// A value that does not match the expected shape at any level
    /// degrades to the default (empty) response rather than erroring;
    /// downstream stages then produce an empty document.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// The flattened utterance list, if present and non-empty.
    pub fn utterances(&self) -> Option<&[DeepgramUtterance]> {
        self.results
            .as_ref()
            .and_then(|r| r.utterances.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// The per-channel alternatives list, empty when absent.
    pub fn channels(&self) -> &[DeepgramChannel] {
        self.results
            .as_ref()
            .map(|r| r.channels.as_slice())
            .unwrap_or(&[])
    }
}
