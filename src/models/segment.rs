use std::collections::HashMap;

/// Role string used when a segment carries no speaker label.
pub const UNKNOWN_SPEAKER_ROLE: &str = "Speaker Unknown";

/// Role string for a resolved numeric speaker ID.
pub fn speaker_role(id: u32) -> String {
    format!("Speaker {}", id)
}

/// A normalized speech segment, produced by extraction and owned by a
/// single pipeline invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    /// Index of the source channel in the response
    pub channel_index: usize,
    /// Channel-scoped speaker label, absent when diarization did not
    /// attribute the segment
    pub speaker: Option<u32>,
    /// Start timestamp in seconds
    pub start: f64,
    /// Segment text - immutable, carried verbatim into the output
    pub text: String,
}

/// Identity key for a labeled speaker.
///
/// Labels are channel-scoped in the input, so the same numeric label on
/// two channels names two distinct speakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeakerKey {
    pub channel_index: usize,
    pub speaker: u32,
}

/// Per-invocation mapping from speaker keys to dense sequential IDs.
///
/// ID k is assigned to the k-th distinct key encountered, so callers
/// must feed segments in chronological order. IDs are never reassigned
/// within one invocation.
#[derive(Debug, Clone, Default)]
pub struct SpeakerRoster {
    ids: HashMap<SpeakerKey, u32>,
}

impl SpeakerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a key to its ID, assigning the next sequential ID on
    /// first sight.
    pub fn assign(&mut self, key: SpeakerKey) -> u32 {
        let next = self.ids.len() as u32;
        *self.ids.entry(key).or_insert(next)
    }

    /// Look up a key without assigning.
    pub fn get(&self, key: &SpeakerKey) -> Option<u32> {
        self.ids.get(key).copied()
    }

    /// Number of distinct speakers seen so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A segment after speaker resolution and EOT labeling, ready for
/// rendering
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSegment {
    /// Resolved role string ("Speaker 0", "Speaker Unknown", ...)
    pub role: String,
    /// Segment text, verbatim from extraction
    pub text: String,
    /// Start timestamp in seconds
    pub start: f64,
    /// Final end-of-turn label (classifier output, possibly forced)
    pub end_of_turn: bool,
}
