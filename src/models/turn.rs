use serde::{Deserialize, Serialize};

/// One speaker turn in the output document.
///
/// Field names follow the consumer's wire format (`Role`, `Content`,
/// `EndOfTurn`, `Timestamp`). `Timestamp` is omitted entirely when
/// timestamps were not requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TurnRecord {
    /// Resolved speaker role ("Speaker 0", "Speaker Unknown", ...)
    pub role: String,
    /// Segment text, verbatim
    pub content: String,
    /// Whether this segment completes the speaker's turn
    pub end_of_turn: bool,
    /// Start time as HH:MM:SS, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// The engine's output: chronologically ordered turn records.
///
/// Order is fixed at render time and never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptDocument {
    pub results: Vec<TurnRecord>,
}

impl TranscriptDocument {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
