pub mod boundaries;
pub mod end_of_turn;

pub use boundaries::*;
pub use end_of_turn::*;

/// Configuration for the end-of-turn classifier
#[derive(Debug, Clone)]
pub struct EotConfig {
    /// Discourse markers that veto end-of-turn when a segment trails
    /// off on one of them (optionally followed by a comma)
    pub continuation_phrases: Vec<String>,
    /// Leading words that mark a segment as a question even without a
    /// question mark
    pub question_starters: Vec<String>,
}

impl Default for EotConfig {
    fn default() -> Self {
        Self {
            continuation_phrases: vec![
                "um".to_string(),
                "uh".to_string(),
                "like".to_string(),
                "you know".to_string(),
                "i mean".to_string(),
                "so".to_string(),
                "and then".to_string(),
                "but".to_string(),
                "or".to_string(),
                "because".to_string(),
                "however".to_string(),
                "although".to_string(),
                "therefore".to_string(),
            ],
            question_starters: vec![
                "what".to_string(),
                "who".to_string(),
                "where".to_string(),
                "when".to_string(),
                "why".to_string(),
                "how".to_string(),
                "is".to_string(),
                "are".to_string(),
                "do".to_string(),
                "does".to_string(),
                "did".to_string(),
                "can".to_string(),
                "could".to_string(),
                "would".to_string(),
                "should".to_string(),
            ],
        }
    }
}
