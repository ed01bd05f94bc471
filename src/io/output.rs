use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::TranscriptDocument;

/// Write the document to a JSON file.
pub fn write_document(document: &TranscriptDocument, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, document).context("Failed to write JSON")?;
    Ok(())
}

/// Human-readable transcript format
pub struct TurnScript<'a> {
    document: &'a TranscriptDocument,
}

impl<'a> TurnScript<'a> {
    pub fn new(document: &'a TranscriptDocument) -> Self {
        Self { document }
    }

    /// Format the document as human-readable text
    pub fn format(&self) -> String {
        let mut output = String::new();

        for record in &self.document.results {
            // Speaker header, timestamped when timestamps were rendered
            match &record.timestamp {
                Some(timestamp) => {
                    output.push_str(&format!("[{}] {}:\n", timestamp, record.role))
                }
                None => output.push_str(&format!("{}:\n", record.role)),
            }

            let wrapped = wrap_text(&record.content, 80);
            output.push_str(&wrapped);
            output.push_str("\n\n");
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        if line_len + word.len() + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word.len();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TurnRecord;

    fn document() -> TranscriptDocument {
        TranscriptDocument {
            results: vec![
                TurnRecord {
                    role: "Speaker 0".to_string(),
                    content: "Hi.".to_string(),
                    end_of_turn: true,
                    timestamp: Some("00:00:01".to_string()),
                },
                TurnRecord {
                    role: "Speaker 1".to_string(),
                    content: "Hello".to_string(),
                    end_of_turn: false,
                    timestamp: None,
                },
            ],
        }
    }

    #[test]
    fn test_turn_script_format() {
        let document = document();
        let text = TurnScript::new(&document).format();

        assert!(text.contains("[00:00:01] Speaker 0:\nHi."));
        assert!(text.contains("Speaker 1:\nHello"));
    }

    #[test]
    fn test_write_and_reread_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turns.json");

        let original = document();
        write_document(&original, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let reread: TranscriptDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(reread, original);
    }

    #[test]
    fn test_wrap_text() {
        let text = "This is a test of the text wrapping function that should wrap at 20 chars";
        let wrapped = wrap_text(text, 20);
        for line in wrapped.lines() {
            assert!(line.len() <= 25); // Allow some slack for long words
        }
    }
}
