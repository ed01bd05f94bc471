use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::DeepgramResponse;

/// Errors surfaced by the input layer.
///
/// These are caller-level contract violations (unreadable file, text
/// that is not JSON at all). A response that is valid JSON but the
/// wrong shape is not an error; it degrades to an empty document
/// downstream.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read transcript file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parse a provider-response JSON file.
pub fn parse_transcription_file(path: &Path) -> Result<DeepgramResponse, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_transcription_json(&content)
}

/// Parse a provider-response JSON string.
///
/// Any syntactically valid JSON value is accepted; unexpected shapes
/// degrade to the empty response.
pub fn parse_transcription_json(json: &str) -> Result<DeepgramResponse, InputError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(DeepgramResponse::from_value(value))
}
