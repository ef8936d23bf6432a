// input.rs - the three ways a document can arrive
use std::path::{Path, PathBuf};

use super::Sample;
use crate::summarizer::SummarizerError;

/// Where the pending document comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    Text(String),
    Sample(Sample),
    File(PathBuf),
}

impl DocumentSource {
    /// Produce the raw document text. Normalization happens later, when the
    /// request is built.
    pub fn resolve(&self) -> Result<String, SummarizerError> {
        match self {
            DocumentSource::Text(text) => Ok(text.clone()),
            DocumentSource::Sample(sample) => Ok(sample.text().to_string()),
            DocumentSource::File(path) => read_upload(path),
        }
    }
}

/// Read an uploaded plain-text file. Only `.txt` files holding valid UTF-8
/// are accepted.
pub fn read_upload(path: &Path) -> Result<String, SummarizerError> {
    let invalid = |reason: String| SummarizerError::InvalidFile {
        path: path.display().to_string(),
        reason,
    };

    let is_txt = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(invalid("only .txt files are supported".to_string()));
    }

    let bytes = std::fs::read(path).map_err(|e| invalid(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| invalid("file is not valid UTF-8".to_string()))
}
