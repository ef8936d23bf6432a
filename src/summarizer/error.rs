use std::time::Duration;
use thiserror::Error;

/// Everything that can end a single summarization interaction.
///
/// None of these are retried. The presentation layer turns each variant into
/// a banner; [`SummarizerError::is_warning`] picks the softer style.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Please enter a document to summarize")]
    EmptyDocument,

    #[error("{name} must be between {min} and {max}, got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Cannot use file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("API is unavailable, start the API server first")]
    ApiUnavailable,

    #[error("HF_TOKEN is not set, add it to the environment or .env")]
    MissingToken,

    #[error("Timeout after {0:?}: summarization took too long")]
    Timeout(Duration),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Model is loading, wait 20-30 seconds and try again")]
    ModelLoading,

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Model returned no summary, try lowering max_new_tokens or check the input text")]
    EmptySummary,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Coarse grouping used when logging and rendering failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any request was sent
    Validation,
    /// Timeout or connection failure
    Transport,
    /// Non-200 status
    Protocol,
    /// 200 status without a usable summary
    Application,
}

impl SummarizerError {
    /// Classify a reqwest failure. `timeout` is the limit that was applied to
    /// the request, reported back in the timeout message.
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            SummarizerError::Timeout(timeout)
        } else if err.is_connect() || err.is_request() || err.is_body() {
            SummarizerError::Connection(err.to_string())
        } else {
            SummarizerError::Unexpected(err.to_string())
        }
    }

    /// Classify a failure while reading a response body. The bytes never
    /// arrived, so anything short of a timeout is a connection problem.
    pub fn from_body_read(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            SummarizerError::Timeout(timeout)
        } else {
            SummarizerError::Connection(err.to_string())
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SummarizerError::EmptyDocument
            | SummarizerError::InvalidParameter { .. }
            | SummarizerError::InvalidFile { .. }
            | SummarizerError::ApiUnavailable
            | SummarizerError::MissingToken => ErrorKind::Validation,
            SummarizerError::Timeout(_) | SummarizerError::Connection(_) => ErrorKind::Transport,
            SummarizerError::ModelLoading | SummarizerError::ServerError { .. } => {
                ErrorKind::Protocol
            }
            SummarizerError::EmptySummary | SummarizerError::Unexpected(_) => {
                ErrorKind::Application
            }
        }
    }

    /// Conditions the user can resolve by waiting or tweaking parameters
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            SummarizerError::ModelLoading | SummarizerError::EmptySummary
        )
    }
}
