// Public API exports
pub mod config;
pub mod inference;
pub mod logging;
pub mod summarizer;
pub mod text;
pub mod ui;

// Re-export main types for convenience
pub use config::Config;

pub use summarizer::{
    compression_ratio, ErrorKind, GenerationParams, HealthStatus, SummarizationRequest,
    SummarizationResult, SummarizerClient, SummarizerError, Timeouts,
};

pub use inference::{extract_summary, InferenceClient};

pub use text::normalize_whitespace;

pub use ui::{DocumentSource, Outcome, Sample, Session, SessionView};
