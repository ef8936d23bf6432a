use chrono::{DateTime, Local};

use crate::summarizer::{GenerationParams, SummarizationResult, SummarizerError};

/// Everything needed to show a finished `/summarize` call
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// The normalized document that was sent
    pub document: String,
    pub params: GenerationParams,
    pub result: SummarizationResult,
    pub finished_at: DateTime<Local>,
}

/// Result of the latest user action, always displayable
#[derive(Debug)]
pub enum Outcome {
    Summarized(SummaryReport),
    Inferred { document: String, summary: String },
    Demo(SummarizationResult),
    Failed(SummarizerError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed(_))
    }

    pub fn error(&self) -> Option<&SummarizerError> {
        match self {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The summary text, when the action produced one
    pub fn summary(&self) -> Option<&str> {
        match self {
            Outcome::Summarized(report) => Some(&report.result.summary),
            Outcome::Inferred { summary, .. } => Some(summary),
            Outcome::Demo(result) => Some(&result.summary),
            Outcome::Failed(_) => None,
        }
    }
}

impl From<SummarizerError> for Outcome {
    fn from(err: SummarizerError) -> Self {
        Outcome::Failed(err)
    }
}
