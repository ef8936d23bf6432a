pub mod client;
pub mod error;
pub mod types;


pub use client::{SummarizerClient, Timeouts};
pub use error::{ErrorKind, SummarizerError};
pub use types::{
    compression_ratio, GenerationParams, HealthStatus, SummarizationRequest, SummarizationResult,
};
