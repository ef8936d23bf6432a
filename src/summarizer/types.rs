use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::SummarizerError;
use crate::text::normalize_whitespace;

pub const MAX_NEW_TOKENS_RANGE: (u32, u32) = (50, 300);
pub const TEMPERATURE_RANGE: (f64, f64) = (0.1, 1.0);
pub const TOP_P_RANGE: (f64, f64) = (0.1, 1.0);

/// The three generation controls exposed to the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParams {
    max_new_tokens: u32,
    temperature: f64,
    top_p: f64,
}

impl GenerationParams {
    pub fn new(max_new_tokens: u32, temperature: f64, top_p: f64) -> Result<Self, SummarizerError> {
        let (min, max) = MAX_NEW_TOKENS_RANGE;
        if !(min..=max).contains(&max_new_tokens) {
            return Err(SummarizerError::InvalidParameter {
                name: "max_new_tokens",
                value: max_new_tokens as f64,
                min: min as f64,
                max: max as f64,
            });
        }
        check_range("temperature", temperature, TEMPERATURE_RANGE)?;
        check_range("top_p", top_p, TOP_P_RANGE)?;

        Ok(Self {
            max_new_tokens,
            temperature,
            top_p,
        })
    }

    pub fn max_new_tokens(&self) -> u32 {
        self.max_new_tokens
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    pub fn with_max_new_tokens(self, value: u32) -> Result<Self, SummarizerError> {
        Self::new(value, self.temperature, self.top_p)
    }

    pub fn with_temperature(self, value: f64) -> Result<Self, SummarizerError> {
        Self::new(self.max_new_tokens, value, self.top_p)
    }

    pub fn with_top_p(self, value: f64) -> Result<Self, SummarizerError> {
        Self::new(self.max_new_tokens, self.temperature, value)
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 160,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

fn check_range(
    name: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), SummarizerError> {
    // NaN fails both comparisons and is rejected here too
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(SummarizerError::InvalidParameter {
            name,
            value,
            min,
            max,
        })
    }
}

/// Body of `POST /summarize`.
///
/// Only constructible through [`SummarizationRequest::new`], so the document
/// is always whitespace-normalized and non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizationRequest {
    document: String,
    #[serde(flatten)]
    params: GenerationParams,
}

impl SummarizationRequest {
    pub fn new(document: &str, params: GenerationParams) -> Result<Self, SummarizerError> {
        let document = normalize_whitespace(document);
        if document.is_empty() {
            return Err(SummarizerError::EmptyDocument);
        }
        Ok(Self { document, params })
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn params(&self) -> GenerationParams {
        self.params
    }
}

/// Body returned by `POST /summarize` and `GET /demo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizationResult {
    pub summary: String,
    pub input_length: u64,
    pub output_length: u64,
    /// Seconds spent by the model server
    pub processing_time: f64,
}

impl SummarizationResult {
    /// Percentage reduction from input to output length, rounded to one
    /// decimal. `None` when the input length is zero.
    pub fn compression_ratio(&self) -> Option<f64> {
        compression_ratio(self.input_length, self.output_length)
    }
}

pub fn compression_ratio(input_length: u64, output_length: u64) -> Option<f64> {
    if input_length == 0 {
        return None;
    }
    let ratio = (1.0 - output_length as f64 / input_length as f64) * 100.0;
    // halves go to the even neighbour: 81.25 -> 81.2
    Some((ratio * 10.0).round_ties_even() / 10.0)
}

/// Outcome of `GET /health`. Transport failures land in `info` as
/// `{"error": ...}` rather than surfacing as errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub info: Value,
}

impl HealthStatus {
    pub fn healthy(info: Value) -> Self {
        Self {
            healthy: true,
            info,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            info: json!({ "error": error.into() }),
        }
    }
}
