use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::{HealthStatus, SummarizationRequest, SummarizationResult, SummarizerError};
use crate::text::{char_len, preview};

/// Per-endpoint request limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub health: Duration,
    pub demo: Duration,
    pub summarize: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            health: Duration::from_secs(5),
            demo: Duration::from_secs(30),
            summarize: Duration::from_secs(240), // LLM generation on CPU is slow
        }
    }
}

/// Client for the summarization API (`/health`, `/demo`, `/summarize`)
pub struct SummarizerClient {
    http: Client,
    base_url: String,
    timeouts: Timeouts,
}

impl SummarizerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, Timeouts::default())
    }

    pub fn with_timeouts(base_url: impl Into<String>, timeouts: Timeouts) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            timeouts,
        }
    }

    /// Check if the summarization server is healthy. Never fails: any
    /// problem is reported through the unhealthy status.
    pub async fn check_health(&self) -> HealthStatus {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .timeout(self.timeouts.health)
            .send()
            .await;

        let status = match response {
            Ok(resp) if resp.status() == StatusCode::OK => match resp.json().await {
                Ok(info) => HealthStatus::healthy(info),
                Err(e) => HealthStatus::unhealthy(e.to_string()),
            },
            Ok(resp) => {
                HealthStatus::unhealthy(format!("Status code: {}", resp.status().as_u16()))
            }
            Err(e) => HealthStatus::unhealthy(e.to_string()),
        };

        if !status.healthy {
            warn!(base_url = %self.base_url, info = %status.info, "health check failed");
        }
        status
    }

    /// Fetch the canned example result from `/demo`
    pub async fn demo(&self) -> Result<SummarizationResult, SummarizerError> {
        let timeout = self.timeouts.demo;
        let response = self
            .http
            .get(format!("{}/demo", self.base_url))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| SummarizerError::from_transport(e, timeout))?;

        read_result(response, timeout).await
    }

    /// Summarize a document
    pub async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResult, SummarizerError> {
        let params = request.params();
        info!(
            document_chars = char_len(request.document()),
            preview = %preview(request.document(), 200),
            max_new_tokens = params.max_new_tokens(),
            temperature = params.temperature(),
            top_p = params.top_p(),
            "new summarization request"
        );

        let timeout = self.timeouts.summarize;
        let start = Instant::now();
        let response = self
            .http
            .post(format!("{}/summarize", self.base_url))
            .json(request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "summarization request failed");
                SummarizerError::from_transport(e, timeout)
            })?;

        let result = read_result(response, timeout).await?;
        info!(
            processing_time = result.processing_time,
            total_time = start.elapsed().as_secs_f64(),
            output_length = result.output_length,
            summary = %result.summary,
            "summarization request succeeded"
        );
        Ok(result)
    }
}

/// Map a response from `/summarize` or `/demo` onto the result type
async fn read_result(
    response: Response,
    timeout: Duration,
) -> Result<SummarizationResult, SummarizerError> {
    let result: SummarizationResult = read_json(check_status(response).await?, timeout).await?;

    if result.summary.trim().is_empty() {
        return Err(SummarizerError::EmptySummary);
    }
    Ok(result)
}

/// Read the whole body, then decode it. Only a body that arrived but is not
/// the expected JSON counts as an unexpected failure.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    timeout: Duration,
) -> Result<T, SummarizerError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| SummarizerError::from_body_read(e, timeout))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| SummarizerError::Unexpected(format!("invalid response body: {e}")))
}

/// Pass a 200 response through, turn anything else into an error carrying
/// the raw body
pub(crate) async fn check_status(response: Response) -> Result<Response, SummarizerError> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    if status == StatusCode::SERVICE_UNAVAILABLE {
        return Err(SummarizerError::ModelLoading);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    warn!(status = status.as_u16(), %body, "server returned error status");
    Err(SummarizerError::ServerError {
        status: status.as_u16(),
        body,
    })
}
