use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::types::{extract_summary, InferenceRequest};
use crate::summarizer::client::{check_status, read_json};
use crate::summarizer::{SummarizationRequest, SummarizerError};
use crate::text::{char_len, preview};

/// Client for a hosted model-inference endpoint with bearer auth
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    token: Option<String>,
    timeout: Duration,
}

impl InferenceClient {
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self::with_timeout(endpoint, token, Duration::from_secs(120))
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            token: token.filter(|t| !t.trim().is_empty()),
            timeout,
        }
    }

    /// Run the document through the model and return the normalized summary
    pub async fn infer(&self, request: &SummarizationRequest) -> Result<String, SummarizerError> {
        let token = self.token.as_deref().ok_or(SummarizerError::MissingToken)?;
        let body = InferenceRequest::from_summarization(request);

        info!(
            endpoint = %self.endpoint,
            document_chars = char_len(request.document()),
            preview = %preview(request.document(), 200),
            max_new_tokens = body.parameters.max_new_tokens,
            temperature = body.parameters.temperature,
            top_p = body.parameters.top_p,
            "new inference request"
        );

        let start = Instant::now();
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "inference request failed");
                SummarizerError::from_transport(e, self.timeout)
            })?;

        let value: Value = read_json(check_status(response).await?, self.timeout).await?;

        let summary = extract_summary(&value);
        if summary.is_empty() {
            warn!(response = %value, "inference response carried no summary");
            return Err(SummarizerError::EmptySummary);
        }

        info!(
            total_time = start.elapsed().as_secs_f64(),
            output_length = char_len(&summary),
            %summary,
            "inference request succeeded"
        );
        Ok(summary)
    }
}
