use chrono::Local;
use std::path::Path;
use tracing::debug;

use super::{read_upload, DocumentSource, Outcome, Sample, SummaryReport};
use crate::inference::InferenceClient;
use crate::summarizer::{
    GenerationParams, HealthStatus, SummarizationRequest, SummarizationResult, SummarizerClient,
    SummarizerError,
};

/// State of one user's interaction: the latest health check, the pending
/// document and parameters, the demo result and the last outcome.
pub struct Session {
    client: SummarizerClient,
    inference: InferenceClient,
    health: Option<HealthStatus>,
    document: String,
    params: GenerationParams,
    demo: Option<SummarizationResult>,
    last: Option<Outcome>,
}

impl Session {
    pub fn new(client: SummarizerClient, inference: InferenceClient) -> Self {
        Self {
            client,
            inference,
            health: None,
            document: String::new(),
            params: GenerationParams::default(),
            demo: None,
            last: None,
        }
    }

    pub fn health(&self) -> Option<&HealthStatus> {
        self.health.as_ref()
    }

    pub fn is_healthy(&self) -> bool {
        self.health.as_ref().is_some_and(|h| h.healthy)
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn params(&self) -> GenerationParams {
        self.params
    }

    pub fn demo_result(&self) -> Option<&SummarizationResult> {
        self.demo.as_ref()
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    pub fn set_params(&mut self, params: GenerationParams) {
        self.params = params;
    }

    pub fn set_document(&mut self, text: impl Into<String>) {
        self.document = text.into();
    }

    pub fn use_sample(&mut self, sample: Sample) {
        self.document = sample.text().to_string();
    }

    pub fn use_file(&mut self, path: &Path) -> Result<(), SummarizerError> {
        self.document = read_upload(path)?;
        Ok(())
    }

    /// Replace the pending document from any input source
    pub fn load(&mut self, source: &DocumentSource) -> Result<(), SummarizerError> {
        self.document = source.resolve()?;
        Ok(())
    }

    pub async fn refresh_health(&mut self) -> &HealthStatus {
        let status = self.client.check_health().await;
        self.health.insert(status)
    }

    /// Summarize the pending document through `/summarize`.
    ///
    /// A blank document is rejected before any request is made, health
    /// included.
    pub async fn summarize(&mut self) -> &Outcome {
        let outcome = match SummarizationRequest::new(&self.document, self.params) {
            Err(err) => Outcome::Failed(err),
            Ok(request) => {
                if !self.refresh_health().await.healthy {
                    Outcome::Failed(SummarizerError::ApiUnavailable)
                } else {
                    match self.client.summarize(&request).await {
                        Ok(result) => Outcome::Summarized(SummaryReport {
                            document: request.document().to_string(),
                            params: request.params(),
                            result,
                            finished_at: Local::now(),
                        }),
                        Err(err) => Outcome::Failed(err),
                    }
                }
            }
        };
        self.finish(outcome)
    }

    /// Fetch the canned demo result and keep it for later views
    pub async fn demo(&mut self) -> &Outcome {
        let outcome = if !self.refresh_health().await.healthy {
            Outcome::Failed(SummarizerError::ApiUnavailable)
        } else {
            match self.client.demo().await {
                Ok(result) => {
                    self.demo = Some(result.clone());
                    Outcome::Demo(result)
                }
                Err(err) => Outcome::Failed(err),
            }
        };
        self.finish(outcome)
    }

    /// Summarize the pending document through the generic inference endpoint
    pub async fn infer(&mut self) -> &Outcome {
        let outcome = match SummarizationRequest::new(&self.document, self.params) {
            Err(err) => Outcome::Failed(err),
            Ok(request) => match self.inference.infer(&request).await {
                Ok(summary) => Outcome::Inferred {
                    document: request.document().to_string(),
                    summary,
                },
                Err(err) => Outcome::Failed(err),
            },
        };
        self.finish(outcome)
    }

    fn finish(&mut self, outcome: Outcome) -> &Outcome {
        if let Some(err) = outcome.error() {
            debug!(kind = ?err.kind(), error = %err, "interaction failed");
        }
        self.last.insert(outcome)
    }
}
