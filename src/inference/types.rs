// the generic model-inference contract
use serde::Serialize;
use serde_json::Value;

use crate::summarizer::{GenerationParams, SummarizationRequest};
use crate::text::normalize_whitespace;

/// Keys tried in order when pulling text out of an inference response
pub const SUMMARY_KEYS: [&str; 2] = ["summary_text", "generated_text"];

#[derive(Debug, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
pub struct InferenceParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
    pub repetition_penalty: f64,
}

impl InferenceRequest {
    pub fn from_summarization(request: &SummarizationRequest) -> Self {
        Self {
            inputs: instruction_prompt(request.document()),
            parameters: InferenceParameters::from(request.params()),
        }
    }
}

impl From<GenerationParams> for InferenceParameters {
    fn from(params: GenerationParams) -> Self {
        Self {
            max_new_tokens: params.max_new_tokens(),
            temperature: params.temperature(),
            top_p: params.top_p(),
            do_sample: true,
            repetition_penalty: 1.2,
        }
    }
}

/// Seq2seq summarizers take a plain instruction, no chat roles
pub fn instruction_prompt(document: &str) -> String {
    format!("Tóm tắt văn bản sau:\n{document}\nTóm tắt:")
}

/// Pull the summary out of either `[{"summary_text": ...}]` or
/// `{"generated_text": ...}` style responses, normalized. Returns an empty
/// string when no usable text is present.
pub fn extract_summary(response: &Value) -> String {
    let record = match response {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(response),
        _ => None,
    };

    let text = record
        .and_then(|record| {
            SUMMARY_KEYS
                .iter()
                .filter_map(|key| record.get(key).and_then(Value::as_str))
                .find(|text| !text.trim().is_empty())
        })
        .unwrap_or_default();

    normalize_whitespace(text)
}
