use super::*;
use crate::summarizer::{GenerationParams, SummarizationRequest, SummarizerError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_extract_from_sequence_summary_text() {
    let response = json!([{"summary_text": "X"}]);
    assert_eq!(extract_summary(&response), "X");
}

#[test]
fn test_extract_from_sequence_normalizes() {
    let response = json!([{"summary_text": "  Kinh tế\n\n tăng   trưởng "}]);
    assert_eq!(extract_summary(&response), "Kinh tế tăng trưởng");
}

#[test]
fn test_extract_from_sequence_generated_text() {
    let response = json!([{"generated_text": "Tóm tắt"}, {"generated_text": "ignored"}]);
    assert_eq!(extract_summary(&response), "Tóm tắt");
}

#[test]
fn test_extract_from_mapping_falls_back_to_generated_text() {
    let response = json!({"generated_text": "fallback"});
    assert_eq!(extract_summary(&response), "fallback");
}

#[test]
fn test_extract_prefers_summary_text() {
    let response = json!({"summary_text": "first", "generated_text": "second"});
    assert_eq!(extract_summary(&response), "first");
}

#[test]
fn test_extract_skips_blank_summary_text() {
    let response = json!({"summary_text": "", "generated_text": "second"});
    assert_eq!(extract_summary(&response), "second");
}

#[test]
fn test_extract_missing_fields() {
    assert_eq!(extract_summary(&json!([])), "");
    assert_eq!(extract_summary(&json!({"error": "x"})), "");
    assert_eq!(extract_summary(&json!("plain string")), "");
    assert_eq!(extract_summary(&json!([{"summary_text": 42}])), "");
}

#[test]
fn test_request_body_shape() {
    let params = GenerationParams::new(100, 0.5, 0.8).unwrap();
    let request = SummarizationRequest::new("văn bản", params).unwrap();
    let body = serde_json::to_value(InferenceRequest::from_summarization(&request)).unwrap();
    assert_eq!(
        body,
        json!({
            "inputs": "Tóm tắt văn bản sau:\nvăn bản\nTóm tắt:",
            "parameters": {
                "max_new_tokens": 100,
                "temperature": 0.5,
                "top_p": 0.8,
                "do_sample": true,
                "repetition_penalty": 1.2
            }
        })
    );
}

#[tokio::test]
async fn test_infer_missing_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = InferenceClient::new(server.uri(), Some("  ".to_string()));
    let request = SummarizationRequest::new("text", GenerationParams::default()).unwrap();
    let err = client.infer(&request).await.unwrap_err();
    assert!(matches!(err, SummarizerError::MissingToken));
}

#[tokio::test]
async fn test_infer_success_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/vit5"))
        .and(header("Authorization", "Bearer hf_test"))
        .and(body_json(json!({
            "inputs": "Tóm tắt văn bản sau:\nmột hai ba\nTóm tắt:",
            "parameters": {
                "max_new_tokens": 160,
                "temperature": 0.7,
                "top_p": 0.9,
                "do_sample": true,
                "repetition_penalty": 1.2
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"summary_text": " một  hai "}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = InferenceClient::new(
        format!("{}/models/vit5", server.uri()),
        Some("hf_test".to_string()),
    );
    let request = SummarizationRequest::new("một hai ba", GenerationParams::default()).unwrap();
    assert_eq!(client.infer(&request).await.unwrap(), "một hai");
}

#[tokio::test]
async fn test_infer_model_loading() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "loading"})))
        .mount(&server)
        .await;

    let client = InferenceClient::new(server.uri(), Some("hf_test".to_string()));
    let request = SummarizationRequest::new("text", GenerationParams::default()).unwrap();
    let err = client.infer(&request).await.unwrap_err();
    assert!(matches!(err, SummarizerError::ModelLoading));
}

#[tokio::test]
async fn test_infer_empty_response_is_warning() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generated_text": ""})))
        .mount(&server)
        .await;

    let client = InferenceClient::new(server.uri(), Some("hf_test".to_string()));
    let request = SummarizationRequest::new("text", GenerationParams::default()).unwrap();
    let err = client.infer(&request).await.unwrap_err();
    assert!(matches!(err, SummarizerError::EmptySummary));
}

#[tokio::test]
async fn test_infer_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"summary_text": "late"}]))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = InferenceClient::with_timeout(
        server.uri(),
        Some("hf_test".to_string()),
        std::time::Duration::from_millis(200),
    );
    let request = SummarizationRequest::new("text", GenerationParams::default()).unwrap();
    let err = client.infer(&request).await.unwrap_err();
    assert!(matches!(err, SummarizerError::Timeout(_)));
}
