//! Integration tests for `GroqClient` using wiremock HTTP mocks.

use dinerec_groq::{CandidateSummary, GroqClient, GroqConfig, GroqError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GroqClient {
    let mut config = GroqConfig::new("test-key");
    config.base_url = base_url.to_string();
    config.timeout_secs = 5;
    GroqClient::new(config).expect("client construction should not fail")
}

fn candidates(names: &[&str]) -> Vec<CandidateSummary> {
    names
        .iter()
        .map(|name| CandidateSummary {
            name: (*name).to_string(),
            city: "Bangalore".to_string(),
            location: Some("Koramangala".to_string()),
            cuisines: vec!["North Indian".to_string()],
            rating: Some(4.2),
            votes: 610,
            cost_for_two: Some(700.0),
            rest_type: Some("Casual Dining".to_string()),
        })
        .collect()
}

fn chat_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn rank_candidates_parses_ordered_picks() {
    let server = MockServer::start().await;

    let content = r#"{"recommendations": [
        {"name": "Punjab Grill", "reason": "best rated in the price window"},
        {"name": "Empire Restaurant", "reason": "popular biryani spot"}
    ]}"#;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(content)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ranking = client
        .rank_candidates(
            "Bangalore",
            "North Indian",
            "550-850",
            &candidates(&["Punjab Grill", "Empire Restaurant"]),
            5,
        )
        .await
        .expect("should parse ranking");

    assert_eq!(ranking.recommendations.len(), 2);
    assert_eq!(ranking.recommendations[0].name, "Punjab Grill");
    assert_eq!(
        ranking.recommendations[0].reason,
        "best rated in the price window"
    );
    assert_eq!(ranking.recommendations[1].name, "Empire Restaurant");
}

#[tokio::test]
async fn request_carries_model_and_both_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": "llama-3.1-8b-instant",
            "temperature": 0.2
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_body(r#"{"recommendations": []}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ranking = client
        .rank_candidates("Bangalore", "North Indian", "any", &candidates(&["A"]), 3)
        .await
        .expect("empty list is structurally valid");

    assert!(ranking.recommendations.is_empty());
}

#[tokio::test]
async fn fenced_json_content_is_accepted() {
    let server = MockServer::start().await;

    let content = "Sure, here is the ranking:\n```json\n{\"recommendations\": [{\"name\": \"Punjab Grill\", \"reason\": \"top pick\"}]}\n```";

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(content)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ranking = client
        .rank_candidates("Bangalore", "North Indian", "any", &candidates(&["Punjab Grill"]), 3)
        .await
        .expect("fenced JSON should parse");

    assert_eq!(ranking.recommendations[0].name, "Punjab Grill");
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .rank_candidates("Bangalore", "North Indian", "any", &candidates(&["A"]), 3)
        .await
        .unwrap_err();

    match err {
        GroqError::Api { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("rate limit"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .rank_candidates("Bangalore", "North Indian", "any", &candidates(&["A"]), 3)
        .await
        .unwrap_err();

    assert!(matches!(err, GroqError::MalformedResponse(_)));
}

#[tokio::test]
async fn content_without_recommendations_list_is_a_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_body(r#"{"results": ["A"]}"#)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .rank_candidates("Bangalore", "North Indian", "any", &candidates(&["A"]), 3)
        .await
        .unwrap_err();

    assert!(matches!(err, GroqError::Schema(_)));
}

#[tokio::test]
async fn empty_choices_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .rank_candidates("Bangalore", "North Indian", "any", &candidates(&["A"]), 3)
        .await
        .unwrap_err();

    assert!(matches!(err, GroqError::MalformedResponse(_)));
}
