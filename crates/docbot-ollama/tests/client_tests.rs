//! Ollama client tests against a mock Ollama server.

use docbot_core::ChatMessage;
use docbot_ollama::{ChatRequest, ModelOptions, OllamaClient, OllamaError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_chat_response(content: &str) -> serde_json::Value {
    json!({
        "model": "llama3.2:3b",
        "created_at": "2024-01-01T00:00:00Z",
        "message": {"role": "assistant", "content": content},
        "done": true,
        "total_duration": 1000000,
        "eval_count": 12
    })
}

#[tokio::test]
async fn test_is_available() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(mock_server.uri()).unwrap();
    assert!(client.is_available().await);
}

#[tokio::test]
async fn test_has_model_matches_tag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {"name": "nomic-embed-text:latest", "size": 274302450},
                {"name": "llama3.2:3b"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(mock_server.uri()).unwrap();

    assert!(client.has_model("nomic-embed-text").await.unwrap());
    assert!(client.has_model("llama3.2:3b").await.unwrap());
    assert!(!client.has_model("mistral").await.unwrap());
}

#[tokio::test]
async fn test_embed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/embeddings"))
        .and(body_partial_json(json!({
            "model": "nomic-embed-text",
            "prompt": "hello world"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"embedding": [0.1, 0.2, 0.3]})),
        )
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(mock_server.uri()).unwrap();
    let embedding = client.embed("nomic-embed-text", "hello world").await.unwrap();

    assert_eq!(embedding, vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn test_embed_model_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/embeddings"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": "model \"missing\" not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(mock_server.uri()).unwrap();
    let err = client.embed("missing", "text").await.unwrap_err();

    assert!(matches!(err, OllamaError::ModelNotFound { ref model } if model == "missing"));
}

#[tokio::test]
async fn test_chat_sends_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "llama3.2:3b",
            "stream": false,
            "messages": [
                {"role": "user", "content": "What is 2 + 2?"},
                {"role": "assistant", "content": "4."},
                {"role": "user", "content": "And 3 + 3?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_chat_response("6.")))
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(mock_server.uri()).unwrap();
    let request = ChatRequest::new(
        "llama3.2:3b",
        vec![
            ChatMessage::user("What is 2 + 2?"),
            ChatMessage::assistant("4."),
            ChatMessage::user("And 3 + 3?"),
        ],
    )
    .with_options(ModelOptions::new().with_temperature(0.2));

    let answer = client.chat(request).await.unwrap();
    assert_eq!(answer, "6.");
}

#[tokio::test]
async fn test_chat_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(mock_server.uri()).unwrap();
    let err = client
        .chat(ChatRequest::new("llama3.2:3b", vec![ChatMessage::user("Hi")]))
        .await
        .unwrap_err();

    match err {
        OllamaError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "out of memory");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_chat_without_message_is_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"model": "llama3.2:3b", "done": true})),
        )
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(mock_server.uri()).unwrap();
    let err = client
        .chat(ChatRequest::new("llama3.2:3b", vec![ChatMessage::user("Hi")]))
        .await
        .unwrap_err();

    assert!(matches!(err, OllamaError::EmptyResponse { .. }));
}

#[tokio::test]
async fn test_server_not_running() {
    // Nothing listens on port 9 in the test environment
    let client = OllamaClient::new("http://127.0.0.1:9").unwrap();

    assert!(!client.is_available().await);
    let err = client.embed("nomic-embed-text", "text").await.unwrap_err();
    assert!(matches!(err, OllamaError::ServerNotRunning { .. }));
}
