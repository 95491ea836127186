use counsel_rag_lib::config::LlmConfig;
use counsel_rag_lib::errors::RagError;
use counsel_rag_lib::llm::provider::CompletionProvider;
use counsel_rag_lib::llm::providers::openai_compatible::OpenAiCompatibleProvider;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer, temperature: Option<f64>) -> OpenAiCompatibleProvider {
    OpenAiCompatibleProvider::from_config(&LlmConfig {
        api_base: format!("{}/v1/", server.uri()),
        temperature,
        ..LlmConfig::default()
    })
}

fn chat_reply(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "llama3.2",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn sends_single_user_message_and_returns_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer ollama"))
        .and(body_json(json!({
            "model": "llama3.2",
            "messages": [{ "role": "user", "content": "the whole prompt" }],
            "stream": false
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_reply(json!("I understand that this is difficult."))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = provider_for(&server, None)
        .complete("the whole prompt")
        .await
        .unwrap();
    assert_eq!(text, "I understand that this is difficult.");
}

#[tokio::test]
async fn configured_temperature_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_json(json!({
            "model": "llama3.2",
            "messages": [{ "role": "user", "content": "p" }],
            "stream": false,
            "temperature": 0.25
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(json!("ok"))))
        .expect(1)
        .mount(&server)
        .await;

    let text = provider_for(&server, Some(0.25)).complete("p").await.unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn null_content_becomes_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(json!(null))))
        .mount(&server)
        .await;

    let text = provider_for(&server, None).complete("p").await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn missing_choices_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = provider_for(&server, None).complete("p").await.unwrap_err();
    match err {
        RagError::LlmProvider(msg) => assert_eq!(msg, "response contained no choices"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_choice_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "choices": [{ "finish_reason": "stop" }] })),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(json!(42))))
        .mount(&server)
        .await;

    let provider = provider_for(&server, None);
    for _ in 0..2 {
        match provider.complete("p").await.unwrap_err() {
            RagError::LlmProvider(msg) => assert_eq!(msg, "choice contained no message content"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[tokio::test]
async fn error_status_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model \"llama3.2\" not found"))
        .mount(&server)
        .await;

    let err = provider_for(&server, None).complete("p").await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("404"), "{msg}");
    assert!(msg.contains("not found"), "{msg}");
}

#[tokio::test]
async fn malformed_body_is_an_http_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider_for(&server, None).complete("p").await.unwrap_err();
    assert!(matches!(err, RagError::Http(_)), "got {err:?}");
}
