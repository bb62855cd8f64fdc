//! Test helper utilities for failure-explainer integration tests
//!
//! Configurations here point at a wiremock server, so every provider can be
//! exercised end to end without touching a real API.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use failure_explainer::{ChatMessage, FailureContext, LlmConfig, ProviderKind};
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-secret-key";

/// Configuration for `provider` whose requests go to `server`
pub fn create_mock_config(provider: ProviderKind, server: &MockServer) -> LlmConfig {
    let model = match provider {
        ProviderKind::Google => "gemini-2.0-flash",
        ProviderKind::Groq => "llama-3.3-70b-versatile",
        ProviderKind::OpenAI => "gpt-4o-mini",
    };

    LlmConfig {
        provider,
        model: model.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        max_tokens: 256,
        temperature: 0.2,
        base_url: Some(server.uri()),
        ..LlmConfig::default()
    }
}

pub fn create_conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are terse."),
        ChatMessage::user("Why did the test fail?"),
        ChatMessage::assistant("Which test?"),
        ChatMessage::user("The login one."),
    ]
}

pub fn create_failure_context() -> FailureContext {
    FailureContext::new("login > rejects bad password", "Timeout 5000ms exceeded")
        .with_stack_trace("at LoginPage.submit (login.spec.ts:42:7)")
        .with_screenshot_path("test-results/login/failure.png")
}

/// Base URL of a local port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("ephemeral port address");
    drop(listener);
    format!("http://{addr}")
}

/// 200 response with an OpenAI-shaped body
pub fn openai_success(content: &str) -> ResponseTemplate {
    let body = openai_success_body(content);
    ResponseTemplate::new(200).set_body_json(body)
}

/// 200 response with a Gemini-shaped body
pub fn gemini_success(content: &str) -> ResponseTemplate {
    let body = gemini_success_body(content);
    ResponseTemplate::new(200).set_body_json(body)
}

/// OpenAI-shaped success body
pub fn openai_success_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 5,
            "total_tokens": 15
        }
    })
}

/// Gemini-shaped success body
pub fn gemini_success_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": content}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 12,
            "candidatesTokenCount": 7,
            "totalTokenCount": 19
        }
    })
}
