//! Message conversion between role-tagged messages and Gemini turns

use super::types::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
    GeminiSystemInstruction,
};
use crate::config::LlmConfig;
use crate::core_types::messages::{ChatMessage, ChatResponse, MessageRole, TokenUsage};
use crate::logging::log_debug;

/// Build a generateContent body
///
/// The first system message becomes `systemInstruction`; any further system
/// messages are dropped. The turn list is never empty.
pub(super) fn create_request(config: &LlmConfig, messages: &[ChatMessage]) -> GeminiRequest {
    let (system_instruction, mut contents) = separate_system_and_turns(messages);

    if contents.is_empty() {
        log_debug!(provider = "google", "No conversation turns, sending empty user turn");
        contents.push(GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart::text("")],
        });
    }

    GeminiRequest {
        contents,
        generation_config: GeminiGenerationConfig {
            max_output_tokens: config.max_tokens,
            temperature: config.temperature,
        },
        system_instruction,
    }
}

fn separate_system_and_turns(
    messages: &[ChatMessage],
) -> (Option<GeminiSystemInstruction>, Vec<GeminiContent>) {
    let system_instruction = messages
        .iter()
        .find(|msg| msg.role == MessageRole::System)
        .map(|msg| GeminiSystemInstruction {
            parts: vec![GeminiPart::text(msg.content.clone())],
        });

    let contents = messages
        .iter()
        .filter_map(|msg| {
            let role = match msg.role {
                MessageRole::System => return None,
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            };
            Some(GeminiContent {
                role: role.to_string(),
                parts: vec![GeminiPart::text(msg.content.clone())],
            })
        })
        .collect();

    (system_instruction, contents)
}

/// Normalize a generateContent response
///
/// Text parts of the first candidate are concatenated. A response without
/// candidates yields empty content.
pub(super) fn parse_response(response: GeminiResponse, model: &str) -> ChatResponse {
    let content = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .map(|parts| {
            parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let usage = response.usage_metadata.map(|meta| TokenUsage {
        prompt_tokens: meta.prompt_token_count.unwrap_or(0),
        completion_tokens: meta.candidates_token_count.unwrap_or(0),
    });

    ChatResponse {
        content,
        usage,
        model: Some(model.to_string()),
    }
}
