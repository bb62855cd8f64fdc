//! OpenAI-compatible data structures and types
//!
//! Contains the chat-completions request/response structures used by OpenAI
//! and Groq. Response fields are optional so that a response missing the
//! expected shape normalizes to empty content instead of failing.

use crate::core_types::messages::{ChatMessage, TokenUsage};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct OpenAIRequest<'a> {
    pub model: &'a str,
    /// Sent verbatim, roles unchanged
    pub messages: &'a [ChatMessage],
    pub max_tokens: u32,
    pub temperature: f64,
}

/// OpenAI-compatible chat completion response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
    #[serde(default)]
    pub usage: Option<OpenAIUsage>,
}

/// Choice in OpenAI response
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChoice {
    #[serde(default)]
    pub message: Option<OpenAIResponseMessage>,
}

/// Message in OpenAI response choice
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Usage information in OpenAI response
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl From<OpenAIUsage> for TokenUsage {
    fn from(usage: OpenAIUsage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
        }
    }
}
