//! Groq provider implementation
//!
//! Groq serves an OpenAI-compatible API under an `/openai` prefix.

use super::openai_shared::OpenAICompatibleClient;
use crate::config::{LlmConfig, ProviderKind};
use crate::core_types::messages::{ChatMessage, ChatResponse};
use crate::core_types::provider::LlmProvider;
use crate::error::LlmResult;

const CHAT_COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

/// Groq provider implementation
#[derive(Debug)]
pub struct GroqProvider {
    inner: OpenAICompatibleClient,
}

impl GroqProvider {
    /// Create a new Groq provider instance
    ///
    /// # Errors
    ///
    /// Returns [`crate::LlmError::ConfigurationError`] if the API key is missing.
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        Ok(Self {
            inner: OpenAICompatibleClient::new(config, ProviderKind::Groq, CHAT_COMPLETIONS_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.inner.url()
    }
}

#[async_trait::async_trait]
impl LlmProvider for GroqProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> LlmResult<ChatResponse> {
        self.inner.execute_chat_request(messages).await
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }
}
