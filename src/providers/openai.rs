//! OpenAI provider implementation
//!
//! This provider uses the OpenAI-compatible shared structures and utilities.

use super::openai_shared::OpenAICompatibleClient;
use crate::config::{LlmConfig, ProviderKind};
use crate::core_types::messages::{ChatMessage, ChatResponse};
use crate::core_types::provider::LlmProvider;
use crate::error::LlmResult;

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// OpenAI provider implementation
#[derive(Debug)]
pub struct OpenAIProvider {
    inner: OpenAICompatibleClient,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider instance
    ///
    /// # Errors
    ///
    /// Returns [`crate::LlmError::ConfigurationError`] if the API key is missing.
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        Ok(Self {
            inner: OpenAICompatibleClient::new(
                config,
                ProviderKind::OpenAI,
                CHAT_COMPLETIONS_PATH,
            )?,
        })
    }

    /// Full chat-completions URL this provider posts to
    pub fn endpoint(&self) -> &str {
        self.inner.url()
    }
}

#[async_trait::async_trait]
impl LlmProvider for OpenAIProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> LlmResult<ChatResponse> {
        self.inner.execute_chat_request(messages).await
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
