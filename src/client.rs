use crate::config::{LlmConfig, ProviderKind};
use crate::core_types::messages::{ChatMessage, ChatResponse};
use crate::core_types::provider::LlmProvider;
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use crate::providers::{GoogleProvider, GroqProvider, OpenAIProvider};
use async_trait::async_trait;

/// Internal provider enum for LlmClient
#[derive(Debug)]
enum ProviderImpl {
    Google(GoogleProvider),
    Groq(GroqProvider),
    OpenAI(OpenAIProvider),
}

/// Provider adapter selected by configuration
///
/// This is the primary interface for sending chat messages. Call sites never
/// branch on the provider; they hold an `LlmClient` and call [`chat`](LlmProvider::chat).
#[derive(Debug)]
pub struct LlmClient {
    provider: ProviderImpl,
}

impl LlmClient {
    /// Create a client for the provider named in `config`
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if no API key is configured.
    pub fn from_config(config: LlmConfig) -> LlmResult<Self> {
        if !config.has_api_key() {
            return Err(LlmError::configuration_error(format!(
                "LLM API key not configured. Set one of {} (or in .env)",
                crate::config::API_KEY_VARS.join(", ")
            )));
        }

        let kind = config.provider;
        let model = config.model.clone();

        let provider = match kind {
            ProviderKind::Google => ProviderImpl::Google(GoogleProvider::new(config)?),
            ProviderKind::Groq => ProviderImpl::Groq(GroqProvider::new(config)?),
            ProviderKind::OpenAI => ProviderImpl::OpenAI(OpenAIProvider::new(config)?),
        };

        log_debug!(
            provider = kind.as_str(),
            model = %model,
            "LlmClient created"
        );

        Ok(Self { provider })
    }

    /// Create a client for a provider given by name, overriding `config.provider`
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::UnsupportedProvider`] if the name is not one of
    /// "google", "groq" or "openai", and [`LlmError::ConfigurationError`] if
    /// no API key is configured.
    pub fn create(provider_name: &str, mut config: LlmConfig) -> LlmResult<Self> {
        config.provider = provider_name.parse()?;
        Self::from_config(config)
    }

    /// Create a client using environment variables for configuration
    pub fn from_env() -> LlmResult<Self> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// URL the selected provider posts to
    pub fn endpoint(&self) -> &str {
        match &self.provider {
            ProviderImpl::Google(p) => p.endpoint(),
            ProviderImpl::Groq(p) => p.endpoint(),
            ProviderImpl::OpenAI(p) => p.endpoint(),
        }
    }
}

#[async_trait]
impl LlmProvider for LlmClient {
    async fn chat(&self, messages: &[ChatMessage]) -> LlmResult<ChatResponse> {
        match &self.provider {
            ProviderImpl::Google(p) => p.chat(messages).await,
            ProviderImpl::Groq(p) => p.chat(messages).await,
            ProviderImpl::OpenAI(p) => p.chat(messages).await,
        }
    }

    fn provider_name(&self) -> &'static str {
        match &self.provider {
            ProviderImpl::Google(p) => p.provider_name(),
            ProviderImpl::Groq(p) => p.provider_name(),
            ProviderImpl::OpenAI(p) => p.provider_name(),
        }
    }
}
