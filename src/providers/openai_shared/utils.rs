//! Request building and response normalization for OpenAI-compatible providers
//!
//! OpenAI and Groq differ only in endpoint and name, so both delegate to
//! [`OpenAICompatibleClient`].

use super::types::{OpenAIRequest, OpenAIResponse};
use crate::config::{LlmConfig, ProviderKind};
use crate::core_types::messages::{ChatMessage, ChatResponse};
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use crate::providers::http::JsonHttpClient;
use reqwest::header::HeaderMap;

/// Build the chat-completions body
pub fn create_request<'a>(
    config: &'a LlmConfig,
    messages: &'a [ChatMessage],
) -> OpenAIRequest<'a> {
    OpenAIRequest {
        model: &config.model,
        messages,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

/// Normalize a chat-completions response
///
/// A missing choice, message or content yields empty content.
pub fn parse_response(response: OpenAIResponse, model: &str) -> ChatResponse {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_default();

    ChatResponse {
        content,
        usage: response.usage.map(Into::into),
        model: Some(model.to_string()),
    }
}

/// Shared client for OpenAI-compatible chat-completions endpoints
#[derive(Debug)]
pub struct OpenAICompatibleClient {
    http_client: JsonHttpClient,
    config: LlmConfig,
    url: String,
    headers: HeaderMap,
    provider_name: &'static str,
}

impl OpenAICompatibleClient {
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the API key is missing or
    /// cannot be used as a header value.
    pub fn new(config: LlmConfig, kind: ProviderKind, path: &str) -> LlmResult<Self> {
        let provider_name = kind.display_name();
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                LlmError::configuration_error(format!("{provider_name} API key is required"))
            })?;

        let headers = JsonHttpClient::bearer_headers(api_key)?;
        let url = format!("{}{}", config.base_url(), path);

        log_debug!(
            provider = kind.as_str(),
            url = %url,
            model = %config.model,
            "OpenAI-compatible provider initialized"
        );

        Ok(Self {
            http_client: JsonHttpClient::new(),
            config,
            url,
            headers,
            provider_name,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the messages verbatim and normalize the first choice
    pub async fn execute_chat_request(&self, messages: &[ChatMessage]) -> LlmResult<ChatResponse> {
        let request = create_request(&self.config, messages);

        log_debug!(
            provider = self.provider_name,
            model = %self.config.model,
            message_count = messages.len(),
            "Executing chat completion request"
        );

        let response: OpenAIResponse = self
            .http_client
            .post_json(self.provider_name, &self.url, &self.headers, &request)
            .await?;

        Ok(parse_response(response, &self.config.model))
    }
}
