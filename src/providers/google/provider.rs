//! Google Gemini provider implementation

use super::conversion;
use super::types::GeminiResponse;
use crate::config::{LlmConfig, ProviderKind};
use crate::core_types::messages::{ChatMessage, ChatResponse};
use crate::core_types::provider::LlmProvider;
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use crate::providers::http::JsonHttpClient;
use reqwest::header::HeaderMap;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini provider implementation
#[derive(Debug)]
pub struct GoogleProvider {
    http_client: JsonHttpClient,
    config: LlmConfig,
    url: String,
    headers: HeaderMap,
}

impl GoogleProvider {
    /// Create a new Gemini provider instance
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the API key is missing or
    /// is not a valid header value.
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                LlmError::configuration_error("Google Gemini API key is required")
            })?;

        let headers = JsonHttpClient::api_key_headers(API_KEY_HEADER, api_key)?;
        // Model goes in the path, the key stays in the header
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url(),
            config.model
        );

        log_debug!(
            provider = "google",
            url = %url,
            model = %config.model,
            "Google Gemini provider initialized"
        );

        Ok(Self {
            http_client: JsonHttpClient::new(),
            config,
            url,
            headers,
        })
    }

    /// Full generateContent URL this provider posts to
    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl LlmProvider for GoogleProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> LlmResult<ChatResponse> {
        let request = conversion::create_request(&self.config, messages);

        log_debug!(
            provider = "google",
            model = %self.config.model,
            turn_count = request.contents.len(),
            has_system_instruction = request.system_instruction.is_some(),
            "Executing generateContent request"
        );

        let response: GeminiResponse = self
            .http_client
            .post_json(
                ProviderKind::Google.display_name(),
                &self.url,
                &self.headers,
                &request,
            )
            .await?;

        Ok(conversion::parse_response(response, &self.config.model))
    }

    fn provider_name(&self) -> &'static str {
        "google"
    }
}
