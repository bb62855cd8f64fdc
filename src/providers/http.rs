//! HTTP plumbing shared by every provider
//!
//! One POST with a JSON body, one JSON response. Non-success statuses become
//! [`LlmError::ApiError`] carrying the raw body text.

use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

/// Thin JSON-over-HTTP client
#[derive(Debug, Clone, Default)]
pub struct JsonHttpClient {
    client: reqwest::Client,
}

impl JsonHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Headers for bearer-token APIs (OpenAI, Groq)
    pub fn bearer_headers(api_key: &str) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let value = sensitive_header(&format!("Bearer {api_key}"))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Headers for APIs taking the key in a named header (Google)
    pub fn api_key_headers(header_name: &'static str, api_key: &str) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let value = sensitive_header(api_key)?;
        headers.insert(HeaderName::from_static(header_name), value);
        Ok(headers)
    }

    /// Send a single POST request and decode the JSON response
    pub async fn post_json<Req, Resp>(
        &self,
        provider: &'static str,
        url: &str,
        headers: &HeaderMap,
        body: &Req,
    ) -> LlmResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let start_time = Instant::now();

        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    provider = provider,
                    url = %url,
                    error = %e,
                    "HTTP request failed"
                );
                LlmError::request_failed(
                    format!("{provider} request failed: {e}"),
                    Some(Box::new(e)),
                )
            })?;

        let status = response.status();
        log_debug!(
            provider = provider,
            status = status.as_u16(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Provider responded"
        );

        if !status.is_success() {
            return Err(handle_error_response(provider, response).await);
        }

        parse_success_response(provider, response).await
    }
}

/// Header value carrying a credential, hidden from `Debug` output
fn sensitive_header(raw: &str) -> LlmResult<HeaderValue> {
    let mut value = HeaderValue::from_str(raw).map_err(|e| {
        let message = format!("Invalid API key format: {e}");
        LlmError::configuration_error(message)
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Handle non-success HTTP responses
async fn handle_error_response(provider: &'static str, response: reqwest::Response) -> LlmError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {e}>"));

    LlmError::api_error(provider, status, body)
}

/// Parse successful HTTP response body as JSON
async fn parse_success_response<Resp: DeserializeOwned>(
    provider: &'static str,
    response: reqwest::Response,
) -> LlmResult<Resp> {
    let raw_body = response.text().await.map_err(|e| {
        log_error!(provider = provider, error = %e, "Failed to read response body");
        LlmError::response_parsing_error(format!("Failed to read {provider} response: {e}"))
    })?;

    serde_json::from_str(&raw_body).map_err(|e| {
        log_error!(
            provider = provider,
            error = %e,
            raw_body = %raw_body,
            "Failed to parse response"
        );
        LlmError::response_parsing_error(format!("Invalid {provider} response: {e}"))
    })
}
