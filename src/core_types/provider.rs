//! Provider trait for LLM abstraction
//!
//! Defines the `LlmProvider` trait that every provider implements.

use crate::core_types::messages::{ChatMessage, ChatResponse};
use crate::error::LlmResult;

/// Trait for LLM providers to implement
///
/// A call issues exactly one HTTP request. There is no retry, caching or
/// rate limiting behind it.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the ordered messages and normalize the provider's answer.
    async fn chat(&self, messages: &[ChatMessage]) -> LlmResult<ChatResponse>;

    /// Get provider name for logging and debugging
    fn provider_name(&self) -> &'static str;
}
