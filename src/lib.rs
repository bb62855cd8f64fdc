//! # failure-explainer
//!
//! LLM-assisted diagnosis of test failures over Google Gemini, Groq, and OpenAI.
//!
//! ## Key Features
//!
//! - **Multiple Providers**: one `chat` call, three wire formats
//! - **Failure Explainer**: fixed diagnosis prompt built from a failing test's context
//! - **Reports**: analyses persisted as Markdown files
//! - **Soft skips**: disabled or unconfigured setups return a notice instead of failing
//!
//! ## Example
//!
//! ```rust,no_run
//! use failure_explainer::{ChatMessage, LlmClient, LlmConfig, LlmProvider, ProviderKind};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = LlmConfig {
//!     provider: ProviderKind::Groq,
//!     model: "llama-3.3-70b-versatile".to_string(),
//!     api_key: Some("your-api-key".to_string()),
//!     ..LlmConfig::default()
//! };
//!
//! let client = LlmClient::from_config(config)?;
//! let response = client
//!     .chat(&[ChatMessage::user("Why would a CSS selector stop matching?")])
//!     .await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;
pub mod explainer;
pub mod providers;
pub mod report;

#[cfg(test)]
pub mod tests;

pub use client::LlmClient;
pub use config::{LlmConfig, ProviderKind};
pub use core_types::{ChatMessage, ChatResponse, LlmProvider, MessageRole, TokenUsage};
pub use error::{LlmError, LlmResult};
pub use explainer::{FailureContext, FailureExplainer};
pub use report::save_analysis;
