//! Core types for the provider-agnostic chat abstraction
//!
//! ## Organization
//! - `messages` - Role-tagged messages and normalized responses
//! - `provider` - The `LlmProvider` trait

pub mod messages;
pub mod provider;

pub use messages::{ChatMessage, ChatResponse, MessageRole, TokenUsage};
pub use provider::LlmProvider;
