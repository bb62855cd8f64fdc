//! Shared OpenAI-compatible API structures and utilities
//!
//! - `types` - Chat-completions request/response structures
//! - `utils` - Request building, response normalization and the shared client

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;

pub use types::*;
pub use utils::*;
