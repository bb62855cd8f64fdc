//! Google Gemini provider
//!
//! Gemini keeps the system prompt out of the turn list and calls the
//! assistant role "model", so it needs its own conversion layer.

mod conversion;
mod provider;
pub mod types;

#[cfg(test)]
mod tests;

pub use provider::GoogleProvider;
