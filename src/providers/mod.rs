//! LLM Provider implementations
//!
//! - **google**: Google Gemini generateContent API
//! - **openai**: OpenAI chat completions
//! - **groq**: Groq's OpenAI-compatible chat completions
//! - **openai_shared**: Shared structures and client for OpenAI-compatible providers
//! - **http**: JSON-over-HTTP plumbing used by all of the above
//!
//! ```text
//!        http.rs
//!       /       \
//! google/    openai_shared/
//!              |        |
//!          openai.rs  groq.rs
//! ```

pub mod google;
pub mod groq;
pub mod http;
pub mod openai;
pub mod openai_shared;

pub use google::GoogleProvider;
pub use groq::GroqProvider;
pub use openai::OpenAIProvider;
