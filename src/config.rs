//! Process-wide LLM configuration
//!
//! Configuration is captured once into an immutable [`LlmConfig`] and passed
//! explicitly to the client and the explainer. [`LlmConfig::from_env`] is the
//! only place that touches the process environment.

use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// API key variables in precedence order; the first non-empty one wins
pub const API_KEY_VARS: [&str; 5] = [
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
    "GROQ_API_KEY",
    "OPENAI_API_KEY",
    "LLM_API_KEY",
];

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const DEFAULT_REPORT_DIR: &str = "reports/llm-analysis";

/// Supported hosted LLM services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Groq,
    #[serde(rename = "openai")]
    OpenAI,
}

impl ProviderKind {
    /// Identifier used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::Groq => "groq",
            ProviderKind::OpenAI => "openai",
        }
    }

    /// Name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Google => "Google Gemini",
            ProviderKind::Groq => "Groq",
            ProviderKind::OpenAI => "OpenAI",
        }
    }

    /// Scheme and host of the provider's fixed endpoint
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::Google => "https://generativelanguage.googleapis.com",
            ProviderKind::Groq => "https://api.groq.com",
            ProviderKind::OpenAI => "https://api.openai.com",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "groq" => Ok(ProviderKind::Groq),
            "openai" => Ok(ProviderKind::OpenAI),
            _ => Err(LlmError::unsupported_provider(s)),
        }
    }
}

/// Configuration shared by the provider adapter and the failure explainer
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: ProviderKind,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub enable_failure_explainer: bool,
    pub report_dir: PathBuf,
    /// Overrides the provider's endpoint host (proxies, tests)
    pub base_url: Option<String>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("enable_failure_explainer", &self.enable_failure_explainer)
            .field("report_dir", &self.report_dir)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Google,
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            enable_failure_explainer: true,
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            base_url: None,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::UnsupportedProvider`] if `LLM_PROVIDER` names an
    /// unknown provider, and [`LlmError::ConfigurationError`] if a numeric
    /// variable does not parse or is out of range.
    pub fn from_env() -> LlmResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset, so `LLM_MAX_TOKENS=` falls back to
    /// the default.
    pub fn from_lookup<F>(lookup: F) -> LlmResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let provider = match get("LLM_PROVIDER") {
            Some(name) => name.parse::<ProviderKind>()?,
            None => ProviderKind::Google,
        };

        let api_key = API_KEY_VARS.iter().find_map(|key| get(key));

        let max_tokens = match get("LLM_MAX_TOKENS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                LlmError::configuration_error(format!("LLM_MAX_TOKENS '{raw}' is invalid: {e}"))
            })?,
            None => DEFAULT_MAX_TOKENS,
        };

        let temperature = match get("LLM_TEMPERATURE") {
            Some(raw) => raw.trim().parse::<f64>().map_err(|e| {
                LlmError::configuration_error(format!("LLM_TEMPERATURE '{raw}' is invalid: {e}"))
            })?,
            None => DEFAULT_TEMPERATURE,
        };

        let config = Self {
            provider,
            model: get("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            api_key,
            max_tokens,
            temperature,
            enable_failure_explainer: lookup("ENABLE_FAILURE_EXPLAINER").as_deref()
                != Some("false"),
            report_dir: get("LLM_REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_DIR)),
            base_url: get("LLM_BASE_URL"),
        };

        config.validate()?;

        log_debug!(
            provider = %config.provider,
            model = %config.model,
            has_api_key = config.has_api_key(),
            max_tokens = config.max_tokens,
            temperature = config.temperature,
            enable_failure_explainer = config.enable_failure_explainer,
            report_dir = %config.report_dir.display(),
            "LLM configuration loaded"
        );

        Ok(config)
    }

    /// Validate numeric ranges
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if `max_tokens` is zero or
    /// `temperature` lies outside `[0, 2]`.
    pub fn validate(&self) -> LlmResult<()> {
        if self.max_tokens == 0 {
            return Err(LlmError::configuration_error(
                "max_tokens must be a positive integer",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(LlmError::configuration_error(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            )));
        }
        Ok(())
    }

    /// Whether a non-empty API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Endpoint host for the selected provider, without trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
    }
}
