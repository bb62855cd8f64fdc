//! Error types for LLM operations.
//!
//! The main error type is [`LlmError`], which covers every failure the
//! adapter and the explainer can surface:
//! - Configuration errors (missing API key, unsupported provider, bad values)
//! - Provider API errors (non-success HTTP status)
//! - Transport failures
//! - Unreadable response bodies
//! - Report persistence failures
//!
//! None of these are retried. Callers receive them synchronously.
//!
//! # Example
//!
//! ```rust,no_run
//! use failure_explainer::{LlmError, error::ErrorCategory};
//!
//! fn report(err: &LlmError) {
//!     match err.category() {
//!         ErrorCategory::Client => println!("Fix your configuration: {err}"),
//!         _ => println!("Provider or system issue: {}", err.user_message()),
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (LLM providers, network issues).
    External,

    /// Internal system errors (local filesystem, invariant violations).
    Internal,

    /// Client errors (configuration, authentication setup).
    ///
    /// The caller made a mistake they can fix (missing API key,
    /// unknown provider name, out-of-range temperature).
    Client,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,
}

// ============================================================================
// LLM Error types
// ============================================================================

/// Convenient result type for LLM operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while talking to a provider or saving an analysis.
///
/// | Variant | Category |
/// |---------|----------|
/// | `UnsupportedProvider` | Client |
/// | `ConfigurationError` | Client |
/// | `ApiError` | External |
/// | `RequestFailed` | External |
/// | `ResponseParsingError` | External |
/// | `Io` | Internal |
#[derive(Error, Debug)]
pub enum LlmError {
    /// The specified provider is not supported.
    ///
    /// Supported providers: "google", "groq", "openai"
    #[error("Unsupported LLM provider: {provider}")]
    UnsupportedProvider {
        /// The provider name that was requested.
        provider: String,
    },

    /// Provider configuration is invalid or incomplete.
    #[error("LLM configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    ///
    /// `body` is the raw response text, not parsed.
    #[error("{provider} API error: {status} - {body}")]
    ApiError {
        /// Human readable provider name.
        provider: &'static str,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The HTTP request never produced a response.
    #[error("Request failed: {message}")]
    RequestFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body could not be read or was not JSON.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError { message: String },

    /// Writing an analysis report failed.
    #[error("Report I/O failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl LlmError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedProvider { .. } => ErrorCategory::Client,
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::ApiError { .. } => ErrorCategory::External,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status code, when the provider returned one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Convert to a user-friendly message suitable for display.
    ///
    /// Technical details such as response bodies are stripped.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedProvider { provider } => {
                format!(
                    "The AI provider '{provider}' is not supported (use google, groq or openai)"
                )
            }
            Self::ConfigurationError { .. } => {
                "AI service configuration issue. Please check your settings".to_string()
            }
            Self::ApiError { status, .. } if *status == 401 || *status == 403 => {
                "Authentication failed. Please check your API key".to_string()
            }
            Self::ApiError { status, .. } if *status == 429 => {
                "The AI service is rate limiting requests. Please try again later".to_string()
            }
            Self::ApiError { .. } | Self::RequestFailed { .. } => {
                "Unable to communicate with AI service".to_string()
            }
            Self::ResponseParsingError { .. } => {
                "Received an invalid response from AI service".to_string()
            }
            Self::Io { .. } => "Unable to save the failure analysis".to_string(),
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create an unsupported provider error (logs at ERROR level).
    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        let provider = provider.into();
        log_error!(
            provider = %provider,
            error_type = "unsupported_provider",
            "Unsupported LLM provider requested"
        );
        Self::UnsupportedProvider { provider }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "LLM configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn api_error(provider: &'static str, status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        log_error!(
            error_type = "api_error",
            provider = provider,
            status = status,
            body = %body,
            "LLM provider returned an error status"
        );
        Self::ApiError {
            provider,
            status,
            body,
        }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "LLM request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "LLM response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        let message = message.into();
        log_error!(
            error_type = "io",
            message = %message,
            error = %source,
            "Failure analysis report could not be written"
        );
        Self::Io { message, source }
    }
}
