//! LLM-powered explanation of test failures
//!
//! [`FailureExplainer`] turns a [`FailureContext`] into a two-message prompt,
//! sends it through [`LlmClient`] and hands back the model's text. When the
//! feature is disabled or no API key is configured it answers with a fixed
//! notice and never touches the network.
//!
//! ```rust,no_run
//! use failure_explainer::{FailureContext, FailureExplainer};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let explainer = FailureExplainer::from_env()?;
//! let context = FailureContext::new("login > rejects bad password", "Timeout 5000ms exceeded")
//!     .with_stack_trace("at LoginPage.submit (login.spec.ts:42:7)");
//!
//! let analysis = explainer.explain_failure(&context).await?;
//! let path = explainer.save_analysis(&context.test_title, &analysis).await?;
//! println!("analysis written to {}", path.display());
//! # Ok(())
//! # }
//! ```

use crate::client::LlmClient;
use crate::config::LlmConfig;
use crate::core_types::messages::ChatMessage;
use crate::core_types::provider::LlmProvider;
use crate::error::LlmResult;
use crate::logging::{log_debug, log_info};
use crate::report;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

/// Returned when `enable_failure_explainer` is off
pub const DISABLED_NOTICE: &str = "Failure explainer is disabled.";

/// Returned when no API key is configured
pub const SKIPPED_NOTICE: &str = "Failure explainer skipped: no LLM API key configured.";

/// Fixed instruction sent as the system message
pub const SYSTEM_PROMPT: &str = "You are an expert test automation engineer. Analyze test failures and provide:
1. Likely root cause
2. Suggested fixes
3. Relevant selectors or locators to check
4. Common pitfalls that might apply

Be concise and actionable.";

/// What is known about a failing test
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureContext {
    pub test_title: String,
    pub error_message: String,
    pub stack_trace: Option<String>,
    pub trace_path: Option<String>,
    pub screenshot_path: Option<String>,
}

impl FailureContext {
    pub fn new(test_title: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            test_title: test_title.into(),
            error_message: error_message.into(),
            ..Default::default()
        }
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    pub fn with_trace_path(mut self, trace_path: impl Into<String>) -> Self {
        self.trace_path = Some(trace_path.into());
        self
    }

    pub fn with_screenshot_path(mut self, screenshot_path: impl Into<String>) -> Self {
        self.screenshot_path = Some(screenshot_path.into());
        self
    }
}

/// Result of an explain attempt, distinguishing soft skips from model output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    Disabled,
    Skipped,
    Analysis(String),
}

impl Explanation {
    /// Text handed to the caller: the fixed notice or the model's answer
    pub fn into_text(self) -> String {
        match self {
            Explanation::Disabled => DISABLED_NOTICE.to_string(),
            Explanation::Skipped => SKIPPED_NOTICE.to_string(),
            Explanation::Analysis(text) => text,
        }
    }

    pub fn is_analysis(&self) -> bool {
        matches!(self, Explanation::Analysis(_))
    }
}

/// Join the present fields of `context` with blank lines
///
/// Absent or empty optional fields are left out entirely.
pub fn build_user_prompt(context: &FailureContext) -> String {
    let mut sections = vec![
        format!("Test: {}", context.test_title),
        format!("Error: {}", context.error_message),
    ];
    if let Some(stack) = optional(&context.stack_trace) {
        sections.push(format!("Stack trace:\n{stack}"));
    }
    if let Some(trace) = optional(&context.trace_path) {
        sections.push(format!("Trace available at: {trace}"));
    }
    if let Some(screenshot) = optional(&context.screenshot_path) {
        sections.push(format!("Screenshot available at: {screenshot}"));
    }

    sections.join("\n\n")
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// The system + user pair sent for one failure
pub fn build_messages(context: &FailureContext) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_user_prompt(context)),
    ]
}

/// Explains test failures with the configured provider
///
/// Configuration is immutable and the provider client is built on first use,
/// then shared by every call and every clone.
#[derive(Debug, Clone)]
pub struct FailureExplainer {
    config: Arc<LlmConfig>,
    client: Arc<OnceCell<LlmClient>>,
}

impl FailureExplainer {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(OnceCell::new()),
        }
    }

    /// Build an explainer from environment variables
    pub fn from_env() -> LlmResult<Self> {
        Ok(Self::new(LlmConfig::from_env()?))
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Provider client, created from the configuration on first call
    pub(crate) async fn client(&self) -> LlmResult<&LlmClient> {
        let config = self.config.as_ref();
        self.client
            .get_or_try_init(|| async { LlmClient::from_config(config.clone()) })
            .await
    }

    /// Ask the model to diagnose a failure
    ///
    /// Returns [`DISABLED_NOTICE`] or [`SKIPPED_NOTICE`] without any network
    /// activity when the feature is off or unconfigured. Provider errors
    /// propagate unchanged.
    pub async fn explain_failure(&self, context: &FailureContext) -> LlmResult<String> {
        self.explain(context).await.map(Explanation::into_text)
    }

    /// Like [`explain_failure`](Self::explain_failure) but keeps the skip reason
    pub async fn explain(&self, context: &FailureContext) -> LlmResult<Explanation> {
        if !self.config.enable_failure_explainer {
            log_debug!(test_title = %context.test_title, "Failure explainer disabled");
            return Ok(Explanation::Disabled);
        }
        if !self.config.has_api_key() {
            log_debug!(test_title = %context.test_title, "No LLM API key, skipping explanation");
            return Ok(Explanation::Skipped);
        }

        let client = self.client().await?;
        let messages = build_messages(context);

        let start_time = Instant::now();
        let response = client.chat(&messages).await?;

        log_info!(
            provider = client.provider_name(),
            test_title = %context.test_title,
            duration_ms = start_time.elapsed().as_millis() as u64,
            prompt_tokens = response.usage.map(|u| u.prompt_tokens),
            completion_tokens = response.usage.map(|u| u.completion_tokens),
            "Failure explained"
        );

        Ok(Explanation::Analysis(response.content))
    }

    /// Write an analysis under the configured report directory
    pub async fn save_analysis(&self, test_title: &str, analysis: &str) -> LlmResult<PathBuf> {
        report::save_analysis(&self.config.report_dir, test_title, analysis).await
    }

    /// Explain a failure and persist the result when it came from the model
    ///
    /// Soft skips are returned as text with no report written.
    pub async fn explain_and_save(
        &self,
        context: &FailureContext,
    ) -> LlmResult<(String, Option<PathBuf>)> {
        let explanation = self.explain(context).await?;
        if !explanation.is_analysis() {
            return Ok((explanation.into_text(), None));
        }

        let text = explanation.into_text();
        let path = self.save_analysis(&context.test_title, &text).await?;
        Ok((text, Some(path)))
    }
}
