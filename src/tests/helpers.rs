//! Test helper utilities shared by the unit test modules

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::config::{LlmConfig, ProviderKind};
use crate::explainer::FailureContext;
use std::collections::HashMap;

/// Valid configuration for the named provider
///
/// # Panics
///
/// Panics if the provider name is not recognized (test failure is appropriate).
pub fn create_test_config(provider_name: &str) -> LlmConfig {
    let (provider, model) = match provider_name {
        "google" => (ProviderKind::Google, "gemini-2.0-flash"),
        "groq" => (ProviderKind::Groq, "llama-3.3-70b-versatile"),
        "openai" => (ProviderKind::OpenAI, "gpt-4o-mini"),
        _ => panic!("Unsupported test provider: {}", provider_name),
    };

    LlmConfig {
        provider,
        model: model.to_string(),
        api_key: Some(format!("test-{provider_name}-key")),
        ..LlmConfig::default()
    }
}

/// Lookup closure over a fixed set of variables, standing in for `std::env`
pub fn env_lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// Failure context with every optional field populated
pub fn create_full_context() -> FailureContext {
    FailureContext::new("checkout > applies coupon", "expected 90 to equal 100")
        .with_stack_trace("at CheckoutPage.total (checkout.spec.ts:31:5)")
        .with_trace_path("test-results/checkout/trace.zip")
        .with_screenshot_path("test-results/checkout/failure.png")
}

/// Configuration pointing at an address nothing listens on
///
/// Any network call made with it fails fast with a transport error.
pub fn create_unreachable_config(provider_name: &str) -> LlmConfig {
    LlmConfig {
        base_url: Some("http://127.0.0.1:9".to_string()),
        ..create_test_config(provider_name)
    }
}
