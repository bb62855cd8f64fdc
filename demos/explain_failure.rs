//! Explain a failing test and save the analysis.
//!
//! This example shows how to:
//! - Load provider settings from the environment (or a `.env` file)
//! - Describe a failing test
//! - Get an explanation and write it under the report directory
//!
//! # Running
//!
//! ```bash
//! export LLM_PROVIDER=groq
//! export GROQ_API_KEY="gsk_..."
//! export LLM_MODEL=llama-3.3-70b-versatile
//! cargo run --example explain_failure
//! ```

use failure_explainer::{FailureContext, FailureExplainer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let explainer = FailureExplainer::from_env()?;
    println!(
        "Using {} ({})",
        explainer.config().provider.display_name(),
        explainer.config().model
    );

    let context = FailureContext::new(
        "checkout > applies coupon code",
        "expect(locator).toHaveText(\"$90.00\")\nExpected: \"$90.00\"\nReceived: \"$100.00\"",
    )
    .with_stack_trace("at CheckoutPage.applyCoupon (tests/checkout.spec.ts:31:5)")
    .with_screenshot_path("test-results/checkout/failure.png");

    let (analysis, saved) = explainer.explain_and_save(&context).await?;

    println!("\n{analysis}\n");
    match saved {
        Some(path) => println!("Report written to {}", path.display()),
        None => println!("No report written."),
    }

    Ok(())
}
