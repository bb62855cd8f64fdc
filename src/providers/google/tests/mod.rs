//! Tests for the Google Gemini provider
//!
//! Conversion logic is tested here; HTTP behavior lives in
//! tests/google_provider_integration_tests.rs.
