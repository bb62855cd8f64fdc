//! Tests for OpenAI-compatible request building and response normalization
