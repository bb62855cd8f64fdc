// Test modules for failure-explainer
//
// Each source file has a corresponding test file focused on its behavior.
// HTTP round trips against a mock server live in the tests/ directory.

// Test helper utilities
pub mod helpers;

pub mod error;
pub mod report;
