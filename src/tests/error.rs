// Unit Tests for LLM Error Handling System
//
// UNIT UNDER TEST: LlmError
//
// BUSINESS RESPONSIBILITY:
//   - Categorizes failures as client, external or internal
//   - Carries status code and raw body for provider API errors
//   - Generates user-friendly messages without response bodies
//
// TEST COVERAGE:
//   - Display text for each variant
//   - Category and severity mapping
//   - User message generation

use crate::error::{ErrorCategory, ErrorSeverity, LlmError};

#[cfg(test)]
mod llm_error_tests {
    use super::*;

    #[test]
    fn test_api_error_message_contains_status_and_body() {
        // Arrange & Act
        let error = LlmError::api_error("OpenAI", 500, "{\"error\":\"boom\"}");

        // Assert
        let message = error.to_string();
        assert_eq!(message, "OpenAI API error: 500 - {\"error\":\"boom\"}");
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.category(), ErrorCategory::External);
        assert_eq!(error.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_unsupported_provider_names_value() {
        let error = LlmError::unsupported_provider("cohere");

        assert_eq!(error.to_string(), "Unsupported LLM provider: cohere");
        assert_eq!(error.category(), ErrorCategory::Client);
        assert!(error.user_message().contains("cohere"));
    }

    #[test]
    fn test_configuration_error_categorization() {
        let error = LlmError::configuration_error("Missing API key");

        assert_eq!(error.category(), ErrorCategory::Client);
        assert!(error.to_string().contains("Missing API key"));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_response_parsing_error_is_warning() {
        let error = LlmError::response_parsing_error("not json");

        assert_eq!(error.category(), ErrorCategory::External);
        assert_eq!(error.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_io_error_is_internal_and_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

        let error = LlmError::io("cannot write report", source);

        assert_eq!(error.category(), ErrorCategory::Internal);
        let source = std::error::Error::source(&error).expect("source preserved");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_user_messages_hide_response_bodies() {
        let unauthorized = LlmError::api_error("Groq", 401, "secret internal detail");
        let throttled = LlmError::api_error("Groq", 429, "secret internal detail");
        let server = LlmError::api_error("Groq", 503, "secret internal detail");

        for error in [&unauthorized, &throttled, &server] {
            assert!(!error.user_message().contains("secret internal detail"));
        }
        assert!(unauthorized.user_message().contains("API key"));
        assert!(throttled.user_message().contains("rate limiting"));
    }
}
