//! Property-based tests for provider error classification and prompt requests

use super::error::{LlmError, LlmErrorKind};
use super::types::LlmRequest;
use proptest::prelude::*;

proptest! {
    /// Every 5xx is a transient server error
    #[test]
    fn server_errors_are_transient(status in 500u16..600, message in "[a-z ]{0,40}") {
        let err = LlmError::from_status(status, &message);
        prop_assert_eq!(err.kind, LlmErrorKind::ServerError);
        prop_assert!(err.kind.is_transient());
    }

    /// Client-side failures other than rate limiting never look transient
    #[test]
    fn client_errors_are_permanent(status in 400u16..500) {
        let err = LlmError::from_status(status, "x");
        if status == 429 {
            prop_assert_eq!(err.kind, LlmErrorKind::RateLimit);
        } else {
            prop_assert!(!err.kind.is_transient());
        }
    }

    /// The provider's message survives classification
    #[test]
    fn message_is_preserved(status in 100u16..600, message in "[a-zA-Z0-9 .]{1,60}") {
        let err = LlmError::from_status(status, &message);
        prop_assert!(err.to_string().ends_with(&message));
    }

    /// A prompt request carries exactly the prompt text
    #[test]
    fn prompt_request_round_trips(prompt in "[a-zA-Z0-9 .,!?\n]{0,200}") {
        let request = LlmRequest::prompt(prompt.clone());
        prop_assert_eq!(request.text, prompt);
    }
}
