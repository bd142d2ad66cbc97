//! Error types for review validation and submission

use thiserror::Error;

/// Shown when a failure carries no usable message of its own
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Fallback for an HTTP non-success status without a server message
const HTTP_FAILURE_FALLBACK: &str = "Failed to submit review";

/// Fallback for a `success: false` body without a server message
const REJECTED_FALLBACK: &str = "Submission failed";

/// Client-side validation failures, detected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a rating")]
    MissingRating,
    #[error("Please write a review")]
    EmptyReview,
    #[error("Review text is too long (maximum {max} characters)")]
    ReviewTooLong { max: usize },
}

/// Everything that can end a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request could not be sent, or the response could not be read or parsed
    #[error("{0}")]
    Network(String),

    /// HTTP non-success status or an explicit `success: false` body
    #[error("{}", server_message(.status, .message))]
    Server { status: u16, message: Option<String> },

    /// A submission is already outstanding
    #[error("A submission is already in progress")]
    InFlight,
}

fn server_message<'a>(status: &u16, message: &'a Option<String>) -> &'a str {
    match message.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ if (200..300).contains(status) => REJECTED_FALLBACK,
        _ => HTTP_FAILURE_FALLBACK,
    }
}

impl SubmitError {
    /// The single string surfaced to the user for this failure
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingRating.to_string(),
            "Please select a rating"
        );
        assert_eq!(
            ValidationError::EmptyReview.to_string(),
            "Please write a review"
        );
        assert_eq!(
            ValidationError::ReviewTooLong { max: 5000 }.to_string(),
            "Review text is too long (maximum 5000 characters)"
        );
    }

    #[test]
    fn test_server_error_prefers_server_message() {
        let err = SubmitError::Server {
            status: 500,
            message: Some("server down".to_string()),
        };
        assert_eq!(err.user_message(), "server down");
    }

    #[test]
    fn test_server_error_fallbacks() {
        let http = SubmitError::Server {
            status: 502,
            message: None,
        };
        assert_eq!(http.user_message(), "Failed to submit review");

        let rejected = SubmitError::Server {
            status: 200,
            message: Some(String::new()),
        };
        assert_eq!(rejected.user_message(), "Submission failed");
    }

    #[test]
    fn test_empty_network_message_uses_generic_fallback() {
        let err = SubmitError::Network("  ".to_string());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);

        let err = SubmitError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn test_validation_converts_into_submit_error() {
        let err: SubmitError = ValidationError::EmptyReview.into();
        assert!(matches!(err, SubmitError::Validation(_)));
        assert_eq!(err.user_message(), "Please write a review");
    }
}
