//! Trait abstraction for the review API to enable mocking in tests

use crate::error::SubmitError;
use crate::state::{ReviewSubmission, SubmissionResult};
use async_trait::async_trait;

/// Trait for review API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Submit one review and interpret the server's acknowledgement
    async fn submit_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<SubmissionResult, SubmitError>;
}
