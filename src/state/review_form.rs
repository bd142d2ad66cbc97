//! Review form state and its transitions
//!
//! [`ReviewFormController`] owns the whole view state of the review page and
//! is the only place it changes. Front ends call its transition functions
//! from their input handlers and render from [`ReviewFormController::state`].

use crate::api::ReviewApi;
use crate::error::{SubmitError, ValidationError};
use chrono::{DateTime, Local};

/// Maximum review length in characters
pub const MAX_REVIEW_CHARS: usize = 5000;

/// Highest selectable star rating
pub const MAX_RATING: u8 = 5;

/// Server acknowledgement of an accepted review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// Absent when the server acknowledged without an id
    pub review_id: Option<String>,
    pub ai_response: Option<String>,
    /// When the acknowledgement was received
    pub received_at: DateTime<Local>,
}

/// A validated rating and review pair, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub rating: u8,
    pub review_text: String,
}

/// View state of the review form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// 0 means unselected
    pub rating: u8,
    pub review_text: String,
    /// True only while a request is outstanding
    pub submitting: bool,
    pub error_message: Option<String>,
    pub result: Option<SubmissionResult>,
}

/// Lifecycle phase derived from [`FormState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Succeeded,
}

/// Holds the review form state and applies every transition to it
#[derive(Debug, Clone, Default)]
pub struct ReviewFormController {
    state: FormState,
}

impl From<FormState> for ReviewFormController {
    fn from(state: FormState) -> Self {
        Self { state }
    }
}

impl ReviewFormController {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.submitting {
            Phase::Submitting
        } else if self.state.result.is_some() {
            Phase::Succeeded
        } else {
            Phase::Editing
        }
    }

    /// Select a star rating. Values outside 1..=5 are ignored.
    pub fn set_rating(&mut self, value: u8) {
        if self.state.submitting {
            return;
        }
        if !(1..=MAX_RATING).contains(&value) {
            tracing::debug!(value, "Ignoring out-of-range rating");
            return;
        }
        self.state.rating = value;
        self.state.error_message = None;
    }

    /// Replace the review text, truncating to [`MAX_REVIEW_CHARS`]
    pub fn set_review_text(&mut self, text: impl Into<String>) {
        if self.state.submitting {
            return;
        }
        let mut text = text.into();
        if let Some((byte_idx, _)) = text.char_indices().nth(MAX_REVIEW_CHARS) {
            text.truncate(byte_idx);
        }
        self.state.review_text = text;
        self.state.error_message = None;
    }

    /// Append one character unless the text is already at the cap
    pub fn push_char(&mut self, c: char) {
        if self.state.submitting || self.char_count() >= MAX_REVIEW_CHARS {
            return;
        }
        self.state.review_text.push(c);
        self.state.error_message = None;
    }

    /// Remove the last character
    pub fn pop_char(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.review_text.pop();
        self.state.error_message = None;
    }

    pub fn char_count(&self) -> usize {
        self.state.review_text.chars().count()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.state.submitting
            && self.state.rating > 0
            && !self.state.review_text.trim().is_empty()
    }

    /// Human label for the current rating
    pub fn rating_label(&self) -> Option<&'static str> {
        rating_label(self.state.rating)
    }

    /// Check the current input without changing state
    pub fn validate(&self) -> Result<ReviewSubmission, ValidationError> {
        if self.state.rating == 0 {
            return Err(ValidationError::MissingRating);
        }
        if self.state.review_text.trim().is_empty() {
            return Err(ValidationError::EmptyReview);
        }
        if self.char_count() > MAX_REVIEW_CHARS {
            return Err(ValidationError::ReviewTooLong {
                max: MAX_REVIEW_CHARS,
            });
        }
        Ok(ReviewSubmission {
            rating: self.state.rating,
            review_text: self.state.review_text.clone(),
        })
    }

    /// Validate and enter the submitting phase.
    ///
    /// On success the caller must send the returned submission and pass the
    /// outcome to [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<ReviewSubmission, SubmitError> {
        if self.state.submitting {
            return Err(SubmitError::InFlight);
        }

        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(err) => {
                tracing::debug!(error = %err, "Review failed validation");
                self.state.error_message = Some(err.to_string());
                return Err(err.into());
            }
        };

        self.state.submitting = true;
        self.state.error_message = None;
        self.state.result = None;
        Ok(submission)
    }

    /// Apply the outcome of a request started with [`begin_submit`](Self::begin_submit)
    pub fn finish_submit(
        &mut self,
        outcome: Result<SubmissionResult, SubmitError>,
    ) -> Result<(), SubmitError> {
        let outcome = match outcome {
            Ok(result) => {
                tracing::debug!(review_id = ?result.review_id, "Review accepted");
                self.state.result = Some(result);
                self.state.error_message = None;
                self.state.rating = 0;
                self.state.review_text.clear();
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "Review submission failed");
                self.state.result = None;
                self.state.error_message = Some(err.user_message());
                Err(err)
            }
        };
        self.state.submitting = false;
        outcome
    }

    /// Validate, send through `api`, and apply the outcome
    ///
    /// For callers that can await inline. Front ends that must keep drawing
    /// while the request runs use `begin_submit` and `finish_submit` instead.
    #[allow(dead_code)]
    pub async fn submit<A>(&mut self, api: &A) -> Result<(), SubmitError>
    where
        A: ReviewApi + ?Sized,
    {
        let submission = self.begin_submit()?;
        let outcome = api.submit_review(&submission).await;
        self.finish_submit(outcome)
    }

    /// Return from the success view to a fresh form
    pub fn reset(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.result = None;
        self.state.rating = 0;
        self.state.review_text.clear();
    }
}

/// Label shown next to the stars for a rating
pub fn rating_label(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("Poor"),
        2 => Some("Fair"),
        3 => Some("Good"),
        4 => Some("Very Good"),
        5 => Some("Excellent"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockReviewApi;
    use pretty_assertions::assert_eq;
    use tokio_test::{assert_err, assert_ok};

    fn filled_form(rating: u8, text: &str) -> ReviewFormController {
        ReviewFormController::from(FormState {
            rating,
            review_text: text.to_string(),
            ..Default::default()
        })
    }

    fn accepted(review_id: &str, ai_response: Option<&str>) -> SubmissionResult {
        SubmissionResult {
            review_id: Some(review_id.to_string()),
            ai_response: ai_response.map(str::to_string),
            received_at: Local::now(),
        }
    }

    fn unused_api() -> MockReviewApi {
        let mut api = MockReviewApi::new();
        api.expect_submit_review().never();
        api
    }

    mod inputs {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_has_defaults() {
            let form = ReviewFormController::default();
            assert_eq!(form.state(), &FormState::default());
            assert_eq!(form.phase(), Phase::Editing);
            assert!(!form.can_submit());
        }

        #[test]
        fn test_set_rating_clears_error() {
            let mut form = filled_form(0, "");
            form.state.error_message = Some("Please select a rating".to_string());
            form.set_rating(3);
            assert_eq!(form.state().rating, 3);
            assert!(form.state().error_message.is_none());
        }

        #[test]
        fn test_set_rating_ignores_out_of_range() {
            let mut form = filled_form(2, "");
            form.set_rating(0);
            form.set_rating(6);
            assert_eq!(form.state().rating, 2);
        }

        #[test]
        fn test_set_review_text_clears_error() {
            let mut form = filled_form(0, "");
            form.state.error_message = Some("Please write a review".to_string());
            form.set_review_text("Lovely staff");
            assert_eq!(form.state().review_text, "Lovely staff");
            assert!(form.state().error_message.is_none());
        }

        #[test]
        fn test_set_review_text_truncates_to_cap() {
            let mut form = ReviewFormController::default();
            form.set_review_text("é".repeat(MAX_REVIEW_CHARS + 20));
            assert_eq!(form.char_count(), MAX_REVIEW_CHARS);
        }

        #[test]
        fn test_push_char_stops_at_cap() {
            let mut form = filled_form(0, &"a".repeat(MAX_REVIEW_CHARS));
            form.push_char('b');
            assert_eq!(form.char_count(), MAX_REVIEW_CHARS);
            assert!(!form.state().review_text.ends_with('b'));
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut form = ReviewFormController::default();
            form.push_char('h');
            form.push_char('i');
            form.pop_char();
            assert_eq!(form.state().review_text, "h");
        }

        #[test]
        fn test_inputs_ignored_while_submitting() {
            let mut form = filled_form(4, "Great service");
            assert_ok!(form.begin_submit());

            form.set_rating(1);
            form.set_review_text("changed");
            form.push_char('x');
            form.pop_char();
            form.reset();

            assert_eq!(form.state().rating, 4);
            assert_eq!(form.state().review_text, "Great service");
            assert!(form.state().submitting);
        }

        #[test]
        fn test_rating_labels() {
            assert_eq!(rating_label(0), None);
            assert_eq!(rating_label(1), Some("Poor"));
            assert_eq!(rating_label(2), Some("Fair"));
            assert_eq!(rating_label(3), Some("Good"));
            assert_eq!(rating_label(4), Some("Very Good"));
            assert_eq!(rating_label(5), Some("Excellent"));
        }

        #[test]
        fn test_can_submit_requires_rating_and_text() {
            assert!(!filled_form(0, "text").can_submit());
            assert!(!filled_form(3, "   ").can_submit());
            assert!(filled_form(3, "text").can_submit());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_missing_rating_regardless_of_text() {
            for text in ["", "   ", "Great service"] {
                let mut form = filled_form(0, text);
                let err = form.submit(&unused_api()).await.unwrap_err();
                assert_eq!(err, SubmitError::Validation(ValidationError::MissingRating));
                assert_eq!(
                    form.state().error_message.as_deref(),
                    Some("Please select a rating")
                );
                assert!(!form.state().submitting);
            }
        }

        #[tokio::test]
        async fn test_blank_review_for_every_rating() {
            for rating in 1..=MAX_RATING {
                for text in ["", " ", "\n\t  "] {
                    let mut form = filled_form(rating, text);
                    let err = form.submit(&unused_api()).await.unwrap_err();
                    assert_eq!(err, SubmitError::Validation(ValidationError::EmptyReview));
                    assert_eq!(
                        form.state().error_message.as_deref(),
                        Some("Please write a review")
                    );
                }
            }
        }

        #[tokio::test]
        async fn test_review_too_long() {
            let mut form = filled_form(5, &"x".repeat(MAX_REVIEW_CHARS + 1));
            let err = form.submit(&unused_api()).await.unwrap_err();
            assert!(matches!(
                err,
                SubmitError::Validation(ValidationError::ReviewTooLong { .. })
            ));
            assert_eq!(
                form.state().error_message.as_deref(),
                Some("Review text is too long (maximum 5000 characters)")
            );
        }

        #[test]
        fn test_review_at_cap_is_valid() {
            let form = filled_form(5, &"x".repeat(MAX_REVIEW_CHARS));
            assert_ok!(form.validate());
        }

        #[test]
        fn test_validation_failure_stays_editing() {
            let mut form = filled_form(0, "text");
            assert_err!(form.begin_submit());
            assert_eq!(form.phase(), Phase::Editing);
            assert!(form.state().result.is_none());
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::error::GENERIC_ERROR_MESSAGE;

        #[tokio::test]
        async fn test_success_moves_to_succeeded_and_resets_inputs() {
            let mut api = MockReviewApi::new();
            api.expect_submit_review()
                .withf(|s| s.rating == 4 && s.review_text == "Great service")
                .times(1)
                .returning(|_| Ok(accepted("r1", Some("Thanks!"))));

            let mut form = filled_form(4, "Great service");
            assert_ok!(form.submit(&api).await);

            assert_eq!(form.phase(), Phase::Succeeded);
            let result = form.state().result.as_ref().unwrap();
            assert_eq!(result.review_id.as_deref(), Some("r1"));
            assert_eq!(result.ai_response.as_deref(), Some("Thanks!"));
            assert_eq!(form.state().rating, 0);
            assert_eq!(form.state().review_text, "");
            assert!(form.state().error_message.is_none());
            assert!(!form.state().submitting);
        }

        #[tokio::test]
        async fn test_success_without_review_id_still_succeeds() {
            let mut api = MockReviewApi::new();
            api.expect_submit_review().times(1).returning(|_| {
                Ok(SubmissionResult {
                    review_id: None,
                    ai_response: Some("Thanks!".to_string()),
                    received_at: Local::now(),
                })
            });

            let mut form = filled_form(5, "Lovely");
            assert_ok!(form.submit(&api).await);

            assert_eq!(form.phase(), Phase::Succeeded);
            assert_eq!(form.state().result.as_ref().unwrap().review_id, None);
            assert!(form.state().error_message.is_none());
        }

        #[tokio::test]
        async fn test_server_error_returns_to_editing() {
            let mut api = MockReviewApi::new();
            api.expect_submit_review().times(1).returning(|_| {
                Err(SubmitError::Server {
                    status: 500,
                    message: Some("server down".to_string()),
                })
            });

            let mut form = filled_form(4, "Great service");
            assert_err!(form.submit(&api).await);

            assert_eq!(form.phase(), Phase::Editing);
            assert_eq!(form.state().error_message.as_deref(), Some("server down"));
            assert!(!form.state().submitting);
            assert!(form.state().result.is_none());
            // Input survives a failed attempt
            assert_eq!(form.state().rating, 4);
            assert_eq!(form.state().review_text, "Great service");
        }

        #[tokio::test]
        async fn test_network_error_message() {
            let mut api = MockReviewApi::new();
            api.expect_submit_review()
                .returning(|_| Err(SubmitError::Network("connection refused".to_string())));

            let mut form = filled_form(2, "Slow delivery");
            assert_err!(form.submit(&api).await);
            assert_eq!(
                form.state().error_message.as_deref(),
                Some("connection refused")
            );
            assert!(!form.state().submitting);
        }

        #[tokio::test]
        async fn test_network_error_without_message_uses_fallback() {
            let mut api = MockReviewApi::new();
            api.expect_submit_review()
                .returning(|_| Err(SubmitError::Network(String::new())));

            let mut form = filled_form(2, "Slow delivery");
            assert_err!(form.submit(&api).await);
            assert_eq!(
                form.state().error_message.as_deref(),
                Some(GENERIC_ERROR_MESSAGE)
            );
        }

        #[test]
        fn test_begin_submit_sets_busy_and_clears_outcome() {
            let mut form = filled_form(3, "Fine");
            form.state.error_message = Some("old".to_string());

            let submission = form.begin_submit().unwrap();

            assert_eq!(
                submission,
                ReviewSubmission {
                    rating: 3,
                    review_text: "Fine".to_string()
                }
            );
            assert_eq!(form.phase(), Phase::Submitting);
            assert!(form.state().error_message.is_none());
            assert!(form.state().result.is_none());
            assert!(!form.can_submit());
        }

        #[test]
        fn test_begin_submit_twice_is_rejected() {
            let mut form = filled_form(3, "Fine");
            assert_ok!(form.begin_submit());
            let err = form.begin_submit().unwrap_err();
            assert_eq!(err, SubmitError::InFlight);
            assert!(form.state().submitting);
            assert!(form.state().error_message.is_none());
        }

        #[test]
        fn test_finish_submit_always_clears_busy() {
            let mut form = filled_form(3, "Fine");
            assert_ok!(form.begin_submit());
            assert_err!(form.finish_submit(Err(SubmitError::Network("boom".to_string()))));
            assert!(!form.state().submitting);

            assert_ok!(form.begin_submit());
            assert_ok!(form.finish_submit(Ok(accepted("r2", None))));
            assert!(!form.state().submitting);
        }

        #[test]
        fn test_result_and_error_never_both_set() {
            let mut form = filled_form(3, "Fine");
            assert_ok!(form.begin_submit());
            assert_ok!(form.finish_submit(Ok(accepted("r2", None))));
            assert!(form.state().error_message.is_none());

            form.reset();
            form.set_rating(1);
            form.set_review_text("again");
            assert_ok!(form.begin_submit());
            assert_err!(form.finish_submit(Err(SubmitError::Network("down".to_string()))));
            assert!(form.state().result.is_none());
            assert!(form.state().error_message.is_some());
        }

        #[tokio::test]
        async fn test_reset_after_success_is_idempotent() {
            let mut api = MockReviewApi::new();
            api.expect_submit_review()
                .returning(|_| Ok(accepted("r1", Some("Thanks!"))));

            let mut form = filled_form(4, "Great service");
            assert_ok!(form.submit(&api).await);
            assert_eq!(form.phase(), Phase::Succeeded);

            for _ in 0..3 {
                form.reset();
                assert_eq!(form.phase(), Phase::Editing);
                assert_eq!(form.state().rating, 0);
                assert_eq!(form.state().review_text, "");
                assert!(form.state().result.is_none());
            }
        }

        #[tokio::test]
        async fn test_cycle_repeats_after_reset() {
            let mut api = MockReviewApi::new();
            api.expect_submit_review()
                .times(2)
                .returning(|s| Ok(accepted(&format!("r{}", s.rating), None)));

            let mut form = ReviewFormController::default();
            form.set_rating(1);
            form.set_review_text("first");
            assert_ok!(form.submit(&api).await);
            form.reset();

            form.set_rating(5);
            form.set_review_text("second");
            assert_ok!(form.submit(&api).await);
            assert_eq!(
                form.state().result.as_ref().unwrap().review_id.as_deref(),
                Some("r5")
            );
        }
    }
}
