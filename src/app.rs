//! Application state and core logic

use crate::api::{ReviewApi, ReviewClient};
use crate::config::TuiConfig;
use crate::error::{SubmitError, ValidationError};
use crate::state::{AppState, Focus, SubmissionResult, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

type SubmissionTask = JoinHandle<Result<SubmissionResult, SubmitError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Review API used for submissions
    api: Arc<dyn ReviewApi>,
    /// The one outstanding submission, if any
    pending: Option<SubmissionTask>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured endpoint
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = ReviewClient::new(config)?;
        tracing::info!(endpoint = client.endpoint(), "Review endpoint configured");
        Ok(Self::with_api(Arc::new(client)))
    }

    /// Create an App around any review API implementation
    pub fn with_api(api: Arc<dyn ReviewApi>) -> Self {
        Self {
            state: AppState::default(),
            api,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        if self.pending.is_some() {
            tracing::warn!("Quitting with a submission still in flight");
        }
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view() {
            View::Form => self.handle_form_key(key),
            View::Success => self.handle_success_key(key),
        }
        Ok(())
    }

    /// Handle bracketed paste into the review text
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.current_view() != View::Form || self.state.focus != Focus::ReviewText {
            return;
        }
        let mut combined = self.state.form.state().review_text.clone();
        combined.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
        self.state.form.set_review_text(combined);
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Char('s') if ctrl => self.start_submission(),
            _ => match self.state.focus {
                Focus::Rating => self.handle_rating_key(key),
                Focus::ReviewText => self.handle_review_text_key(key),
                Focus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.start_submission();
                    }
                }
            },
        }
    }

    fn handle_rating_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.step_rating(-1),
            KeyCode::Right | KeyCode::Char('l') => self.state.step_rating(1),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(d) = c.to_digit(10) {
                    self.state.form.set_rating(d as u8);
                }
            }
            KeyCode::Enter | KeyCode::Down => self.state.next_focus(),
            _ => {}
        }
    }

    fn handle_review_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.push_char(c);
            }
            KeyCode::Backspace => self.state.form.pop_char(),
            // Enter in the review adds a newline
            KeyCode::Enter => self.state.form.push_char('\n'),
            _ => {}
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            // Submit Another Review
            KeyCode::Enter | KeyCode::Char('n') => {
                self.state.form.reset();
                self.state.focus = Focus::Rating;
                self.state.status_message = None;
            }
            KeyCode::Char('y') => self.copy_ai_response(),
            _ => {}
        }
    }

    /// Validate and start the request on a background task
    fn start_submission(&mut self) {
        match self.state.form.begin_submit() {
            Ok(submission) => {
                let api = Arc::clone(&self.api);
                self.pending = Some(tokio::spawn(async move {
                    api.submit_review(&submission).await
                }));
            }
            Err(SubmitError::Validation(err)) => {
                self.state.focus = match err {
                    ValidationError::MissingRating => Focus::Rating,
                    ValidationError::EmptyReview | ValidationError::ReviewTooLong { .. } => {
                        Focus::ReviewText
                    }
                };
            }
            Err(err) => tracing::debug!(error = %err, "Submit ignored"),
        }
    }

    /// Collect the outstanding submission if it has completed
    pub async fn poll_submission(&mut self) {
        if self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            self.collect_submission().await;
        }
    }

    /// Wait for the outstanding submission and apply its outcome
    async fn collect_submission(&mut self) {
        let Some(task) = self.pending.take() else {
            return;
        };

        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!("Submission task failed: {err}");
                Err(SubmitError::Network(err.to_string()))
            }
        };

        if self.state.form.finish_submit(outcome).is_ok() {
            self.state.focus = Focus::Rating;
        }
    }

    fn copy_ai_response(&mut self) {
        let response = self
            .state
            .form
            .state()
            .result
            .as_ref()
            .and_then(|r| r.ai_response.clone());

        let message = match response {
            None => "No response to copy".to_string(),
            Some(text) => match copy_to_clipboard(&text) {
                Ok(()) => "Response copied".to_string(),
                Err(err) => {
                    tracing::warn!("Clipboard copy failed: {err}");
                    format!("Copy failed: {err}")
                }
            },
        };
        self.state.status_message = Some(message);
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
