//! Application state definitions

use super::review_form::{Phase, ReviewFormController};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Rating picker, review input and submit button
    #[default]
    Form,
    /// Acknowledgement with the optional AI response
    Success,
}

impl View {
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Editing | Phase::Submitting => View::Form,
            Phase::Succeeded => View::Success,
        }
    }
}

/// Focused control on the form view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Rating,
    ReviewText,
    Submit,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::Rating => Self::ReviewText,
            Self::ReviewText => Self::Submit,
            Self::Submit => Self::Rating,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Rating => Self::Submit,
            Self::ReviewText => Self::Rating,
            Self::Submit => Self::ReviewText,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: ReviewFormController,
    pub focus: Focus,
    /// Feedback shown in the status bar (e.g. after copying)
    pub status_message: Option<String>,
}

impl AppState {
    pub fn current_view(&self) -> View {
        View::for_phase(self.form.phase())
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Move the star selection by `delta`, clamped to 1..=5
    pub fn step_rating(&mut self, delta: i8) {
        let current = self.form.state().rating as i8;
        let next = (current + delta).clamp(1, super::MAX_RATING as i8);
        self.form.set_rating(next as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormState, SubmissionResult};
    use chrono::Local;

    #[test]
    fn test_focus_cycles_forward() {
        let mut focus = Focus::default();
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Rating);
    }

    #[test]
    fn test_focus_cycles_backward() {
        assert_eq!(Focus::Rating.prev(), Focus::Submit);
        assert_eq!(Focus::Submit.prev(), Focus::ReviewText);
    }

    #[test]
    fn test_view_follows_phase() {
        assert_eq!(View::for_phase(Phase::Editing), View::Form);
        assert_eq!(View::for_phase(Phase::Submitting), View::Form);
        assert_eq!(View::for_phase(Phase::Succeeded), View::Success);
    }

    #[test]
    fn test_current_view_on_success() {
        let state = AppState {
            form: ReviewFormController::from(FormState {
                result: Some(SubmissionResult {
                    review_id: Some("r1".to_string()),
                    ai_response: None,
                    received_at: Local::now(),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(state.current_view(), View::Success);
    }

    #[test]
    fn test_step_rating_from_unselected() {
        let mut state = AppState::default();
        state.step_rating(-1);
        assert_eq!(state.form.state().rating, 1);
        state.step_rating(1);
        assert_eq!(state.form.state().rating, 2);
    }

    #[test]
    fn test_step_rating_clamps_at_five() {
        let mut state = AppState::default();
        for _ in 0..10 {
            state.step_rating(1);
        }
        assert_eq!(state.form.state().rating, 5);
    }
}
