/// Where a submission form is in its lifecycle.
///
/// `Idle -> Submitting -> Completed` on success, `Idle -> Submitting -> Idle`
/// (with an error) on failure. `Completed` is terminal for the form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Completed,
}

/// Visible state of a submission form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub phase: SubmitPhase,
    pub error: Option<String>,
}

impl FormState {
    /// The submit control is disabled while a request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_completed(&self) -> bool {
        self.phase == SubmitPhase::Completed
    }

    /// Whether a new submit may start.
    pub fn accepts_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    /// Enters `Submitting` and clears the previous error.
    pub fn begin(&mut self) {
        self.phase = SubmitPhase::Submitting;
        self.error = None;
    }

    /// Back to `Idle`, keeping `error` visible until the next submit.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = SubmitPhase::Idle;
        self.error = Some(message.into());
    }

    pub fn complete(&mut self) {
        self.phase = SubmitPhase::Completed;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_submit_returns_to_idle_with_error() {
        let mut state = FormState::default();
        state.begin();
        assert!(state.is_submitting());
        assert!(!state.accepts_submit());

        state.fail("Login failed.");
        assert!(state.accepts_submit());
        assert_eq!(state.error.as_deref(), Some("Login failed."));

        state.begin();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut state = FormState::default();
        state.begin();
        state.complete();
        assert!(state.is_completed());
        assert!(!state.accepts_submit());
    }
}
