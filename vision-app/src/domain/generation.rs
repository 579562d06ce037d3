use serde::{Deserialize, Serialize};
use vision_errors::FALLBACK_MESSAGE;

/// Identifies one submission. Only the latest token may resolve the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Pending,
    Success(String),
    Error(String),
}

/// The single result slot behind the result panel and submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationState {
    status: GenerationStatus,
    latest: u64,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &GenerationStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, GenerationStatus::Pending)
    }

    /// Moves to `Pending`, dropping whatever was displayed.
    pub fn submit(&mut self) -> RequestToken {
        self.latest += 1;
        self.status = GenerationStatus::Pending;
        RequestToken(self.latest)
    }

    /// Applies a completion. Returns `false` when the token was superseded
    /// by a later submit and the completion was discarded.
    pub fn resolve<E>(&mut self, token: RequestToken, result: Result<String, E>) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.status = match result {
            Ok(text) => GenerationStatus::Success(text),
            Err(_) => GenerationStatus::Error(FALLBACK_MESSAGE.to_string()),
        };
        true
    }

    /// Markdown source for the result panel. Empty while idle or pending.
    pub fn display_text(&self) -> &str {
        match &self.status {
            GenerationStatus::Success(text) | GenerationStatus::Error(text) => text,
            GenerationStatus::Idle | GenerationStatus::Pending => "",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            GenerationStatus::Idle => "Generate",
            GenerationStatus::Pending => "Generating",
            GenerationStatus::Success(_) | GenerationStatus::Error(_) => "Regenerate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_to_success() {
        let mut state = GenerationState::new();
        assert_eq!(state.button_label(), "Generate");

        let token = state.submit();
        assert!(state.is_pending());
        assert_eq!(state.button_label(), "Generating");
        assert_eq!(state.display_text(), "");

        assert!(state.resolve::<()>(token, Ok("Example vision.".to_string())));
        assert_eq!(
            state.status(),
            &GenerationStatus::Success("Example vision.".to_string())
        );
        assert_eq!(state.display_text(), "Example vision.");
        assert_eq!(state.button_label(), "Regenerate");
    }

    #[test]
    fn test_failure_shows_fallback_only() {
        let mut state = GenerationState::new();
        let token = state.submit();

        assert!(state.resolve(token, Err("connection reset by peer")));
        assert_eq!(state.display_text(), FALLBACK_MESSAGE);
        assert_eq!(state.button_label(), "Regenerate");
        assert!(!state.is_pending());
    }

    #[test]
    fn test_resubmit_discards_previous_result() {
        let mut state = GenerationState::new();
        let first = state.submit();
        state.resolve::<()>(first, Ok("old".to_string()));

        state.submit();
        assert!(state.is_pending());
        assert_eq!(state.display_text(), "");
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = GenerationState::new();
        let first = state.submit();
        let second = state.submit();

        assert!(!state.resolve::<()>(first, Ok("stale".to_string())));
        assert!(state.is_pending());

        assert!(state.resolve::<()>(second, Ok("fresh".to_string())));
        assert_eq!(state.display_text(), "fresh");

        assert!(!state.resolve::<()>(first, Ok("later still".to_string())));
        assert_eq!(state.display_text(), "fresh");
    }
}
