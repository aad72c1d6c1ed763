use crate::clipboard::CopyOutcome;
use crate::control::ClipboardCopyControl;
use crate::ui::theme::Theme;

pub struct AppState {
    pub control: ClipboardCopyControl,
    pub theme: Theme,
    pub should_quit: bool,
    pub last_outcome: Option<CopyOutcome>,
    pub activation_count: u32,
}

impl AppState {
    pub fn new(control: ClipboardCopyControl, theme: Theme) -> Self {
        Self {
            control,
            theme,
            should_quit: false,
            last_outcome: None,
            activation_count: 0,
        }
    }

    /// Run one copy attempt through the control and record the outcome.
    pub fn activate_control(&mut self) {
        let outcome = self.control.activate();
        self.last_outcome = Some(outcome);
        self.activation_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = AppState::new(ClipboardCopyControl::new("hello"), Theme::default());
        assert!(!state.should_quit);
        assert!(state.last_outcome.is_none());
        assert_eq!(state.activation_count, 0);
    }
}
