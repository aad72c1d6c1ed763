use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    match (key.code, key.modifiers) {
        // Activate the copy affordance
        (KeyCode::Char('c'), KeyModifiers::NONE)
        | (KeyCode::Enter, KeyModifiers::NONE)
        | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            state.activate_control();
        }

        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            state.should_quit = true;
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ClipboardCopyControl;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(ClipboardCopyControl::new("hello"), Theme::default())
    }

    #[test]
    fn test_q_quits() {
        let mut state = state();
        handle_key_event(KeyEvent::from(KeyCode::Char('q')), &mut state);
        assert!(state.should_quit);
    }

    #[test]
    fn test_esc_quits() {
        let mut state = state();
        handle_key_event(KeyEvent::from(KeyCode::Esc), &mut state);
        assert!(state.should_quit);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut state = state();
        handle_key_event(KeyEvent::from(KeyCode::Char('x')), &mut state);
        assert!(!state.should_quit);
        assert_eq!(state.activation_count, 0);
    }
}
