//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Only presses map to actions; terminals that report repeats and releases
/// would otherwise move a piece twice per keystroke.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Esc => Some(GameAction::Abort),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_movement_keys() {
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('A')] {
            assert_eq!(handle_key_event(key(code)), Some(GameAction::MoveLeft));
        }
        for code in [KeyCode::Right, KeyCode::Char('L'), KeyCode::Char('d')] {
            assert_eq!(handle_key_event(key(code)), Some(GameAction::MoveRight));
        }
        for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('S')] {
            assert_eq!(handle_key_event(key(code)), Some(GameAction::SoftDrop));
        }
    }

    #[test]
    fn test_rotation_keys() {
        for code in [KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('W')] {
            assert_eq!(handle_key_event(key(code)), Some(GameAction::Rotate));
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Some(GameAction::Abort));
        assert_eq!(
            handle_key_event(key(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        for code in [
            KeyCode::Char('x'),
            KeyCode::Char('z'),
            KeyCode::Char('q'),
            KeyCode::Enter,
            KeyCode::Tab,
            KeyCode::F(1),
        ] {
            assert_eq!(handle_key_event(key(code)), None, "{code:?}");
        }
    }

    #[test]
    fn test_release_and_ctrl_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_s), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('x'))));
        assert!(!should_quit(key(KeyCode::Esc)));
    }
}
