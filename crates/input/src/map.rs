//! Key mapping from terminal events to input actions.

use crate::types::QuizPhase;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for, before it is resolved against the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveCursor { dr: i8, dc: i8 },
    SelectSlot(u8),
    NextSlot,
    Place,
    Answer(u8),
    Restart,
}

/// Map keyboard input to an input action.
///
/// Digits select a batch slot while playing and pick an answer (1-based on
/// screen, 0-based in the action) while a question is shown. Every other key is
/// ignored during a question.
pub fn handle_key_event(key: KeyEvent, phase: QuizPhase) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if phase == QuizPhase::Presenting {
        return match key.code {
            KeyCode::Char(c @ '1'..='9') => Some(InputAction::Answer(c as u8 - b'1')),
            _ => None,
        };
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputAction::MoveCursor { dr: 0, dc: -1 })
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputAction::MoveCursor { dr: 0, dc: 1 })
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputAction::MoveCursor { dr: -1, dc: 0 })
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputAction::MoveCursor { dr: 1, dc: 0 })
        }

        // Piece selection
        KeyCode::Char(c @ '1'..='3') => Some(InputAction::SelectSlot(c as u8 - b'1')),
        KeyCode::Tab => Some(InputAction::NextSlot),

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
