//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Exit the application.
    Quit,
    /// Close the verdict overlay, or quit when none is open.
    Escape,
    /// Enter a letter into the focused cell.
    Letter(char),
    Backspace,
    Delete,
    /// Arrow-key movement by a (row, col) delta.
    Move(i32, i32),
    /// Next (`false`) or previous (`true`) word in cycle order.
    CycleWord { reverse: bool },
    ToggleDirection,
    Check,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a higher-level command.
pub fn translate_key(key: KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Char(' ') => KeyCommand::ToggleDirection,
        KeyCode::Char(ch) if ch.is_ascii_alphabetic() => {
            KeyCommand::Letter(ch.to_ascii_uppercase())
        }
        KeyCode::Backspace => KeyCommand::Backspace,
        KeyCode::Delete => KeyCommand::Delete,
        KeyCode::Left => KeyCommand::Move(0, -1),
        KeyCode::Right => KeyCommand::Move(0, 1),
        KeyCode::Up => KeyCommand::Move(-1, 0),
        KeyCode::Down => KeyCommand::Move(1, 0),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            KeyCommand::CycleWord { reverse: true }
        }
        KeyCode::Tab | KeyCode::PageDown => KeyCommand::CycleWord { reverse: false },
        KeyCode::BackTab | KeyCode::PageUp => KeyCommand::CycleWord { reverse: true },
        KeyCode::Enter => KeyCommand::Check,
        KeyCode::Esc => KeyCommand::Escape,
        _ => KeyCommand::None,
    }
}
