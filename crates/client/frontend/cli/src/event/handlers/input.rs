//! Input handling (keyboard and mouse).

use anyhow::Result;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{
    input::{KeyCommand, translate_key},
    presentation::{Hit, terminal::Tui},
};

/// What the loop should do after an input event has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::event) enum InputOutcome {
    Quit,
    Redraw,
    Ignored,
}

impl EventLoop {
    /// Poll for terminal input. Returns `true` when the user quits.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        let outcome = match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.apply_key(translate_key(key))
            }
            TermEvent::Mouse(mouse) => self.apply_mouse(mouse),
            TermEvent::Resize(_, _) => InputOutcome::Redraw,
            _ => InputOutcome::Ignored,
        };

        match outcome {
            InputOutcome::Quit => Ok(true),
            InputOutcome::Redraw => {
                self.render(terminal)?;
                Ok(false)
            }
            InputOutcome::Ignored => Ok(false),
        }
    }

    pub(in crate::event) fn apply_key(&mut self, command: KeyCommand) -> InputOutcome {
        match command {
            KeyCommand::Quit => return InputOutcome::Quit,
            KeyCommand::None => return InputOutcome::Ignored,
            _ => {}
        }

        // The verdict overlay is modal: any other key only closes it.
        if self.session.sink_mut().dismiss_overlay().is_some() {
            return InputOutcome::Redraw;
        }

        match command {
            KeyCommand::Escape => return InputOutcome::Quit,
            KeyCommand::Letter(ch) => {
                self.session.type_letter(ch);
            }
            KeyCommand::Backspace => {
                self.session.backspace();
            }
            KeyCommand::Delete => {
                self.session.delete();
            }
            KeyCommand::Move(dr, dc) => {
                self.session.move_by(dr, dc);
            }
            KeyCommand::CycleWord { reverse } => {
                self.session.cycle_word(reverse);
            }
            KeyCommand::ToggleDirection => {
                self.session.toggle_direction();
            }
            KeyCommand::Check => self.start_check(),
            KeyCommand::Quit | KeyCommand::None => {}
        }

        InputOutcome::Redraw
    }

    fn apply_mouse(&mut self, mouse: MouseEvent) -> InputOutcome {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return InputOutcome::Ignored;
        }
        self.apply_click(mouse.column, mouse.row)
    }

    pub(in crate::event) fn apply_click(&mut self, column: u16, row: u16) -> InputOutcome {
        if self.session.sink_mut().dismiss_overlay().is_some() {
            return InputOutcome::Redraw;
        }

        match self.layout.hit_test(self.session.sink().view(), column, row) {
            Some(Hit::Cell(coord)) => {
                self.session.press(coord);
            }
            Some(Hit::Clue(id)) => {
                self.session.select_clue(id);
            }
            None => return InputOutcome::Ignored,
        }

        InputOutcome::Redraw
    }
}
