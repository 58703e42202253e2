//! Presentation sink backed by the terminal view state.
use client_frontend_core::{
    EditableGrid, MessageEntry, MessageLevel, MessageLog, Overlay, ViewModel,
};
use puzzle_core::{
    CellContents, CellIndex, ClueList, Coord, GridBounds, PresentationSink, Verdict, WordId,
};

use crate::config::ConfettiConfig;
use crate::confetti::Confetti;

/// Records session output for the next frame and layers terminal-only
/// feedback (message log, confetti) on top of the shared [`ViewModel`].
pub struct TerminalSink {
    view: ViewModel,
    messages: MessageLog,
    confetti: Confetti,
    confetti_config: ConfettiConfig,
}

impl TerminalSink {
    pub fn new(messages: MessageLog, confetti_config: ConfettiConfig) -> Self {
        Self {
            view: ViewModel::new(),
            messages,
            confetti: Confetti::new(),
            confetti_config,
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }

    pub(crate) fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub(crate) fn confetti_mut(&mut self) -> &mut Confetti {
        &mut self.confetti
    }

    /// Closes the verdict overlay and ends the confetti stream.
    pub fn dismiss_overlay(&mut self) -> Option<Overlay> {
        if self.confetti.is_streaming() {
            self.confetti.stop();
            tracing::debug!(airborne = self.confetti.len(), "Confetti stream stopped");
        }
        self.view.dismiss_overlay()
    }
}

impl CellContents for TerminalSink {
    fn read_cell(&self, coord: Coord) -> Option<char> {
        self.view.read_cell(coord)
    }
}

impl EditableGrid for TerminalSink {
    fn write_cell(&mut self, coord: Coord, letter: Option<char>) {
        self.view.write_cell(coord, letter);
    }
}

impl PresentationSink for TerminalSink {
    fn render_grid(&mut self, bounds: GridBounds, index: &CellIndex) {
        self.view.render_grid(bounds, index);
    }

    fn render_clue_list(&mut self, clues: &ClueList<'_>) {
        self.view.render_clue_list(clues);
    }

    fn focus_cell(&mut self, coord: Coord) {
        self.view.focus_cell(coord);
    }

    fn highlight_word(&mut self, cells: &[Coord], clue: Option<WordId>) {
        self.view.highlight_word(cells, clue);
    }

    fn update_status_line(&mut self, text: &str) {
        self.view.update_status_line(text);
    }

    fn report_verdict(&mut self, verdict: Verdict) {
        self.view.report_verdict(verdict);
        match verdict {
            Verdict::Solved => {
                self.messages.push(MessageEntry::new(
                    "Puzzle solved! Every answer is correct.",
                    MessageLevel::Success,
                ));
                if self.confetti_config.enabled {
                    self.confetti.start(self.confetti_config.burst);
                }
            }
            Verdict::Incorrect => {
                self.messages.push(MessageEntry::new(
                    "Not quite. Some answers are missing or incorrect.",
                    MessageLevel::Error,
                ));
            }
        }
    }
}
