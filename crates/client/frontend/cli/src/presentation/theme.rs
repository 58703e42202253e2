//! Ratatui styling for the crossword.
use client_frontend_core::{CellFlags, MessageLevel};
use ratatui::style::{Color, Modifier, Style};

/// Consistent colours and emphasis rules for every widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn blocked_cell(&self) -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Focus wins over highlight; a revealed cell keeps its own foreground.
    pub fn cell(&self, flags: CellFlags) -> Style {
        let mut style = if flags.contains(CellFlags::FOCUSED) {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if flags.contains(CellFlags::HIGHLIGHTED) {
            Style::default().fg(Color::White).bg(Color::Blue)
        } else {
            Style::default().fg(Color::White).bg(Color::Black)
        };

        if flags.contains(CellFlags::CORRECT) {
            style = style.fg(Color::LightGreen).add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn label(&self, flags: CellFlags) -> Style {
        self.cell(flags).add_modifier(Modifier::DIM)
    }

    pub fn letter(&self, flags: CellFlags) -> Style {
        self.cell(flags).add_modifier(Modifier::BOLD)
    }

    pub fn clue(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn success(&self) -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    pub fn failure(&self) -> Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    }
}
