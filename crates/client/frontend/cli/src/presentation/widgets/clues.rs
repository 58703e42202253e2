//! Across and Down clue panels.

use client_frontend_core::ViewModel;
use puzzle_core::Direction;
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{ScreenLayout, layout::clue_scroll, theme::RatatuiTheme};

pub fn render(
    frame: &mut Frame,
    layout: &ScreenLayout,
    view_model: &ViewModel,
    theme: &RatatuiTheme,
) {
    for direction in [Direction::Across, Direction::Down] {
        let area = layout.clue_panel(direction);
        let visible = area.height.saturating_sub(2);
        let offset = clue_scroll(view_model, direction, visible);

        let lines: Vec<Line> = view_model
            .clues(direction)
            .iter()
            .skip(offset)
            .map(|clue| {
                let active = view_model.active_clue() == Some(clue.id);
                Line::from(vec![
                    Span::styled(format!("{:>3}. ", clue.id.number), theme.clue(active)),
                    Span::styled(clue.text.clone(), theme.clue(active)),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {direction} ")),
        );
        frame.render_widget(paragraph, area);
    }
}
