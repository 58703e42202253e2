//! Status line under the grid.

use client_frontend_core::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let paragraph = Paragraph::new(view_model.status())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Clue "));
    frame.render_widget(paragraph, area);
}
