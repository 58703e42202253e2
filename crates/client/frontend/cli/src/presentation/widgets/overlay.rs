//! Verdict overlay drawn on top of the puzzle.

use client_frontend_core::Overlay;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, overlay: Overlay, theme: &RatatuiTheme) {
    let (title, headline, detail, hint, style) = match overlay {
        Overlay::Success => (
            " Solved ",
            "Congratulations!",
            "Every answer is correct.",
            "Press Esc to admire your grid",
            theme.success(),
        ),
        Overlay::Failure => (
            " Not yet ",
            "Not quite right",
            "Some answers are missing or incorrect.",
            "Press Esc to keep trying",
            theme.failure(),
        ),
    };

    let area = centered_rect(46, 7, frame.area());
    let text = vec![
        Line::styled(headline, style),
        Line::raw(""),
        Line::raw(detail),
        Line::raw(""),
        Line::raw(hint),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(title),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Fixed-size rectangle centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
