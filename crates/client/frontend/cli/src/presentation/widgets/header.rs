//! Header widget with the key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BINDINGS: [(&str, &str); 6] = [
    ("Tab", "next word"),
    ("Space", "toggle"),
    ("Arrows", "move"),
    ("Enter", "check"),
    ("Esc", "close/quit"),
    ("Click", "select"),
];

pub fn render(frame: &mut Frame, area: Rect, check_in_flight: bool) {
    let mut spans = Vec::new();
    for (key, action) in BINDINGS {
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {action}  ")));
    }
    if check_in_flight {
        spans.push(Span::styled(
            "[CHECKING]",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Crossword"));

    frame.render_widget(paragraph, area);
}
