//! Puzzle grid: 4x2 blocks with the clue number above the letter.

use client_frontend_core::ViewModel;
use ratatui::{
    Frame,
    widgets::{Block, Borders},
};

use crate::presentation::{ScreenLayout, theme::RatatuiTheme};

pub fn render(
    frame: &mut Frame,
    layout: &ScreenLayout,
    view_model: &ViewModel,
    title: &str,
    theme: &RatatuiTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "));
    frame.render_widget(block, layout.grid);

    let buf = frame.buffer_mut();
    for coord in layout.visible_cells() {
        let Some(area) = layout.cell_area(coord) else {
            continue;
        };

        let Some(cell) = view_model.cell(coord) else {
            buf.set_style(area, theme.blocked_cell());
            continue;
        };

        buf.set_style(area, theme.cell(cell.flags));

        let label = cell.label.map(|n| n.to_string()).unwrap_or_default();
        buf.set_stringn(area.x, area.y, label, area.width as usize, theme.label(cell.flags));

        if area.height > 1 {
            let letter = format!(" {} ", cell.letter.unwrap_or(' '));
            buf.set_stringn(
                area.x,
                area.y + 1,
                letter,
                area.width as usize,
                theme.letter(cell.flags),
            );
        }
    }
}
