//! Confetti drawn over the whole frame.

use ratatui::{Frame, style::Style};

use crate::confetti::Confetti;

pub fn render(frame: &mut Frame, confetti: &Confetti) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }

    let max_x = f32::from(area.width - 1);
    let max_y = f32::from(area.height - 1);
    let buf = frame.buffer_mut();
    for piece in confetti.pieces() {
        let x = area.x + (piece.x * max_x).round() as u16;
        let y = area.y + (piece.y * max_y).round() as u16;
        buf.set_string(x, y, piece.shape.to_string(), Style::default().fg(piece.color));
    }
}
