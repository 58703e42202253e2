//! Main render entry point composing every widget into one frame.
use anyhow::Result;

use crate::{
    TerminalSink,
    presentation::{ScreenLayout, terminal::Tui, theme::RatatuiTheme, widgets},
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub title: &'a str,
    pub sink: &'a TerminalSink,
    pub check_in_flight: bool,
    pub message_panel_height: u16,
}

/// Draws one frame and returns its layout for mouse hit testing.
///
/// Layering: header, grid, status, clues and messages first, then the
/// verdict overlay, then confetti on top of everything.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<ScreenLayout> {
    let theme = RatatuiTheme::new();
    let view_model = ctx.sink.view();
    let mut layout = ScreenLayout::default();

    terminal.draw(|frame| {
        layout = ScreenLayout::compute(
            frame.area(),
            view_model.bounds(),
            ctx.message_panel_height,
        );

        widgets::header::render(frame, layout.header, ctx.check_in_flight);
        widgets::grid::render(frame, &layout, view_model, ctx.title, &theme);
        widgets::status::render(frame, layout.status, view_model);
        widgets::clues::render(frame, &layout, view_model, &theme);
        widgets::messages::render(frame, layout.messages, ctx.sink.messages(), &theme);

        if let Some(overlay) = view_model.overlay() {
            widgets::overlay::render(frame, overlay, &theme);
        }

        if ctx.sink.confetti().is_active() {
            widgets::confetti::render(frame, ctx.sink.confetti());
        }
    })?;

    Ok(layout)
}
