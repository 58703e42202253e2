//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the current sink state and remember the frame layout.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            title: self.session.puzzle().title(),
            sink: self.session.sink(),
            check_in_flight: self.session.check_in_flight(),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        self.layout = ui::render(terminal, &ctx)?;
        Ok(())
    }
}
