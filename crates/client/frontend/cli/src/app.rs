//! Glue code tying the puzzle session, sink, and terminal UI together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::{TerminalSink, config::CliConfig, event::EventLoop, presentation::terminal};
use client_frontend_core::{Frontend, FrontendConfig, MessageLog, PuzzleSession};
use puzzle_core::Puzzle;

/// Terminal frontend: owns the configuration, builds a session per run.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    /// Builds the session and shows the first word before the terminal opens.
    fn build_session(&self, puzzle: Arc<Puzzle>) -> PuzzleSession<TerminalSink> {
        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text(format!(
            "Welcome to \"{}\". Fill the grid, then press Enter to check.",
            puzzle.title()
        ));

        let sink = TerminalSink::new(messages, self.cli_config.confetti.clone());
        let mut session = PuzzleSession::new(puzzle, sink);
        session.start();
        session
    }

    pub async fn execute(&self, puzzle: Arc<Puzzle>) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let session = self.build_session(puzzle);
        let event_loop = EventLoop::new(session, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let session = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            check_in_flight = session.check_in_flight(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, puzzle: Arc<Puzzle>) -> Result<()> {
        self.execute(puzzle).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::{Coord, Direction};

    #[test]
    fn session_starts_on_first_across_word() {
        let frontend = CliFrontend::new(FrontendConfig::default(), CliConfig::default());
        let puzzle = Arc::new(puzzle_content::bundled().unwrap());
        let session = frontend.build_session(puzzle);

        let view = session.sink().view();
        assert_eq!(view.focused(), Some(Coord::new(0, 4)));
        assert_eq!(session.navigation().direction, Direction::Across);
        assert!(view.status().starts_with("1 Across: "));
        assert_eq!(session.sink().messages().len(), 1);
    }
}
