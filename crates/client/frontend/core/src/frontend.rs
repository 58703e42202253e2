//! Trait describing a runnable client front-end.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use puzzle_core::Puzzle;

/// Frontend abstraction for UI layers.
///
/// A frontend receives the validated puzzle, builds a presentation sink for
/// it, and drives a [`PuzzleSession`](crate::PuzzleSession) from user input.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    async fn run(&mut self, puzzle: Arc<Puzzle>) -> Result<()>;
}
