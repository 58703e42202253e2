//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use puzzle_core::Puzzle;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Both the puzzle and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    puzzle: Option<Arc<Puzzle>>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the puzzle (required).
    pub fn puzzle(mut self, puzzle: impl Into<Arc<Puzzle>>) -> Self {
        self.puzzle = Some(puzzle.into());
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<Client> {
        let puzzle = self
            .puzzle
            .context("Puzzle is required. Use .puzzle() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { puzzle, frontend })
    }
}
