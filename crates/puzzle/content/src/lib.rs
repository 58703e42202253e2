//! Data-driven puzzle definitions and loaders.
//!
//! Puzzles are RON documents describing the grid bounds and word placements.
//! Answers are never stored: each word carries a verifier token instead.
//! The bundled puzzle is compiled into the binary; alternative puzzles can be
//! loaded from disk with [`PuzzleLoader`].

pub mod loaders;

pub use loaders::{LoadResult, PuzzleLoader};

use puzzle_core::Puzzle;

/// RON source of the puzzle shipped with the client.
pub const BUNDLED_PUZZLE: &str = include_str!("../data/anniversary.ron");

/// Parses and validates the bundled puzzle.
pub fn bundled() -> LoadResult<Puzzle> {
    PuzzleLoader::parse(BUNDLED_PUZZLE)
}
