//! Crossword navigation and verification core.
//!
//! `puzzle-core` maps grid coordinates to words, tracks focus and direction,
//! and checks answers against one-way verifier tokens. It is pure and
//! synchronous; rendering is delegated to a [`PresentationSink`] supplied by
//! the frontend.
pub mod definition;
pub mod error;
pub mod grid;
pub mod index;
pub mod navigation;
pub mod puzzle;
pub mod sink;
pub mod verify;
pub mod word;

pub use definition::{ClueList, PuzzleDefinition};
pub use error::{DefinitionError, VerifierParseError};
pub use grid::{Coord, Direction, GridBounds};
pub use index::{CellEntry, CellIndex, WordRef};
pub use navigation::{NavigationState, Navigator};
pub use puzzle::Puzzle;
pub use sink::PresentationSink;
pub use verify::{CellContents, GridSnapshot, Verdict, check, entered_letters};
pub use word::{Verifier, Word, WordId, normalize_answer};
