//! Frontend-agnostic services shared by every presentation layer.
//!
//! [`PuzzleSession`] wires the navigation state machine and the verification
//! engine to a [`puzzle_core::PresentationSink`].
pub mod session;

pub use session::{EditableGrid, PendingCheck, PuzzleSession, STATUS_PROMPT};
