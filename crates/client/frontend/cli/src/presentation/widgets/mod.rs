//! Widgets composing the crossword screen.
pub mod clues;
pub mod confetti;
pub mod grid;
pub mod header;
pub mod messages;
pub mod overlay;
pub mod status;
