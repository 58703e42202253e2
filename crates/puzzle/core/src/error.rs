//! Configuration errors raised while building a puzzle.
//!
//! Every variant is fatal: a malformed definition aborts setup. Navigation
//! requests never produce errors, and an incorrect grid is a
//! [`Verdict`](crate::Verdict), not an error.

use crate::grid::{Coord, Direction, GridBounds};
use crate::word::WordId;

/// Malformed puzzle definition, naming the offending word where one exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("grid bounds {bounds} must have at least one row and one column")]
    EmptyGrid { bounds: GridBounds },

    #[error("puzzle defines no words")]
    NoWords,

    #[error("word {word} has zero length")]
    EmptyWord { word: WordId },

    #[error("word {word} is defined more than once")]
    DuplicateWord { word: WordId },

    #[error("word {word} covers {coord}, outside the {bounds} grid")]
    OutOfBounds {
        word: WordId,
        coord: Coord,
        bounds: GridBounds,
    },

    #[error("word {word} overlaps {existing} in the {direction} slot at {coord}")]
    SlotTaken {
        word: WordId,
        existing: WordId,
        direction: Direction,
        coord: Coord,
    },
}

impl DefinitionError {
    /// The word the diagnostic is about, if any.
    pub fn word(&self) -> Option<WordId> {
        match self {
            Self::EmptyGrid { .. } | Self::NoWords => None,
            Self::EmptyWord { word }
            | Self::DuplicateWord { word }
            | Self::OutOfBounds { word, .. }
            | Self::SlotTaken { word, .. } => Some(*word),
        }
    }

    /// Static identifier for the variant, used in logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyGrid { .. } => "DEFINITION_EMPTY_GRID",
            Self::NoWords => "DEFINITION_NO_WORDS",
            Self::EmptyWord { .. } => "DEFINITION_EMPTY_WORD",
            Self::DuplicateWord { .. } => "DEFINITION_DUPLICATE_WORD",
            Self::OutOfBounds { .. } => "DEFINITION_OUT_OF_BOUNDS",
            Self::SlotTaken { .. } => "DEFINITION_SLOT_TAKEN",
        }
    }
}

/// A verifier token that is not 32 bytes of hex.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifierParseError {
    #[error("verifier token is not valid hex")]
    InvalidHex,

    #[error("verifier token must be 32 bytes, got {actual}")]
    WrongLength { actual: usize },
}
