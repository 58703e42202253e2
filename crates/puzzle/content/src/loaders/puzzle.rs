//! Puzzle definition loader.
//!
//! Converts RON puzzle files into a validated [`Puzzle`]. Structural problems
//! (out-of-bounds words, overlapping slots) surface as configuration errors
//! naming the offending word.

use std::path::Path;

use puzzle_core::{
    Coord, Direction, GridBounds, Puzzle, PuzzleDefinition, Verifier, Word, WordId,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Puzzle file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PuzzleDataRon {
    #[serde(default)]
    title: String,
    rows: u32,
    cols: u32,
    words: Vec<WordDataRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WordDataRon {
    number: u16,
    direction: Direction,
    row: i32,
    col: i32,
    length: u16,
    clue: String,
    verifier: Verifier,
}

impl From<WordDataRon> for Word {
    fn from(data: WordDataRon) -> Self {
        Word::new(
            WordId::new(data.number, data.direction),
            Coord::new(data.row, data.col),
            data.length,
            data.clue,
            data.verifier,
        )
    }
}

/// Loader for puzzle definitions from RON files.
pub struct PuzzleLoader;

impl PuzzleLoader {
    /// Load and validate a puzzle from a RON file.
    pub fn load(path: &Path) -> LoadResult<Puzzle> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid puzzle {}: {}", path.display(), e))
    }

    /// Parse and validate a puzzle from RON source.
    pub fn parse(content: &str) -> LoadResult<Puzzle> {
        let definition = Self::parse_definition(content)?;
        let puzzle = Puzzle::new(definition)
            .map_err(|e| anyhow::anyhow!("Malformed puzzle definition: {}", e))?;
        Ok(puzzle)
    }

    /// Parse RON source without validating word placement.
    pub fn parse_definition(content: &str) -> LoadResult<PuzzleDefinition> {
        let data: PuzzleDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse puzzle RON: {}", e))?;

        Ok(PuzzleDefinition::new(
            data.title,
            GridBounds::new(data.rows, data.cols),
            data.words.into_iter().map(Word::from).collect(),
        ))
    }
}
