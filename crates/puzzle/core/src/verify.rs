//! Answer verification against one-way verifier tokens.
//!
//! The engine reads entered letters, derives a token per word with
//! [`Verifier::derive`], and compares it to the stored one. The result is a
//! single [`Verdict`]; which word failed is never reported.

use std::collections::HashMap;

use crate::grid::Coord;
use crate::puzzle::Puzzle;
use crate::word::{Verifier, Word};

/// Pull-based access to the letters currently entered in the grid.
pub trait CellContents {
    /// The character entered at `coord`, or `None` when the cell is empty.
    fn read_cell(&self, coord: Coord) -> Option<char>;
}

impl CellContents for HashMap<Coord, char> {
    fn read_cell(&self, coord: Coord) -> Option<char> {
        self.get(&coord).copied()
    }
}

/// Outcome of checking the whole grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Verdict {
    #[strum(to_string = "solved")]
    Solved,
    #[strum(to_string = "incorrect")]
    Incorrect,
}

impl Verdict {
    pub const fn is_solved(self) -> bool {
        matches!(self, Verdict::Solved)
    }
}

/// Owned copy of every active cell's contents, taken before a check starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridSnapshot {
    letters: HashMap<Coord, char>,
}

impl GridSnapshot {
    pub fn capture<C: CellContents + ?Sized>(puzzle: &Puzzle, contents: &C) -> Self {
        let letters = puzzle
            .index()
            .active_cells()
            .filter_map(|(coord, _)| contents.read_cell(coord).map(|ch| (coord, ch)))
            .collect();
        Self { letters }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl CellContents for GridSnapshot {
    fn read_cell(&self, coord: Coord) -> Option<char> {
        self.letters.get(&coord).copied()
    }
}

/// Assembles the entered letters of `word`, uppercased; empty cells are
/// blanks.
pub fn entered_letters<C: CellContents + ?Sized>(word: &Word, contents: &C) -> String {
    word.cells()
        .map(|coord| {
            contents
                .read_cell(coord)
                .map(|ch| ch.to_ascii_uppercase())
                .unwrap_or(' ')
        })
        .collect()
}

/// Checks every word. `Solved` only if all derived tokens match.
pub fn check<C: CellContents + ?Sized>(puzzle: &Puzzle, contents: &C) -> Verdict {
    // No short-circuit: every word is derived regardless of earlier mismatches.
    let matched = puzzle
        .words()
        .iter()
        .map(|word| Verifier::derive(&entered_letters(word, contents)) == word.verifier)
        .fold(true, |all, ok| all & ok);

    if matched {
        Verdict::Solved
    } else {
        Verdict::Incorrect
    }
}
