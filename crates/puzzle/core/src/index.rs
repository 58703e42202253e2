//! Derived mapping from grid coordinates to the words crossing them.
//!
//! The index is a pure function of the [`PuzzleDefinition`]: it is built in a
//! single pass over the word list, stored as a row-major array, and never
//! mutated afterwards.

use std::collections::HashSet;

use crate::definition::PuzzleDefinition;
use crate::error::DefinitionError;
use crate::grid::{Coord, Direction, GridBounds};

/// Position of a word in [`PuzzleDefinition::words`].
pub type WordRef = usize;

/// Index entry for an active cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellEntry {
    pub across: Option<WordRef>,
    pub down: Option<WordRef>,
    /// Clue number shown in the cell, set iff a word starts here.
    pub label: Option<u16>,
}

impl CellEntry {
    pub fn word(&self, direction: Direction) -> Option<WordRef> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<WordRef> {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }

    /// True if the cell belongs to both an across and a down word.
    pub fn is_crossing(&self) -> bool {
        self.across.is_some() && self.down.is_some()
    }
}

/// Coordinate-keyed cell index; inactive (blocked) cells hold `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellIndex {
    bounds: GridBounds,
    cells: Vec<Option<CellEntry>>,
}

impl CellIndex {
    /// Builds the index and clue-number labels in one pass over the words.
    ///
    /// Fails if a word is empty, repeats a clue id, leaves the grid, or
    /// claims a directional slot another word already holds.
    pub fn build(definition: &PuzzleDefinition) -> Result<Self, DefinitionError> {
        let bounds = definition.bounds;
        if bounds.rows == 0 || bounds.cols == 0 {
            return Err(DefinitionError::EmptyGrid { bounds });
        }

        let mut cells = vec![None; bounds.cell_count()];
        let mut seen = HashSet::with_capacity(definition.words.len());

        for (index, word) in definition.words.iter().enumerate() {
            if word.length == 0 {
                return Err(DefinitionError::EmptyWord { word: word.id });
            }
            if !seen.insert(word.id) {
                return Err(DefinitionError::DuplicateWord { word: word.id });
            }

            for (offset, coord) in word.cells().enumerate() {
                let slot = bounds
                    .linear(coord)
                    .ok_or(DefinitionError::OutOfBounds {
                        word: word.id,
                        coord,
                        bounds,
                    })?;

                let entry: &mut CellEntry = cells[slot].get_or_insert_with(CellEntry::default);
                let target = entry.slot_mut(word.direction());
                if let Some(existing) = *target {
                    return Err(DefinitionError::SlotTaken {
                        word: word.id,
                        existing: definition.words[existing].id,
                        direction: word.direction(),
                        coord,
                    });
                }
                *target = Some(index);

                // First writer wins: an across and a down word sharing an
                // origin label the cell once.
                if offset == 0 && entry.label.is_none() {
                    entry.label = Some(word.number());
                }
            }
        }

        Ok(Self { bounds, cells })
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Entry for an active cell; `None` for blocked or out-of-bounds coords.
    pub fn entry(&self, coord: Coord) -> Option<&CellEntry> {
        let slot = self.bounds.linear(coord)?;
        self.cells[slot].as_ref()
    }

    pub fn is_active(&self, coord: Coord) -> bool {
        self.entry(coord).is_some()
    }

    pub fn label(&self, coord: Coord) -> Option<u16> {
        self.entry(coord).and_then(|entry| entry.label)
    }

    pub fn word_at(&self, coord: Coord, direction: Direction) -> Option<WordRef> {
        self.entry(coord).and_then(|entry| entry.word(direction))
    }

    /// Active cells in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = (Coord, &CellEntry)> + '_ {
        self.bounds
            .coords()
            .zip(self.cells.iter())
            .filter_map(|(coord, entry)| entry.as_ref().map(|entry| (coord, entry)))
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|entry| entry.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{Verifier, Word, WordId};

    fn word(number: u16, direction: Direction, row: i32, col: i32, answer: &str) -> Word {
        Word::new(
            WordId::new(number, direction),
            Coord::new(row, col),
            answer.len() as u16,
            format!("clue {number}"),
            Verifier::derive(answer),
        )
    }

    /// C A T
    /// A # A
    /// R # R
    fn small() -> PuzzleDefinition {
        PuzzleDefinition::new(
            "small",
            GridBounds::new(3, 3),
            vec![
                word(1, Direction::Across, 0, 0, "CAT"),
                word(1, Direction::Down, 0, 0, "CAR"),
                word(2, Direction::Down, 0, 2, "TAR"),
            ],
        )
    }

    #[test]
    fn active_cells_have_a_word_and_blocked_cells_have_none() {
        let index = CellIndex::build(&small()).unwrap();
        for coord in index.bounds().coords() {
            match index.entry(coord) {
                Some(entry) => assert!(entry.across.is_some() || entry.down.is_some()),
                None => assert!(coord == Coord::new(1, 1) || coord == Coord::new(2, 1)),
            }
        }
        assert_eq!(index.active_count(), 7);
    }

    #[test]
    fn shared_origin_is_labelled_once_and_fills_both_slots() {
        let index = CellIndex::build(&small()).unwrap();
        let origin = index.entry(Coord::ORIGIN).unwrap();
        assert_eq!(origin.across, Some(0));
        assert_eq!(origin.down, Some(1));
        assert_eq!(origin.label, Some(1));
        assert!(origin.is_crossing());
        assert_eq!(index.label(Coord::new(0, 2)), Some(2));
        assert_eq!(index.label(Coord::new(0, 1)), None);
    }

    #[test]
    fn build_is_deterministic() {
        let definition = small();
        assert_eq!(
            CellIndex::build(&definition).unwrap(),
            CellIndex::build(&definition).unwrap()
        );
    }

    #[test]
    fn out_of_bounds_word_names_the_word() {
        let mut definition = small();
        definition.words.push(word(3, Direction::Across, 2, 2, "RAT"));
        let err = CellIndex::build(&definition).unwrap_err();
        assert_eq!(err.error_code(), "DEFINITION_OUT_OF_BOUNDS");
        assert_eq!(err.word(), Some(WordId::new(3, Direction::Across)));
    }

    #[test]
    fn overlapping_slot_is_rejected() {
        let mut definition = small();
        definition.words.push(word(4, Direction::Down, 1, 2, "AR"));
        let err = CellIndex::build(&definition).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::SlotTaken {
                word: WordId::new(4, Direction::Down),
                existing: WordId::new(2, Direction::Down),
                direction: Direction::Down,
                coord: Coord::new(1, 2),
            }
        );
    }

    #[test]
    fn empty_and_duplicate_words_are_rejected() {
        let mut definition = small();
        definition.words[2].length = 0;
        assert_eq!(
            CellIndex::build(&definition).unwrap_err().error_code(),
            "DEFINITION_EMPTY_WORD"
        );

        let mut definition = small();
        definition.words.push(word(2, Direction::Down, 0, 2, "TAR"));
        assert_eq!(
            CellIndex::build(&definition).unwrap_err(),
            DefinitionError::DuplicateWord {
                word: WordId::new(2, Direction::Down)
            }
        );
    }

    #[test]
    fn zero_bounds_are_rejected() {
        let definition = PuzzleDefinition::new("empty", GridBounds::new(0, 4), Vec::new());
        assert!(matches!(
            CellIndex::build(&definition),
            Err(DefinitionError::EmptyGrid { .. })
        ));
    }
}
