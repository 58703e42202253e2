//! Validated puzzle: definition plus its derived cell index.
use crate::definition::{ClueList, PuzzleDefinition};
use crate::error::DefinitionError;
use crate::grid::{Coord, Direction, GridBounds};
use crate::index::{CellEntry, CellIndex, WordRef};
use crate::word::{Word, WordId};

/// Immutable, validated puzzle shared by navigation and verification.
#[derive(Clone, Debug)]
pub struct Puzzle {
    definition: PuzzleDefinition,
    index: CellIndex,
    /// Across words by number, then down words by number.
    cycle: Vec<WordRef>,
}

impl Puzzle {
    pub fn new(definition: PuzzleDefinition) -> Result<Self, DefinitionError> {
        if definition.words.is_empty() {
            return Err(DefinitionError::NoWords);
        }
        let index = CellIndex::build(&definition)?;

        let mut cycle: Vec<WordRef> = (0..definition.words.len()).collect();
        cycle.sort_by_key(|&word| {
            let id = definition.words[word].id;
            (id.direction, id.number)
        });

        Ok(Self {
            definition,
            index,
            cycle,
        })
    }

    pub fn title(&self) -> &str {
        &self.definition.title
    }

    pub fn bounds(&self) -> GridBounds {
        self.definition.bounds
    }

    pub fn definition(&self) -> &PuzzleDefinition {
        &self.definition
    }

    pub fn index(&self) -> &CellIndex {
        &self.index
    }

    pub fn words(&self) -> &[Word] {
        &self.definition.words
    }

    pub fn word(&self, word: WordRef) -> &Word {
        &self.definition.words[word]
    }

    pub fn find(&self, id: WordId) -> Option<WordRef> {
        self.definition.words.iter().position(|word| word.id == id)
    }

    pub fn entry(&self, coord: Coord) -> Option<&CellEntry> {
        self.index.entry(coord)
    }

    pub fn is_active(&self, coord: Coord) -> bool {
        self.index.is_active(coord)
    }

    pub fn word_at(&self, coord: Coord, direction: Direction) -> Option<WordRef> {
        self.index.word_at(coord, direction)
    }

    /// Word-cycling order used by tab navigation.
    pub fn cycle_order(&self) -> &[WordRef] {
        &self.cycle
    }

    pub fn clue_list(&self) -> ClueList<'_> {
        self.definition.clue_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Verifier;

    #[test]
    fn cycle_order_is_across_then_down_by_number() {
        let words = [
            (7, Direction::Down, 0, 4),
            (3, Direction::Across, 2, 0),
            (1, Direction::Across, 0, 0),
            (2, Direction::Down, 0, 2),
        ]
        .into_iter()
        .map(|(number, direction, row, col)| {
            Word::new(
                WordId::new(number, direction),
                Coord::new(row, col),
                2,
                "",
                Verifier::derive("AB"),
            )
        })
        .collect();
        let puzzle =
            Puzzle::new(PuzzleDefinition::new("order", GridBounds::new(5, 5), words)).unwrap();

        let order: Vec<_> = puzzle
            .cycle_order()
            .iter()
            .map(|&word| puzzle.word(word).id.to_string())
            .collect();
        assert_eq!(order, ["1 Across", "3 Across", "2 Down", "7 Down"]);
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let definition = PuzzleDefinition::new("none", GridBounds::new(3, 3), Vec::new());
        assert_eq!(Puzzle::new(definition).unwrap_err(), DefinitionError::NoWords);
    }
}
