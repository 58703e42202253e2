//! Static description of a puzzle: bounds, title, and word placements.
use crate::grid::{Direction, GridBounds};
use crate::word::{Word, WordId};

/// Unvalidated puzzle description as loaded from configuration.
///
/// Use [`Puzzle::new`](crate::Puzzle::new) to validate it and derive the
/// cell index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleDefinition {
    pub title: String,
    pub bounds: GridBounds,
    pub words: Vec<Word>,
}

impl PuzzleDefinition {
    pub fn new(title: impl Into<String>, bounds: GridBounds, words: Vec<Word>) -> Self {
        Self {
            title: title.into(),
            bounds,
            words,
        }
    }

    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.iter().find(|word| word.id == id)
    }

    /// Words running in `direction`, ordered by ascending clue number.
    pub fn words_in(&self, direction: Direction) -> Vec<&Word> {
        let mut words: Vec<_> = self
            .words
            .iter()
            .filter(|word| word.direction() == direction)
            .collect();
        words.sort_by_key(|word| word.number());
        words
    }

    pub fn clue_list(&self) -> ClueList<'_> {
        ClueList {
            across: self.words_in(Direction::Across),
            down: self.words_in(Direction::Down),
        }
    }
}

/// Words grouped by direction, each group ordered by clue number.
#[derive(Clone, Debug)]
pub struct ClueList<'a> {
    pub across: Vec<&'a Word>,
    pub down: Vec<&'a Word>,
}

impl<'a> ClueList<'a> {
    pub fn group(&self, direction: Direction) -> &[&'a Word] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Across clues followed by down clues.
    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.across.iter().chain(self.down.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
