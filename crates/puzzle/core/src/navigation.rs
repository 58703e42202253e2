//! Focus and direction state machine.
//!
//! [`Navigator`] tracks the focused cell and the active direction. Every
//! movement request is checked against the [`Puzzle`]; requests that would
//! land on a blocked or out-of-bounds cell are declined and leave the state
//! untouched. Operations return `true` when the request was applied.

use crate::grid::{Coord, Direction};
use crate::index::WordRef;
use crate::puzzle::Puzzle;

/// Snapshot of the navigation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub focused: Option<Coord>,
    pub direction: Direction,
}

/// Navigation state machine; one instance per session.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    /// Nothing focused, direction across.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn focused(&self) -> Option<Coord> {
        self.state.focused
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Focuses an active cell, flipping the direction when the cell has no
    /// word in the current one.
    pub fn focus(&mut self, puzzle: &Puzzle, cell: Coord) -> bool {
        let Some(entry) = puzzle.entry(cell) else {
            return false;
        };

        let direction = self.state.direction;
        if entry.word(direction).is_none() && entry.word(direction.flip()).is_some() {
            self.state.direction = direction.flip();
        }
        self.state.focused = Some(cell);
        true
    }

    /// Flips the direction when `cell` is already focused and belongs to both
    /// an across and a down word.
    pub fn toggle_direction_if_same_cell(&mut self, puzzle: &Puzzle, cell: Coord) -> bool {
        if self.state.focused != Some(cell) {
            return false;
        }
        match puzzle.entry(cell) {
            Some(entry) if entry.is_crossing() => {
                self.state.direction = self.state.direction.flip();
                true
            }
            _ => false,
        }
    }

    /// Word in the active direction at the focused cell, falling back to the
    /// other direction.
    pub fn current_word(&self, puzzle: &Puzzle) -> Option<WordRef> {
        let entry = puzzle.entry(self.state.focused?)?;
        entry
            .word(self.state.direction)
            .or_else(|| entry.word(self.state.direction.flip()))
    }

    /// Steps forward within the current word.
    pub fn advance(&mut self, puzzle: &Puzzle) -> bool {
        self.step_within_word(puzzle, 1)
    }

    /// Steps backward within the current word.
    pub fn retreat(&mut self, puzzle: &Puzzle) -> bool {
        self.step_within_word(puzzle, -1)
    }

    fn step_within_word(&mut self, puzzle: &Puzzle, distance: i32) -> bool {
        let (Some(focused), Some(current)) = (self.state.focused, self.current_word(puzzle))
        else {
            return false;
        };

        let word = puzzle.word(current);
        let target = focused.offset(word.direction(), distance);
        if !word.covers(target) {
            return false;
        }
        self.focus(puzzle, target)
    }

    /// Unconditional jump to an active cell (arrow-key navigation).
    pub fn move_to(&mut self, puzzle: &Puzzle, target: Coord) -> bool {
        puzzle.is_active(target) && self.focus(puzzle, target)
    }

    /// Focuses a word's origin with the direction set to the word's own.
    pub fn jump_to_word(&mut self, puzzle: &Puzzle, word: WordRef) -> bool {
        let Some(target) = puzzle.words().get(word) else {
            return false;
        };
        self.state.direction = target.direction();
        self.focus(puzzle, target.origin)
    }

    /// Moves to the next (or previous) word in cycle order, wrapping around.
    /// Without a current word, jumps to the first (or last) word.
    pub fn cycle_word(&mut self, puzzle: &Puzzle, reverse: bool) -> bool {
        let order = puzzle.cycle_order();
        if order.is_empty() {
            return false;
        }

        let position = self
            .current_word(puzzle)
            .and_then(|current| order.iter().position(|&word| word == current));

        let next = match (position, reverse) {
            (None, false) => 0,
            (None, true) => order.len() - 1,
            (Some(index), false) => (index + 1) % order.len(),
            (Some(index), true) => (index + order.len() - 1) % order.len(),
        };
        self.jump_to_word(puzzle, order[next])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::PuzzleDefinition;
    use crate::grid::GridBounds;
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

    /// C A T # #
    /// A # A # #
    /// R # R O D
    fn puzzle() -> Puzzle {
        Puzzle::new(PuzzleDefinition::new(
            "nav",
            GridBounds::new(3, 5),
            vec![
                word(1, Direction::Across, 0, 0, "CAT"),
                word(1, Direction::Down, 0, 0, "CAR"),
                word(2, Direction::Down, 0, 2, "TAR"),
                word(3, Direction::Across, 2, 2, "ROD"),
            ],
        ))
        .unwrap()
    }

    fn id(puzzle: &Puzzle, word: Option<WordRef>) -> Option<String> {
        word.map(|word| puzzle.word(word).id.to_string())
    }

    #[test]
    fn starts_unfocused_across() {
        let nav = Navigator::new();
        assert_eq!(nav.focused(), None);
        assert_eq!(nav.direction(), Direction::Across);
        assert_eq!(nav.current_word(&puzzle()), None);
    }

    #[test]
    fn focus_corrects_direction_to_existing_word() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();

        assert!(nav.focus(&puzzle, Coord::new(1, 0)));
        assert_eq!(nav.direction(), Direction::Down);
        assert_eq!(id(&puzzle, nav.current_word(&puzzle)).unwrap(), "1 Down");

        assert!(nav.focus(&puzzle, Coord::new(0, 1)));
        assert_eq!(nav.direction(), Direction::Across);
    }

    #[test]
    fn focus_on_blocked_cell_is_declined() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();
        nav.focus(&puzzle, Coord::new(0, 1));

        assert!(!nav.focus(&puzzle, Coord::new(1, 1)));
        assert!(!nav.focus(&puzzle, Coord::new(-1, 0)));
        assert_eq!(nav.focused(), Some(Coord::new(0, 1)));
    }

    #[test]
    fn toggle_only_flips_on_focused_crossing_cell() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();

        // First touch only focuses.
        assert!(!nav.toggle_direction_if_same_cell(&puzzle, Coord::ORIGIN));
        nav.focus(&puzzle, Coord::ORIGIN);
        assert_eq!(nav.direction(), Direction::Across);

        assert!(nav.toggle_direction_if_same_cell(&puzzle, Coord::ORIGIN));
        assert_eq!(nav.direction(), Direction::Down);
        assert!(nav.toggle_direction_if_same_cell(&puzzle, Coord::ORIGIN));
        assert_eq!(nav.direction(), Direction::Across);
    }

    #[test]
    fn toggle_is_noop_on_single_direction_cell() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();
        nav.focus(&puzzle, Coord::new(0, 1));
        for _ in 0..3 {
            assert!(!nav.toggle_direction_if_same_cell(&puzzle, Coord::new(0, 1)));
            assert_eq!(nav.direction(), Direction::Across);
        }
    }

    #[test]
    fn advance_and_retreat_stay_inside_the_word() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();
        nav.focus(&puzzle, Coord::ORIGIN);

        assert!(nav.advance(&puzzle));
        assert!(nav.advance(&puzzle));
        assert_eq!(nav.focused(), Some(Coord::new(0, 2)));
        // (0, 3) is blocked: the word ends here.
        assert!(!nav.advance(&puzzle));
        assert_eq!(nav.focused(), Some(Coord::new(0, 2)));

        assert!(nav.retreat(&puzzle));
        assert!(nav.retreat(&puzzle));
        assert!(!nav.retreat(&puzzle));
        assert_eq!(nav.focused(), Some(Coord::ORIGIN));
    }

    #[test]
    fn advance_does_not_run_into_an_adjacent_word() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();
        nav.focus(&puzzle, Coord::new(1, 2));
        assert_eq!(nav.direction(), Direction::Down);

        assert!(nav.advance(&puzzle));
        assert_eq!(nav.focused(), Some(Coord::new(2, 2)));
        assert!(!nav.advance(&puzzle));
        assert_eq!(nav.direction(), Direction::Down);
    }

    #[test]
    fn advance_without_focus_is_noop() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();
        assert!(!nav.advance(&puzzle));
        assert!(!nav.retreat(&puzzle));
    }

    #[test]
    fn move_to_only_enters_active_cells() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();
        nav.focus(&puzzle, Coord::new(1, 0));

        assert!(!nav.move_to(&puzzle, Coord::new(1, 1)));
        assert!(!nav.move_to(&puzzle, Coord::new(3, 0)));
        assert_eq!(nav.focused(), Some(Coord::new(1, 0)));

        assert!(nav.move_to(&puzzle, Coord::new(2, 0)));
        assert_eq!(nav.focused(), Some(Coord::new(2, 0)));
    }

    #[test]
    fn cycle_without_current_word_starts_at_either_end() {
        let puzzle = puzzle();

        let mut nav = Navigator::new();
        assert!(nav.cycle_word(&puzzle, false));
        assert_eq!(id(&puzzle, nav.current_word(&puzzle)).unwrap(), "1 Across");

        let mut nav = Navigator::new();
        assert!(nav.cycle_word(&puzzle, true));
        assert_eq!(id(&puzzle, nav.current_word(&puzzle)).unwrap(), "2 Down");
        assert_eq!(nav.focused(), Some(Coord::new(0, 2)));
    }

    #[test]
    fn cycle_visits_every_word_and_wraps() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();
        nav.cycle_word(&puzzle, false);
        let start = nav.current_word(&puzzle);

        let mut visited = Vec::new();
        for _ in 0..puzzle.words().len() {
            nav.cycle_word(&puzzle, false);
            visited.push(id(&puzzle, nav.current_word(&puzzle)).unwrap());
        }
        assert_eq!(visited, ["3 Across", "1 Down", "2 Down", "1 Across"]);
        assert_eq!(nav.current_word(&puzzle), start);
    }

    #[test]
    fn reverse_then_forward_is_identity() {
        let puzzle = puzzle();
        for &word in puzzle.cycle_order() {
            let mut nav = Navigator::new();
            nav.jump_to_word(&puzzle, word);
            nav.cycle_word(&puzzle, true);
            nav.cycle_word(&puzzle, false);
            assert_eq!(nav.current_word(&puzzle), Some(word));
        }
    }

    #[test]
    fn cycle_sets_direction_of_target_word() {
        let puzzle = puzzle();
        let mut nav = Navigator::new();
        nav.focus(&puzzle, Coord::new(2, 4));
        assert_eq!(id(&puzzle, nav.current_word(&puzzle)).unwrap(), "3 Across");

        // 1 Down shares its origin with 1 Across.
        nav.cycle_word(&puzzle, false);
        assert_eq!(nav.focused(), Some(Coord::ORIGIN));
        assert_eq!(nav.direction(), Direction::Down);
    }
}
