//! Session orchestration: navigation, sink updates, and verification.
//!
//! Every accepted navigation request is followed by the same refresh: focus
//! the cell, highlight the current word with its clue, and rewrite the status
//! line. Declined requests leave the sink untouched.

use std::sync::Arc;

use puzzle_core::{
    CellContents, Coord, GridSnapshot, NavigationState, Navigator, PresentationSink, Puzzle,
    Verdict, Word, WordId, WordRef, check, normalize_answer,
};
use tracing::{debug, error, info};

/// Status line shown while nothing is focused.
pub const STATUS_PROMPT: &str = "Select a cell to begin";

/// Sinks that accept letter edits as well as reads.
pub trait EditableGrid: CellContents {
    /// Replaces the contents of an active cell; `None` clears it.
    fn write_cell(&mut self, coord: Coord, letter: Option<char>);
}

/// A verification job detached from the session.
///
/// Holds an owned snapshot so the derivation can run on a blocking thread
/// while the user keeps typing.
#[derive(Clone, Debug)]
pub struct PendingCheck {
    puzzle: Arc<Puzzle>,
    snapshot: GridSnapshot,
}

impl PendingCheck {
    pub fn snapshot(&self) -> &GridSnapshot {
        &self.snapshot
    }

    /// Runs the derivation on the calling thread.
    pub fn verify(&self) -> Verdict {
        check(&self.puzzle, &self.snapshot)
    }

    /// Runs the derivation on tokio's blocking pool.
    pub async fn run(self) -> Verdict {
        match tokio::task::spawn_blocking(move || self.verify()).await {
            Ok(verdict) => verdict,
            Err(e) => {
                error!("Verification task failed: {}", e);
                Verdict::Incorrect
            }
        }
    }
}

/// One user's interaction with one puzzle.
pub struct PuzzleSession<S> {
    puzzle: Arc<Puzzle>,
    navigator: Navigator,
    sink: S,
    check_in_flight: bool,
}

impl<S: PresentationSink> PuzzleSession<S> {
    /// Renders the grid and clue list and shows the start prompt.
    pub fn new(puzzle: Arc<Puzzle>, mut sink: S) -> Self {
        sink.render_grid(puzzle.bounds(), puzzle.index());
        sink.render_clue_list(&puzzle.clue_list());
        sink.update_status_line(STATUS_PROMPT);
        info!(
            title = puzzle.title(),
            words = puzzle.words().len(),
            "Puzzle session created"
        );

        Self {
            puzzle,
            navigator: Navigator::new(),
            sink,
            check_in_flight: false,
        }
    }

    /// Focuses the first word in cycle order.
    pub fn start(&mut self) -> bool {
        self.cycle_word(false)
    }

    pub fn puzzle(&self) -> &Arc<Puzzle> {
        &self.puzzle
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigator.state()
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.navigator
            .current_word(&self.puzzle)
            .map(|word| self.puzzle.word(word))
    }

    pub fn focus(&mut self, cell: Coord) -> bool {
        let applied = self.navigator.focus(&self.puzzle, cell);
        self.refresh(applied)
    }

    /// Pointer press: toggles direction on the focused cell, otherwise
    /// focuses the pressed one.
    pub fn press(&mut self, cell: Coord) -> bool {
        if self.navigator.focused() == Some(cell) {
            let applied = self
                .navigator
                .toggle_direction_if_same_cell(&self.puzzle, cell);
            self.refresh(applied)
        } else {
            self.focus(cell)
        }
    }

    /// Toggles direction on the focused cell, if it is a crossing.
    pub fn toggle_direction(&mut self) -> bool {
        match self.navigator.focused() {
            Some(cell) => {
                let applied = self
                    .navigator
                    .toggle_direction_if_same_cell(&self.puzzle, cell);
                self.refresh(applied)
            }
            None => false,
        }
    }

    pub fn advance(&mut self) -> bool {
        let applied = self.navigator.advance(&self.puzzle);
        self.refresh(applied)
    }

    pub fn retreat(&mut self) -> bool {
        let applied = self.navigator.retreat(&self.puzzle);
        self.refresh(applied)
    }

    pub fn move_to(&mut self, target: Coord) -> bool {
        let applied = self.navigator.move_to(&self.puzzle, target);
        self.refresh(applied)
    }

    /// Arrow-key movement relative to the focused cell.
    pub fn move_by(&mut self, dr: i32, dc: i32) -> bool {
        match self.navigator.focused() {
            Some(cell) => self.move_to(cell.shifted(dr, dc)),
            None => false,
        }
    }

    pub fn cycle_word(&mut self, reverse: bool) -> bool {
        let applied = self.navigator.cycle_word(&self.puzzle, reverse);
        self.refresh(applied)
    }

    /// Clue click: focuses the word's origin in the word's direction.
    pub fn select_clue(&mut self, id: WordId) -> bool {
        let Some(word) = self.puzzle.find(id) else {
            return false;
        };
        let applied = self.navigator.jump_to_word(&self.puzzle, word);
        self.refresh(applied)
    }

    fn refresh(&mut self, applied: bool) -> bool {
        if !applied {
            return false;
        }

        let state = self.navigator.state();
        if let Some(cell) = state.focused {
            self.sink.focus_cell(cell);
        }

        match self.navigator.current_word(&self.puzzle) {
            Some(current) => self.highlight(current),
            None => {
                self.sink.highlight_word(&[], None);
                self.sink.update_status_line(STATUS_PROMPT);
            }
        }
        debug!(focused = ?state.focused, direction = %state.direction, "Navigation updated");
        true
    }

    fn highlight(&mut self, current: WordRef) {
        let word = self.puzzle.word(current);
        let cells: Vec<Coord> = word.cells().collect();
        self.sink.highlight_word(&cells, Some(word.id));
        self.sink
            .update_status_line(&format!("{}: {}", word.id, word.clue));
    }

    pub fn check_in_flight(&self) -> bool {
        self.check_in_flight
    }

    /// Snapshots the grid and arms the in-flight guard.
    ///
    /// Returns `None` while a previous check has not completed.
    pub fn begin_check(&mut self) -> Option<PendingCheck> {
        if self.check_in_flight {
            debug!("Check already in flight; request ignored");
            return None;
        }
        self.check_in_flight = true;

        let snapshot = GridSnapshot::capture(&self.puzzle, &self.sink);
        info!(filled = snapshot.len(), "Check started");
        Some(PendingCheck {
            puzzle: Arc::clone(&self.puzzle),
            snapshot,
        })
    }

    /// Clears the in-flight guard and reports the verdict to the sink.
    pub fn complete_check(&mut self, verdict: Verdict) {
        self.check_in_flight = false;
        info!(%verdict, "Check completed");
        self.sink.report_verdict(verdict);
    }

    /// Synchronous check; `None` if one is already in flight.
    pub fn check_now(&mut self) -> Option<Verdict> {
        let pending = self.begin_check()?;
        let verdict = pending.verify();
        self.complete_check(verdict);
        Some(verdict)
    }
}

impl<S: PresentationSink + EditableGrid> PuzzleSession<S> {
    /// Writes a letter into the focused cell and advances.
    ///
    /// Non-letters are ignored.
    pub fn type_letter(&mut self, input: char) -> bool {
        let Some(cell) = self.navigator.focused() else {
            return false;
        };
        let Some(letter) = normalize_answer(&input.to_string()).chars().next() else {
            return false;
        };

        self.sink.write_cell(cell, Some(letter));
        self.advance();
        true
    }

    /// Clears the focused cell, or retreats when it is already empty.
    pub fn backspace(&mut self) -> bool {
        let Some(cell) = self.navigator.focused() else {
            return false;
        };
        if self.sink.read_cell(cell).is_none() {
            return self.retreat();
        }
        self.sink.write_cell(cell, None);
        true
    }

    /// Clears the focused cell without moving.
    pub fn delete(&mut self) -> bool {
        let Some(cell) = self.navigator.focused() else {
            return false;
        };
        self.sink.write_cell(cell, None);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_model::{CellFlags, Overlay, ViewModel};
    use puzzle_core::{Direction, GridBounds, PuzzleDefinition, Verifier};

    fn word(number: u16, direction: Direction, row: i32, col: i32, answer: &str) -> Word {
        Word::new(
            WordId::new(number, direction),
            Coord::new(row, col),
            answer.len() as u16,
            format!("clue for {answer}"),
            Verifier::derive(answer),
        )
    }

    /// C A T
    /// A # A
    /// R # R
    fn session() -> PuzzleSession<ViewModel> {
        let puzzle = Puzzle::new(PuzzleDefinition::new(
            "session",
            GridBounds::new(3, 3),
            vec![
                word(1, Direction::Across, 0, 0, "CAT"),
                word(1, Direction::Down, 0, 0, "CAR"),
                word(2, Direction::Down, 0, 2, "TAR"),
            ],
        ))
        .unwrap();
        PuzzleSession::new(Arc::new(puzzle), ViewModel::new())
    }

    fn type_word(session: &mut PuzzleSession<ViewModel>, letters: &str) {
        for ch in letters.chars() {
            session.type_letter(ch);
        }
    }

    #[test]
    fn new_session_shows_prompt() {
        let session = session();
        assert_eq!(session.sink().status(), STATUS_PROMPT);
        assert_eq!(session.sink().focused(), None);
        assert_eq!(session.sink().clues(Direction::Down).len(), 2);
    }

    #[test]
    fn start_focuses_first_word() {
        let mut session = session();
        assert!(session.start());
        assert_eq!(session.sink().focused(), Some(Coord::ORIGIN));
        assert_eq!(session.sink().status(), "1 Across: clue for CAT");
        assert_eq!(session.sink().highlighted().len(), 3);
        assert_eq!(
            session.sink().active_clue(),
            Some(WordId::new(1, Direction::Across))
        );
    }

    #[test]
    fn press_twice_toggles_crossing_cell() {
        let mut session = session();
        assert!(session.press(Coord::ORIGIN));
        assert_eq!(session.navigation().direction, Direction::Across);
        assert!(session.press(Coord::ORIGIN));
        assert_eq!(session.navigation().direction, Direction::Down);
        assert_eq!(session.sink().status(), "1 Down: clue for CAR");
    }

    #[test]
    fn press_on_blocked_cell_changes_nothing() {
        let mut session = session();
        session.start();
        assert!(!session.press(Coord::new(1, 1)));
        assert_eq!(session.sink().focused(), Some(Coord::ORIGIN));
        assert_eq!(session.sink().status(), "1 Across: clue for CAT");
    }

    #[test]
    fn typing_fills_and_advances_within_word() {
        let mut session = session();
        session.start();
        type_word(&mut session, "c-a7t");

        let view = session.sink();
        assert_eq!(view.read_cell(Coord::new(0, 0)), Some('C'));
        assert_eq!(view.read_cell(Coord::new(0, 1)), Some('A'));
        assert_eq!(view.read_cell(Coord::new(0, 2)), Some('T'));
        // Stays on the last cell of the word.
        assert_eq!(view.focused(), Some(Coord::new(0, 2)));
    }

    #[test]
    fn backspace_clears_then_retreats() {
        let mut session = session();
        session.start();
        type_word(&mut session, "CA");
        assert_eq!(session.sink().focused(), Some(Coord::new(0, 2)));

        assert!(session.backspace());
        assert_eq!(session.sink().focused(), Some(Coord::new(0, 1)));
        assert!(session.backspace());
        assert_eq!(session.sink().read_cell(Coord::new(0, 1)), None);
        assert_eq!(session.sink().focused(), Some(Coord::new(0, 1)));
    }

    #[test]
    fn delete_clears_in_place() {
        let mut session = session();
        session.start();
        session.type_letter('C');
        session.retreat();
        assert!(session.delete());
        assert_eq!(session.sink().read_cell(Coord::ORIGIN), None);
        assert_eq!(session.sink().focused(), Some(Coord::ORIGIN));
    }

    #[test]
    fn move_by_skips_blocked_targets() {
        let mut session = session();
        session.focus(Coord::new(0, 1));
        assert!(!session.move_by(1, 0));
        assert_eq!(session.sink().focused(), Some(Coord::new(0, 1)));
        assert!(!session.move_by(-1, 0));
        assert!(session.move_by(0, 1));
        assert_eq!(session.sink().focused(), Some(Coord::new(0, 2)));
    }

    #[test]
    fn select_clue_sets_direction_and_origin() {
        let mut session = session();
        assert!(session.select_clue(WordId::new(2, Direction::Down)));
        assert_eq!(session.sink().focused(), Some(Coord::new(0, 2)));
        assert_eq!(session.navigation().direction, Direction::Down);
        assert!(!session.select_clue(WordId::new(9, Direction::Across)));
    }

    #[test]
    fn check_guard_blocks_reentry() {
        let mut session = session();
        let pending = session.begin_check().unwrap();
        assert!(session.check_in_flight());
        assert!(session.begin_check().is_none());
        assert_eq!(session.check_now(), None);

        session.complete_check(pending.verify());
        assert!(!session.check_in_flight());
        assert_eq!(session.sink().overlay(), Some(Overlay::Failure));
    }

    #[test]
    fn solved_grid_reports_success() {
        let mut session = session();
        session.start();
        type_word(&mut session, "CAT");
        session.select_clue(WordId::new(1, Direction::Down));
        type_word(&mut session, "CAR");
        session.select_clue(WordId::new(2, Direction::Down));
        type_word(&mut session, "TAR");

        assert_eq!(session.check_now(), Some(Verdict::Solved));
        let view = session.sink();
        assert_eq!(view.overlay(), Some(Overlay::Success));
        assert!(
            view.cell(Coord::new(2, 2))
                .unwrap()
                .flags
                .contains(CellFlags::CORRECT)
        );
    }

    #[test]
    fn snapshot_ignores_later_edits() {
        let mut session = session();
        session.start();
        type_word(&mut session, "CAT");
        let pending = session.begin_check().unwrap();
        assert_eq!(pending.snapshot().len(), 3);

        session.select_clue(WordId::new(1, Direction::Down));
        type_word(&mut session, "CAR");
        assert_eq!(pending.snapshot().len(), 3);
        assert_eq!(pending.verify(), Verdict::Incorrect);
    }
}
