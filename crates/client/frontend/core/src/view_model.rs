//! Framework-agnostic record of everything the session told the sink.
//!
//! [`ViewModel`] implements [`PresentationSink`] by storing state instead of
//! drawing; concrete frontends render from it each frame. It also owns the
//! entered letters, which verification reads back through [`CellContents`].

use bitflags::bitflags;
use puzzle_core::{
    CellContents, CellIndex, ClueList, Coord, Direction, GridBounds, PresentationSink, Verdict,
    Word, WordId,
};

use crate::services::EditableGrid;

bitflags! {
    /// Visual state of an active cell.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        /// Part of the current word.
        const HIGHLIGHTED = 0b0001;
        /// Holds input focus.
        const FOCUSED = 0b0010;
        /// Revealed as correct after a successful check.
        const CORRECT = 0b0100;
    }
}

/// An active (focusable) cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellView {
    pub label: Option<u16>,
    pub letter: Option<char>,
    pub flags: CellFlags,
}

/// A clue list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueView {
    pub id: WordId,
    pub text: String,
}

/// Verdict feedback currently shown on top of the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    Success,
    Failure,
}

#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    bounds: GridBounds,
    /// Row-major; `None` marks a blocked cell.
    cells: Vec<Option<CellView>>,
    across: Vec<ClueView>,
    down: Vec<ClueView>,
    highlighted: Vec<Coord>,
    active_clue: Option<WordId>,
    focused: Option<Coord>,
    status: String,
    overlay: Option<Overlay>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// `None` for blocked or out-of-bounds cells.
    pub fn cell(&self, coord: Coord) -> Option<&CellView> {
        self.bounds.linear(coord).and_then(|slot| self.cells[slot].as_ref())
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut CellView> {
        let slot = self.bounds.linear(coord)?;
        self.cells[slot].as_mut()
    }

    pub fn clues(&self, direction: Direction) -> &[ClueView] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    pub fn active_clue(&self) -> Option<WordId> {
        self.active_clue
    }

    pub fn focused(&self) -> Option<Coord> {
        self.focused
    }

    pub fn highlighted(&self) -> &[Coord] {
        &self.highlighted
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Closes the verdict overlay, returning the one that was open.
    pub fn dismiss_overlay(&mut self) -> Option<Overlay> {
        self.overlay.take()
    }

    fn clear_flag(&mut self, flag: CellFlags) {
        for cell in self.cells.iter_mut().flatten() {
            cell.flags.remove(flag);
        }
    }
}

impl CellContents for ViewModel {
    fn read_cell(&self, coord: Coord) -> Option<char> {
        self.cell(coord).and_then(|cell| cell.letter)
    }
}

impl EditableGrid for ViewModel {
    fn write_cell(&mut self, coord: Coord, letter: Option<char>) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.letter = letter;
            // Editing invalidates a previous reveal.
            cell.flags.remove(CellFlags::CORRECT);
        }
    }
}

impl PresentationSink for ViewModel {
    fn render_grid(&mut self, bounds: GridBounds, index: &CellIndex) {
        self.bounds = bounds;
        self.cells = bounds
            .coords()
            .map(|coord| {
                index.entry(coord).map(|entry| CellView {
                    label: entry.label,
                    ..CellView::default()
                })
            })
            .collect();
    }

    fn render_clue_list(&mut self, clues: &ClueList<'_>) {
        let view = |words: &[&Word]| -> Vec<ClueView> {
            words
                .iter()
                .map(|word| ClueView {
                    id: word.id,
                    text: word.clue.clone(),
                })
                .collect()
        };
        self.across = view(&clues.across);
        self.down = view(&clues.down);
    }

    fn focus_cell(&mut self, coord: Coord) {
        self.clear_flag(CellFlags::FOCUSED);
        if let Some(cell) = self.cell_mut(coord) {
            cell.flags.insert(CellFlags::FOCUSED);
            self.focused = Some(coord);
        }
    }

    fn highlight_word(&mut self, cells: &[Coord], clue: Option<WordId>) {
        self.clear_flag(CellFlags::HIGHLIGHTED);
        for &coord in cells {
            if let Some(cell) = self.cell_mut(coord) {
                cell.flags.insert(CellFlags::HIGHLIGHTED);
            }
        }
        self.highlighted = cells.to_vec();
        self.active_clue = clue;
    }

    fn update_status_line(&mut self, text: &str) {
        self.status = text.to_owned();
    }

    fn report_verdict(&mut self, verdict: Verdict) {
        self.clear_flag(CellFlags::CORRECT);
        match verdict {
            Verdict::Solved => {
                for cell in self.cells.iter_mut().flatten() {
                    cell.flags.insert(CellFlags::CORRECT);
                }
                self.overlay = Some(Overlay::Success);
            }
            Verdict::Incorrect => self.overlay = Some(Overlay::Failure),
        }
    }
}
