//! Interface to the presentation layer driven by a puzzle session.
use crate::definition::ClueList;
use crate::grid::{Coord, GridBounds};
use crate::index::CellIndex;
use crate::verify::{CellContents, Verdict};
use crate::word::WordId;

/// Rendering collaborator. Frontends implement this; the session calls it.
///
/// The sink also owns the grid contents, exposed through [`CellContents`].
pub trait PresentationSink: CellContents {
    /// One-time call to materialize focusable and blocked cells and labels.
    fn render_grid(&mut self, bounds: GridBounds, index: &CellIndex);

    /// One-time call with clues grouped by direction and ordered by number.
    fn render_clue_list(&mut self, clues: &ClueList<'_>);

    /// Moves input focus to `coord`.
    fn focus_cell(&mut self, coord: Coord);

    /// Replaces the current highlight. An empty slice with `None` clears it.
    fn highlight_word(&mut self, cells: &[Coord], clue: Option<WordId>);

    fn update_status_line(&mut self, text: &str);

    /// Success reveals the grid and celebrates; failure shows an error.
    fn report_verdict(&mut self, verdict: Verdict);
}
