//! Screen geometry shared by rendering and mouse hit testing.
use client_frontend_core::ViewModel;
use puzzle_core::{Coord, Direction, GridBounds, WordId};
use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 4;
/// Terminal rows per grid cell: label line, then letter line.
pub const CELL_HEIGHT: u16 = 2;

const HEADER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 3;
const MIN_CLUE_WIDTH: u16 = 24;

/// Where a mouse press landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Cell(Coord),
    Clue(WordId),
}

/// Areas of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub grid: Rect,
    pub status: Rect,
    pub across: Rect,
    pub down: Rect,
    pub messages: Rect,
    bounds: GridBounds,
}

impl ScreenLayout {
    pub fn compute(area: Rect, bounds: GridBounds, message_panel_height: u16) -> Self {
        let grid_width = panel_extent(bounds.cols, CELL_WIDTH);
        let grid_height = panel_extent(bounds.rows, CELL_HEIGHT);

        let [header, body, messages] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(message_panel_height),
        ])
        .areas(area);

        let [left, right] =
            Layout::horizontal([Constraint::Length(grid_width), Constraint::Min(MIN_CLUE_WIDTH)])
                .areas(body);

        let [grid, status, _] = Layout::vertical([
            Constraint::Length(grid_height),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(left);

        let [across, down] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(right);

        Self {
            header,
            grid,
            status,
            across,
            down,
            messages,
            bounds,
        }
    }

    pub fn clue_panel(&self, direction: Direction) -> Rect {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    fn grid_inner(&self) -> Rect {
        self.grid.inner(Margin::new(1, 1))
    }

    /// Screen area of a cell, clipped to the grid panel. `None` when the
    /// cell falls outside the panel.
    pub fn cell_area(&self, coord: Coord) -> Option<Rect> {
        if !self.bounds.contains(coord) {
            return None;
        }
        let inner = self.grid_inner();
        let x = cell_offset(inner.x, coord.col, CELL_WIDTH)?;
        let y = cell_offset(inner.y, coord.row, CELL_HEIGHT)?;
        if x >= inner.right() || y >= inner.bottom() {
            return None;
        }
        let area = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(inner);
        (!area.is_empty()).then_some(area)
    }

    /// Cells that are at least partly inside the grid panel, row-major.
    pub fn visible_cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let inner = self.grid_inner();
        let rows = self.bounds.rows.min(u32::from(inner.height.div_ceil(CELL_HEIGHT)));
        let cols = self.bounds.cols.min(u32::from(inner.width.div_ceil(CELL_WIDTH)));
        GridBounds::new(rows, cols).coords()
    }

    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        let inner = self.grid_inner();
        if !contains(inner, column, row) {
            return None;
        }
        let coord = Coord::new(
            i32::from((row - inner.y) / CELL_HEIGHT),
            i32::from((column - inner.x) / CELL_WIDTH),
        );
        self.bounds.contains(coord).then_some(coord)
    }

    pub fn clue_at(&self, view: &ViewModel, column: u16, row: u16) -> Option<WordId> {
        [Direction::Across, Direction::Down]
            .into_iter()
            .find_map(|direction| {
                let inner = self.clue_panel(direction).inner(Margin::new(1, 1));
                if !contains(inner, column, row) {
                    return None;
                }
                let offset = clue_scroll(view, direction, inner.height);
                view.clues(direction)
                    .get(offset + usize::from(row - inner.y))
                    .map(|clue| clue.id)
            })
    }

    pub fn hit_test(&self, view: &ViewModel, column: u16, row: u16) -> Option<Hit> {
        self.cell_at(column, row)
            .map(Hit::Cell)
            .or_else(|| self.clue_at(view, column, row).map(Hit::Clue))
    }
}

/// First visible clue so that the active clue stays on screen.
pub fn clue_scroll(view: &ViewModel, direction: Direction, visible: u16) -> usize {
    let visible = usize::from(visible.max(1));
    view.clues(direction)
        .iter()
        .position(|clue| Some(clue.id) == view.active_clue())
        .map_or(0, |index| index.saturating_sub(visible - 1))
}

/// Border plus `cells` blocks of `size`, saturating at the terminal limit.
fn panel_extent(cells: u32, size: u16) -> u16 {
    u16::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(size))
        .and_then(|extent| extent.checked_add(2))
        .unwrap_or(u16::MAX)
}

fn cell_offset(origin: u16, index: i32, size: u16) -> Option<u16> {
    u16::try_from(index)
        .ok()?
        .checked_mul(size)?
        .checked_add(origin)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
