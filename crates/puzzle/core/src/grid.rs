//! Grid geometry: coordinates, bounds, and word directions.
use std::fmt;

/// Discrete grid coordinate expressed as (row, column).
///
/// Components are signed so that a step off the edge of the grid is still a
/// representable value; callers reject it with [`GridBounds::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate `distance` cells away along `direction`.
    pub const fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.step();
        Self {
            row: self.row + dr * distance,
            col: self.col + dc * distance,
        }
    }

    /// Returns the coordinate shifted by a raw (row, col) delta.
    pub const fn shifted(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed rectangular bounds of a puzzle grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub rows: u32,
    pub cols: u32,
}

impl GridBounds {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && coord.row < self.rows as i32
            && coord.col < self.cols as i32
    }

    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major offset of an in-bounds coordinate.
    pub fn linear(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row as usize * self.cols as usize + coord.col as usize)
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Orientation of a word in the grid.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    /// Unit (row, col) delta for one step along this direction.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    pub const fn flip(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Lowercase identifier used in clue ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_direction() {
        let origin = Coord::new(2, 3);
        assert_eq!(origin.offset(Direction::Across, 4), Coord::new(2, 7));
        assert_eq!(origin.offset(Direction::Down, 4), Coord::new(6, 3));
        assert_eq!(origin.offset(Direction::Down, -1), Coord::new(1, 3));
    }

    #[test]
    fn bounds_reject_negative_and_overflowing_coords() {
        let bounds = GridBounds::new(15, 11);
        assert!(bounds.contains(Coord::new(0, 0)));
        assert!(bounds.contains(Coord::new(14, 10)));
        assert!(!bounds.contains(Coord::new(-1, 0)));
        assert!(!bounds.contains(Coord::new(0, 11)));
        assert!(!bounds.contains(Coord::new(15, 0)));
    }

    #[test]
    fn coords_are_row_major() {
        let bounds = GridBounds::new(2, 3);
        let coords: Vec<_> = bounds.coords().collect();
        assert_eq!(coords.len(), bounds.cell_count());
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[3], Coord::new(1, 0));
        assert_eq!(bounds.linear(Coord::new(1, 2)), Some(5));
        assert_eq!(bounds.linear(Coord::new(2, 0)), None);
    }

    #[test]
    fn direction_display_and_flip() {
        assert_eq!(Direction::Across.to_string(), "Across");
        assert_eq!(Direction::Down.to_string(), "Down");
        assert_eq!(Direction::Across.flip(), Direction::Down);
        assert_eq!(Direction::Down.flip().flip(), Direction::Down);
    }
}
