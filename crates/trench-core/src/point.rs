//! The [`Point`] grid coordinate.

use std::cmp::Ordering;
use std::fmt;

/// Largest coordinate magnitude an image may start with.
///
/// Every pass grows the tracked region by one cell per side, so starting
/// points are kept well inside `i32` to leave room for growth.
pub const COORD_LIMIT: i32 = 1 << 30;

/// A cell on the unbounded image canvas.
///
/// `x` grows to the right (column), `y` grows downward (row), matching the
/// layout of the puzzle text. Points order row-major: first by `y`, then by
/// `x`, so a sorted collection reads in the same order as a rendered grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Create a point at column `x`, row `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point shifted by `(dx, dy)`, saturating at the `i32` limits.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// `true` if both coordinates lie within `±COORD_LIMIT`.
    pub const fn in_range(self) -> bool {
        self.x >= -COORD_LIMIT
            && self.x <= COORD_LIMIT
            && self.y >= -COORD_LIMIT
            && self.y <= COORD_LIMIT
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
