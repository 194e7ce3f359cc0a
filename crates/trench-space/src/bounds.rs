//! Inclusive axis-aligned bounding boxes.

use crate::error::SpaceError;
use std::fmt;
use std::ops::RangeInclusive;
use trench_core::Point;

/// An inclusive rectangle `[min.x, max.x] × [min.y, max.y]`.
///
/// Always non-empty: construction rejects inverted corners and empty point
/// sets, so `min <= max` holds on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Create a rectangle from its corners.
    ///
    /// Returns `Err(SpaceError::InvalidRect)` if `min` lies past `max` on
    /// either axis.
    pub fn new(min: Point, max: Point) -> Result<Self, SpaceError> {
        if min.x > max.x || min.y > max.y {
            return Err(SpaceError::InvalidRect {
                reason: format!("min {min} > max {max} on some axis"),
            });
        }
        Ok(Self { min, max })
    }

    /// The tight bounding box of `points`.
    ///
    /// Returns `Err(SpaceError::EmptyBounds)` if `points` is empty.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Result<Self, SpaceError> {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(SpaceError::EmptyBounds)?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Ok(Self { min, max })
    }

    /// Top-left corner.
    pub fn min(&self) -> Point {
        self.min
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Point {
        self.max
    }

    /// Column range.
    pub fn cols(&self) -> RangeInclusive<i32> {
        self.min.x..=self.max.x
    }

    /// Row range.
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.min.y..=self.max.y
    }

    /// Number of columns.
    pub fn width(&self) -> u64 {
        (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u64
    }

    /// Number of rows.
    pub fn height(&self) -> u64 {
        (i64::from(self.max.y) - i64::from(self.min.y) + 1) as u64
    }

    /// Number of cells.
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// `true` if `p` lies inside (edges included).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// `true` if every cell of `other` lies inside `self`.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// The rectangle grown by `margin` cells on every side.
    ///
    /// Corners saturate at the `i32` limits rather than wrapping.
    pub fn expanded(&self, margin: u32) -> Self {
        let m = i32::try_from(margin).unwrap_or(i32::MAX);
        Self {
            min: self.min.offset(-m, -m),
            max: self.max.offset(m, m),
        }
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: i32) -> impl Iterator<Item = Point> {
        self.cols().map(move |x| Point::new(x, y))
    }

    /// Every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = Point> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |y| cols.clone().map(move |x| Point::new(x, y)))
    }

    /// Split into at most `parts` horizontal bands of contiguous rows.
    ///
    /// Bands are returned top to bottom, cover every row exactly once, and
    /// differ in height by at most one. Asking for more bands than rows
    /// yields one band per row; `parts == 0` is treated as 1.
    pub fn split_rows(&self, parts: usize) -> Vec<Bounds> {
        let height = self.height();
        let parts = (parts.max(1) as u64).min(height);
        let base = height / parts;
        let extra = height % parts;

        let mut bands = Vec::with_capacity(parts as usize);
        let mut top = i64::from(self.min.y);
        for i in 0..parts {
            let rows = base + u64::from(i < extra);
            let bottom = top + rows as i64 - 1;
            bands.push(Bounds {
                min: Point::new(self.min.x, top as i32),
                max: Point::new(self.max.x, bottom as i32),
            });
            top = bottom + 1;
        }
        bands
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..={}] x [{}..={}]",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn expanded_saturates_at_i32_limits() {
        let b = Bounds::enclosing([p(i32::MAX, i32::MIN)]).unwrap();
        let grown = b.expanded(1);
        assert_eq!(grown.min(), p(i32::MAX - 1, i32::MIN));
        assert_eq!(grown.max(), p(i32::MAX, i32::MIN + 1));
        assert!(grown.contains_bounds(&b));
        assert_eq!(b.expanded(u32::MAX).min(), p(0, i32::MIN));
    }

    #[test]
    fn new_rejects_inverted_corners() {
        assert!(matches!(
            Bounds::new(p(3, 0), p(1, 5)),
            Err(SpaceError::InvalidRect { .. })
        ));
        assert!(matches!(
            Bounds::new(p(0, 4), p(1, 2)),
            Err(SpaceError::InvalidRect { .. })
        ));
    }

    #[test]
    fn enclosing_empty_is_error() {
        assert_eq!(
            Bounds::enclosing(std::iter::empty()),
            Err(SpaceError::EmptyBounds)
        );
    }

    #[test]
    fn enclosing_single_point() {
        let b = Bounds::enclosing([p(2, -3)]).unwrap();
        assert_eq!(b.min(), p(2, -3));
        assert_eq!(b.max(), p(2, -3));
        assert_eq!(b.area(), 1);
    }

    #[test]
    fn enclosing_is_tight() {
        let b = Bounds::enclosing([p(0, 0), p(3, 0), p(2, 4), p(-1, 2)]).unwrap();
        assert_eq!(b.min(), p(-1, 0));
        assert_eq!(b.max(), p(3, 4));
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 5);
    }

    // ── Geometry tests ──────────────────────────────────────────

    #[test]
    fn contains_edges_inclusive() {
        let b = Bounds::new(p(0, 0), p(4, 4)).unwrap();
        assert!(b.contains(p(0, 0)));
        assert!(b.contains(p(4, 4)));
        assert!(!b.contains(p(5, 4)));
        assert!(!b.contains(p(-1, 0)));
    }

    #[test]
    fn expanded_grows_every_side() {
        let b = Bounds::new(p(0, 0), p(4, 4)).unwrap().expanded(1);
        assert_eq!(b.min(), p(-1, -1));
        assert_eq!(b.max(), p(5, 5));
        assert_eq!(b.area(), 49);
    }

    #[test]
    fn iter_is_row_major() {
        let b = Bounds::new(p(1, 1), p(2, 2)).unwrap();
        let cells: Vec<Point> = b.iter().collect();
        assert_eq!(cells, vec![p(1, 1), p(2, 1), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn display_format() {
        let b = Bounds::new(p(-1, 0), p(3, 4)).unwrap();
        assert_eq!(b.to_string(), "[-1..=3] x [0..=4]");
    }

    // ── Band splitting ──────────────────────────────────────────

    #[test]
    fn split_rows_uneven() {
        let b = Bounds::new(p(0, 0), p(2, 6)).unwrap();
        let bands = b.split_rows(3);
        let heights: Vec<u64> = bands.iter().map(|band| band.height()).collect();
        assert_eq!(heights, vec![3, 2, 2]);
        assert_eq!(bands[0].min(), p(0, 0));
        assert_eq!(bands[2].max(), p(2, 6));
    }

    #[test]
    fn split_rows_more_parts_than_rows() {
        let b = Bounds::new(p(0, 0), p(9, 1)).unwrap();
        assert_eq!(b.split_rows(8).len(), 2);
        assert_eq!(b.split_rows(0).len(), 1);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn enclosing_contains_all_points(
            pts in prop::collection::vec((-50i32..50, -50i32..50), 1..40),
        ) {
            let points: Vec<Point> = pts.into_iter().map(Point::from).collect();
            let b = Bounds::enclosing(points.iter().copied()).unwrap();
            for q in &points {
                prop_assert!(b.contains(*q));
            }
            // Tight: every edge is touched by some point.
            prop_assert!(points.iter().any(|q| q.x == b.min().x));
            prop_assert!(points.iter().any(|q| q.x == b.max().x));
            prop_assert!(points.iter().any(|q| q.y == b.min().y));
            prop_assert!(points.iter().any(|q| q.y == b.max().y));
        }

        #[test]
        fn split_rows_partitions_iter(
            w in 1i32..8, h in 1i32..20, parts in 0usize..10,
        ) {
            let b = Bounds::new(p(0, 0), p(w - 1, h - 1)).unwrap();
            let rejoined: Vec<Point> = b
                .split_rows(parts)
                .iter()
                .flat_map(|band| band.iter().collect::<Vec<_>>())
                .collect();
            let direct: Vec<Point> = b.iter().collect();
            prop_assert_eq!(rejoined, direct);
        }
    }
}
