//! Error types for table construction, image construction, and counting.
//!
//! One enum per failure domain. All of them are deterministic: the same
//! input always fails the same way, so none is worth retrying.

use crate::point::{Point, COORD_LIMIT};
use std::error::Error;
use std::fmt;

/// Errors from building an [`EnhancementTable`](crate::EnhancementTable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The table did not contain exactly 512 entries.
    InvalidLength {
        /// Number of entries supplied.
        len: usize,
    },
    /// A symbol other than `#` or `.` appeared in table text.
    InvalidSymbol {
        /// Table entry the symbol would have occupied.
        index: usize,
        /// The offending character.
        symbol: char,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "enhancement table must have 512 entries, got {len}")
            }
            Self::InvalidSymbol { index, symbol } => {
                write!(f, "invalid symbol {symbol:?} at table entry {index}")
            }
        }
    }
}

impl Error for TableError {}

/// Errors from building an image snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// The initial pattern has no lit cells, so it has no bounding box.
    EmptyGrid,
    /// A symbol other than `#` or `.` appeared in image text.
    InvalidSymbol {
        /// Zero-based line number.
        row: usize,
        /// Zero-based character offset within the line.
        col: usize,
        /// The offending character.
        symbol: char,
    },
    /// A lit point lies beyond [`COORD_LIMIT`](crate::point::COORD_LIMIT).
    CoordinateOutOfRange {
        /// The offending point.
        point: Point,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "image must contain at least one lit pixel"),
            Self::InvalidSymbol { row, col, symbol } => {
                write!(f, "invalid symbol {symbol:?} at row {row}, column {col}")
            }
            Self::CoordinateOutOfRange { point } => write!(
                f,
                "point {point} is outside -{COORD_LIMIT}..={COORD_LIMIT}"
            ),
        }
    }
}

impl Error for ImageError {}

/// Errors from counting lit pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountError {
    /// The background is lit, so infinitely many pixels are lit.
    Unbounded {
        /// Generation of the image that was queried.
        generation: u32,
        /// Lit pixels inside the tracked bounds, excluding the exterior.
        within_bounds: usize,
    },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded {
                generation,
                within_bounds,
            } => write!(
                f,
                "lit count is unbounded at generation {generation}: background is lit \
                 ({within_bounds} lit within bounds)"
            ),
        }
    }
}

impl Error for CountError {}
