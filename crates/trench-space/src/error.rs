//! Error types for bounding-box construction.

use std::fmt;

/// Errors arising from bounding-box construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to enclose zero points.
    EmptyBounds,
    /// A rectangle's minimum corner lies past its maximum on some axis.
    InvalidRect {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBounds => write!(f, "cannot bound an empty set of points"),
            Self::InvalidRect { reason } => write!(f, "invalid rect: {reason}"),
        }
    }
}

impl std::error::Error for SpaceError {}
