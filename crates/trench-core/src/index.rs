//! The 9-bit neighbourhood index used to address the enhancement table.

use crate::pixel::Pixel;
use std::fmt;

/// A lookup index in `[0, 511]` built from the nine pixels of a 3×3
/// neighbourhood.
///
/// Bits are assembled most-significant first: the first pixel supplied
/// (top-left neighbour) becomes bit 8, the last (bottom-right) becomes
/// bit 0. Every constructor masks to nine bits, so an index is always a
/// valid position in an [`EnhancementTable`](crate::EnhancementTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeighbourhoodIndex(u16);

impl NeighbourhoodIndex {
    /// Largest possible index (`0b111_111_111`).
    pub const MAX: Self = Self(0x1FF);

    /// Number of pixels folded into one index.
    pub const WIDTH: usize = 9;

    /// Fold up to nine pixels, most-significant first.
    ///
    /// Extra pixels beyond the ninth shift earlier ones out of range and
    /// are masked away; callers always pass exactly nine.
    pub fn from_pixels(pixels: impl IntoIterator<Item = Pixel>) -> Self {
        let raw = pixels
            .into_iter()
            .fold(0u16, |acc, p| (acc << 1) | p.bit());
        Self(raw & Self::MAX.0)
    }

    /// The index of a neighbourhood made entirely of `pixel`.
    ///
    /// `0` for an all-dark neighbourhood, `511` for an all-lit one. Used to
    /// derive the next background state of the infinite canvas.
    pub fn uniform(pixel: Pixel) -> Self {
        match pixel {
            Pixel::Dark => Self(0),
            Pixel::Lit => Self::MAX,
        }
    }

    /// Build from a raw value, keeping only the low nine bits.
    pub fn from_bits(raw: u16) -> Self {
        Self(raw & Self::MAX.0)
    }

    /// The index as a table position.
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NeighbourhoodIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09b}", self.0)
    }
}
