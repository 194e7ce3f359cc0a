//! Binary pixel state and its text symbols.

use std::fmt;

/// The state of one cell: dark (`.`, bit 0) or lit (`#`, bit 1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pixel {
    /// Unlit cell. The infinite canvas starts out dark.
    #[default]
    Dark,
    /// Lit cell.
    Lit,
}

impl Pixel {
    /// Symbol used for lit pixels in puzzle text and renders.
    pub const LIT_SYMBOL: char = '#';
    /// Symbol used for dark pixels in puzzle text and renders.
    pub const DARK_SYMBOL: char = '.';

    /// Parse a single puzzle symbol. Returns `None` for anything other
    /// than `#` or `.`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::LIT_SYMBOL => Some(Self::Lit),
            Self::DARK_SYMBOL => Some(Self::Dark),
            _ => None,
        }
    }

    /// The puzzle symbol for this pixel.
    pub fn symbol(self) -> char {
        match self {
            Self::Lit => Self::LIT_SYMBOL,
            Self::Dark => Self::DARK_SYMBOL,
        }
    }

    /// `1` for lit, `0` for dark.
    pub fn bit(self) -> u16 {
        match self {
            Self::Lit => 1,
            Self::Dark => 0,
        }
    }

    /// `true` if this pixel is lit.
    pub fn is_lit(self) -> bool {
        self == Self::Lit
    }
}

impl From<bool> for Pixel {
    fn from(lit: bool) -> Self {
        if lit {
            Self::Lit
        } else {
            Self::Dark
        }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
