//! The 512-entry image enhancement table.

use crate::error::TableError;
use crate::index::NeighbourhoodIndex;
use crate::pixel::Pixel;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Number of entries in an enhancement table (one per 9-bit index).
pub const TABLE_LEN: usize = 512;

/// Maps every 3×3 neighbourhood to the next state of its centre cell.
///
/// Immutable once built and cheap to clone: all generations of an image
/// share one reference-counted buffer. Construction is the only place the
/// length is checked, so an `EnhancementTable` always holds exactly
/// [`TABLE_LEN`] entries and [`lookup`](Self::lookup) is total.
#[derive(Clone, PartialEq, Eq)]
pub struct EnhancementTable {
    entries: Arc<[Pixel]>,
}

impl EnhancementTable {
    /// Build a table from its entries in index order.
    ///
    /// Returns `Err(TableError::InvalidLength)` unless exactly 512 entries
    /// are supplied.
    pub fn new(entries: Vec<Pixel>) -> Result<Self, TableError> {
        if entries.len() != TABLE_LEN {
            return Err(TableError::InvalidLength { len: entries.len() });
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Build a table by evaluating `f` for every index `0..512`.
    pub fn from_fn(mut f: impl FnMut(NeighbourhoodIndex) -> Pixel) -> Self {
        let entries: Vec<Pixel> = (0..TABLE_LEN as u16)
            .map(|raw| f(NeighbourhoodIndex::from_bits(raw)))
            .collect();
        Self {
            entries: entries.into(),
        }
    }

    /// Parse the puzzle's table notation: 512 `#`/`.` symbols.
    ///
    /// Whitespace between symbols (including line breaks, since the table
    /// is often wrapped in puzzle text) is ignored.
    ///
    /// # Errors
    ///
    /// - [`TableError::InvalidSymbol`] for any other character.
    /// - [`TableError::InvalidLength`] if the symbol count is not 512.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut entries = Vec::with_capacity(TABLE_LEN);
        for symbol in text.chars().filter(|c| !c.is_whitespace()) {
            let pixel = Pixel::from_symbol(symbol).ok_or(TableError::InvalidSymbol {
                index: entries.len(),
                symbol,
            })?;
            entries.push(pixel);
        }
        Self::new(entries)
    }

    /// The output pixel for a neighbourhood.
    pub fn lookup(&self, index: NeighbourhoodIndex) -> Pixel {
        self.entries[index.value()]
    }

    /// The state the infinite canvas takes after one pass, given its
    /// current state.
    pub fn next_background(&self, current: Pixel) -> Pixel {
        self.lookup(NeighbourhoodIndex::uniform(current))
    }

    /// `true` if a dark canvas turns lit and a lit canvas turns dark, i.e.
    /// the background flips every pass.
    pub fn alternates(&self) -> bool {
        self.first().is_lit() && !self.last().is_lit()
    }

    /// `true` if a dark canvas turns lit and then stays lit forever.
    pub fn saturates(&self) -> bool {
        self.first().is_lit() && self.last().is_lit()
    }

    /// Iterate entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.entries.iter().copied()
    }

    fn first(&self) -> Pixel {
        self.lookup(NeighbourhoodIndex::uniform(Pixel::Dark))
    }

    fn last(&self) -> Pixel {
        self.lookup(NeighbourhoodIndex::uniform(Pixel::Lit))
    }
}

impl FromStr for EnhancementTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EnhancementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pixel in self.iter() {
            write!(f, "{pixel}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for EnhancementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit = self.iter().filter(|p| p.is_lit()).count();
        f.debug_struct("EnhancementTable")
            .field("lit_entries", &lit)
            .field("alternates", &self.alternates())
            .field("saturates", &self.saturates())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_table_with(lit: &[usize]) -> EnhancementTable {
        EnhancementTable::from_fn(|idx| Pixel::from(lit.contains(&idx.value())))
    }

    #[test]
    fn new_rejects_short_table() {
        let err = EnhancementTable::new(vec![Pixel::Dark; 511]).unwrap_err();
        assert_eq!(err, TableError::InvalidLength { len: 511 });
    }

    #[test]
    fn new_rejects_long_table() {
        let err = EnhancementTable::new(vec![Pixel::Dark; 513]).unwrap_err();
        assert_eq!(err, TableError::InvalidLength { len: 513 });
    }

    #[test]
    fn parse_ignores_line_breaks() {
        let mut text = String::new();
        for chunk in 0..8 {
            text.push_str(if chunk == 0 { "#" } else { "." });
            text.push_str(&".".repeat(63));
            text.push('\n');
        }
        let table = EnhancementTable::parse(&text).unwrap();
        assert_eq!(table.lookup(NeighbourhoodIndex::from_bits(0)), Pixel::Lit);
        assert_eq!(table.iter().filter(|p| p.is_lit()).count(), 1);
    }

    #[test]
    fn parse_reports_symbol_position() {
        let mut text = ".".repeat(TABLE_LEN);
        text.replace_range(10..11, "x");
        let err = EnhancementTable::parse(&text).unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidSymbol {
                index: 10,
                symbol: 'x'
            }
        );
    }

    #[test]
    fn parse_reports_length() {
        let err = "#.#".parse::<EnhancementTable>().unwrap_err();
        assert_eq!(err, TableError::InvalidLength { len: 3 });
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let table = dark_table_with(&[1, 34, 200, 511]);
        let text = table.to_string();
        assert_eq!(text.len(), TABLE_LEN);
        assert_eq!(EnhancementTable::parse(&text).unwrap(), table);
    }

    #[test]
    fn background_transitions() {
        let steady = dark_table_with(&[]);
        assert!(!steady.alternates());
        assert!(!steady.saturates());
        assert_eq!(steady.next_background(Pixel::Dark), Pixel::Dark);

        let flipping = dark_table_with(&[0]);
        assert!(flipping.alternates());
        assert_eq!(flipping.next_background(Pixel::Dark), Pixel::Lit);
        assert_eq!(flipping.next_background(Pixel::Lit), Pixel::Dark);

        let saturating = dark_table_with(&[0, 511]);
        assert!(saturating.saturates());
        assert!(!saturating.alternates());
        assert_eq!(saturating.next_background(Pixel::Lit), Pixel::Lit);
    }

    #[test]
    fn clones_share_storage() {
        let a = dark_table_with(&[3]);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.entries, &b.entries));
    }
}
