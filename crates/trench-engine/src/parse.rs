//! Puzzle text: a 512-symbol table, a blank line, then the image rows.

use crate::image::ImageArray;
use std::error::Error;
use std::fmt;
use trench_core::{EnhancementTable, ImageError, Pixel, Point, TableError};

/// A parsed puzzle: the table and generation 0 of the image.
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// Enhancement table.
    pub table: EnhancementTable,
    /// Generation 0, sharing `table`.
    pub image: ImageArray,
}

/// Errors from [`parse_puzzle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A section of the input was absent or blank.
    MissingSection {
        /// Which section: `"enhancement table"` or `"image"`.
        section: &'static str,
    },
    /// The table section was malformed.
    Table(TableError),
    /// The image section was malformed.
    Image(ImageError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSection { section } => write!(f, "missing {section} section"),
            Self::Table(e) => write!(f, "enhancement table: {e}"),
            Self::Image(e) => write!(f, "image: {e}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingSection { .. } => None,
            Self::Table(e) => Some(e),
            Self::Image(e) => Some(e),
        }
    }
}

impl From<TableError> for ParseError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

impl From<ImageError> for ParseError {
    fn from(e: ImageError) -> Self {
        Self::Image(e)
    }
}

/// Parse a whole puzzle.
///
/// The table may be wrapped over several lines; everything up to the first
/// blank line is joined and parsed as one table. The remaining non-blank
/// block is the image, with its top-left character at `(0, 0)`. Lines may
/// end in `\r\n`.
pub fn parse_puzzle(input: &str) -> Result<Puzzle, ParseError> {
    let mut lines = input
        .lines()
        .map(str::trim_end)
        .skip_while(|l| l.is_empty());

    let table_text: String = lines.by_ref().take_while(|l| !l.is_empty()).collect();
    if table_text.is_empty() {
        return Err(ParseError::MissingSection {
            section: "enhancement table",
        });
    }

    let mut image_lines: Vec<&str> = lines.skip_while(|l| l.is_empty()).collect();
    while image_lines.last().is_some_and(|l| l.is_empty()) {
        image_lines.pop();
    }
    if image_lines.is_empty() {
        return Err(ParseError::MissingSection { section: "image" });
    }

    let table = EnhancementTable::parse(&table_text)?;
    let image = ImageArray::from_text(&image_lines.join("\n"), table.clone())?;
    Ok(Puzzle { table, image })
}

/// Lit points of an image grid: `#` at row `y`, column `x` becomes
/// `(x, y)`.
///
/// Trailing whitespace on each line is ignored; any other character besides
/// `#` and `.` is an error.
pub fn lit_points(text: &str) -> Result<Vec<Point>, ImageError> {
    let mut lit = Vec::new();
    for (row, line) in text.lines().enumerate() {
        for (col, symbol) in line.trim_end().chars().enumerate() {
            match Pixel::from_symbol(symbol) {
                // Oversized offsets clamp and are then rejected as out of range.
                Some(Pixel::Lit) => lit.push(Point::new(
                    i32::try_from(col).unwrap_or(i32::MAX),
                    i32::try_from(row).unwrap_or(i32::MAX),
                )),
                Some(Pixel::Dark) => {}
                None => return Err(ImageError::InvalidSymbol { row, col, symbol }),
            }
        }
    }
    Ok(lit)
}
