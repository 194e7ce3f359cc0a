//! The [`ImageArray`] snapshot and the enhancement pass.

use indexmap::IndexSet;
use std::fmt;
use tracing::debug;
use trench_core::{CountError, EnhancementTable, ImageError, NeighbourhoodIndex, Pixel, Point};
use trench_space::{nine_box, Bounds};

/// One generation of the infinite canvas.
///
/// Cells inside [`bounds`](Self::bounds) are lit iff they are in the lit
/// set; cells outside take the value of [`background`](Self::background).
/// A snapshot is never mutated after construction: every pass builds a
/// new one and recomputes its bounds from scratch.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageArray {
    lit: IndexSet<Point>,
    bounds: Bounds,
    background: Pixel,
    generation: u32,
    table: EnhancementTable,
}

impl ImageArray {
    /// Build generation 0 from lit points on a dark canvas.
    ///
    /// Duplicate points collapse.
    ///
    /// # Errors
    ///
    /// - [`ImageError::EmptyGrid`] if `lit` is empty.
    /// - [`ImageError::CoordinateOutOfRange`] if a point lies beyond
    ///   [`COORD_LIMIT`](trench_core::COORD_LIMIT) on either axis.
    pub fn new(
        lit: impl IntoIterator<Item = Point>,
        table: EnhancementTable,
    ) -> Result<Self, ImageError> {
        Self::with_background(lit, table, Pixel::Dark)
    }

    /// Build generation 0 with an explicit background state.
    pub fn with_background(
        lit: impl IntoIterator<Item = Point>,
        table: EnhancementTable,
        background: Pixel,
    ) -> Result<Self, ImageError> {
        let lit: IndexSet<Point> = lit.into_iter().collect();
        if let Some(&point) = lit.iter().find(|p| !p.in_range()) {
            return Err(ImageError::CoordinateOutOfRange { point });
        }
        // The only way to fail enclosing is an empty set.
        let bounds =
            Bounds::enclosing(lit.iter().copied()).map_err(|_| ImageError::EmptyGrid)?;
        Ok(Self {
            lit,
            bounds,
            background,
            generation: 0,
            table,
        })
    }

    /// Build generation 0 from puzzle text (`#` lit, `.` dark, one row per
    /// line).
    pub fn from_text(text: &str, table: EnhancementTable) -> Result<Self, ImageError> {
        Self::new(crate::parse::lit_points(text)?, table)
    }

    /// Tight bounding box of the lit set.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// State of every cell outside [`bounds`](Self::bounds).
    pub fn background(&self) -> Pixel {
        self.background
    }

    /// Number of passes that produced this image.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The table used for the next pass.
    pub fn table(&self) -> &EnhancementTable {
        &self.table
    }

    /// Lit points inside the bounds, in a deterministic order.
    pub fn lit(&self) -> impl Iterator<Item = Point> + '_ {
        self.lit.iter().copied()
    }

    /// Number of lit pixels.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::Unbounded`] when the background is lit: the
    /// exterior then holds infinitely many lit pixels and no finite count
    /// is correct. Use [`lit_within_bounds`](Self::lit_within_bounds) to get
    /// the bounded figure deliberately.
    pub fn lit_count(&self) -> Result<usize, CountError> {
        if self.background.is_lit() {
            return Err(CountError::Unbounded {
                generation: self.generation,
                within_bounds: self.lit.len(),
            });
        }
        Ok(self.lit.len())
    }

    /// Number of lit pixels inside the bounds, ignoring the background.
    pub fn lit_within_bounds(&self) -> usize {
        self.lit.len()
    }

    /// The state of any cell on the infinite canvas.
    pub fn pixel_at(&self, p: Point) -> Pixel {
        if self.lit.contains(&p) {
            Pixel::Lit
        } else if self.bounds.contains(p) {
            Pixel::Dark
        } else {
            self.background
        }
    }

    /// Lookup index of the 3×3 neighbourhood centred on `p`.
    pub fn nine_box_index(&self, p: Point) -> NeighbourhoodIndex {
        NeighbourhoodIndex::from_pixels(nine_box(p).into_iter().map(|q| self.pixel_at(q)))
    }

    /// Apply the table to every cell at once, producing the next generation.
    ///
    /// Only cells within one step of the current bounds can differ from the
    /// background, so the pass evaluates `bounds.expanded(1)` and nothing
    /// else. All lookups read this snapshot; the result is a new snapshot
    /// with its own lit set, recomputed bounds, and the background the
    /// table assigns to a uniform neighbourhood of the current background.
    pub fn enhance(&self) -> ImageArray {
        let region = self.bounds.expanded(1);
        let lit = self.enhance_region(region).collect();
        self.successor(lit, region)
    }

    /// Lit cells of the next generation within `region`, row-major.
    pub(crate) fn enhance_region(&self, region: Bounds) -> impl Iterator<Item = Point> + '_ {
        region
            .iter()
            .filter(move |&p| self.table.lookup(self.nine_box_index(p)).is_lit())
    }

    /// Assemble the next generation from its lit set.
    ///
    /// `region` is the rectangle that was evaluated. If nothing in it came
    /// out lit there is no bounding box; the evaluated rectangle is kept
    /// instead, which is all dark, so exterior cells stay classified by the
    /// new background.
    pub(crate) fn successor(&self, lit: IndexSet<Point>, region: Bounds) -> ImageArray {
        let background = self.table.next_background(self.background);
        let bounds = Bounds::enclosing(lit.iter().copied()).unwrap_or(region);
        let next = ImageArray {
            lit,
            bounds,
            background,
            generation: self.generation.saturating_add(1),
            table: self.table.clone(),
        };
        debug!(
            generation = next.generation,
            bounds = %next.bounds,
            background = %next.background,
            lit = next.lit.len(),
            "image enhanced"
        );
        next
    }

    /// Text grid of the bounded region: one line per row, `#` for lit and
    /// `.` for dark, rows joined by `\n` with no trailing newline.
    ///
    /// Cells beyond the bounds are not drawn, even when the background is
    /// lit.
    pub fn render(&self) -> String {
        let width = self.bounds.width() as usize;
        let height = self.bounds.height() as usize;
        let mut out = String::with_capacity((width + 1) * height);
        for (i, y) in self.bounds.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(
                self.bounds
                    .row(y)
                    .map(|p| Pixel::from(self.lit.contains(&p)).symbol()),
            );
        }
        out
    }
}

impl fmt::Display for ImageArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for ImageArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageArray")
            .field("generation", &self.generation)
            .field("bounds", &self.bounds)
            .field("background", &self.background)
            .field("lit", &self.lit.len())
            .finish()
    }
}
