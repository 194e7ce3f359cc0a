//! Trench: image enhancement on an infinite canvas.
//!
//! A binary image is repeatedly rewritten by looking up each pixel's 3×3
//! neighbourhood in a 512-entry table. The canvas is unbounded; everything
//! outside the tracked rectangle shares one background state, which the
//! table may flip between passes. This facade re-exports the sub-crates so
//! a single dependency is enough.
//!
//! # Quick start
//!
//! ```rust
//! use trench::prelude::*;
//!
//! // Every cell keeps its state: lit iff its own (centre) bit is lit.
//! let table = EnhancementTable::from_fn(|i| Pixel::from(i.value() & 0b000_010_000 != 0));
//! let image = ImageArray::from_text("#.\n.#", table).unwrap();
//!
//! let config = EnhanceConfig {
//!     iterations: 3,
//!     checkpoints: vec![3],
//!     workers: 1,
//! };
//! let mut enhancer = Enhancer::new(image, config).unwrap();
//! let report = enhancer.run().unwrap();
//! assert_eq!(report.checkpoints[0].lit_count, 2);
//! assert_eq!(enhancer.image().render(), "#.\n.#");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trench-core` | Points, pixels, neighbourhood indices, the table, errors |
//! | [`space`] | `trench-space` | Bounding boxes and the 3×3 neighbourhood |
//! | [`engine`] | `trench-engine` | `ImageArray`, parsing, configuration, the `Enhancer` driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`trench-core`).
pub use trench_core as types;

/// Bounding boxes and neighbourhood offsets (`trench-space`).
pub use trench_space as space;

/// Snapshots, enhancement, and the run driver (`trench-engine`).
///
/// [`engine::ImageArray`] is one generation; [`engine::Enhancer`] steps
/// generations and records lit counts at checkpoints.
pub use trench_engine as engine;

/// Common imports for typical Trench usage.
///
/// ```rust
/// use trench::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use trench_core::{EnhancementTable, NeighbourhoodIndex, Pixel, Point};

    // Errors
    pub use trench_core::{CountError, ImageError, TableError};

    // Space
    pub use trench_space::Bounds;

    // Engine
    pub use trench_engine::{
        parse_puzzle, Checkpoint, ConfigError, EnhanceConfig, EnhanceMetrics, Enhancer,
        ImageArray, ParseError, Puzzle, RunReport, StepResult,
    };
}
