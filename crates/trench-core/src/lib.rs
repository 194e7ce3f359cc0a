//! Core types for the Trench image enhancement engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! values every other crate passes around: grid points, pixels, the 9-bit
//! neighbourhood index, the 512-entry enhancement table, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod pixel;
pub mod point;
pub mod table;

pub use error::{CountError, ImageError, TableError};
pub use index::NeighbourhoodIndex;
pub use pixel::Pixel;
pub use point::{Point, COORD_LIMIT};
pub use table::{EnhancementTable, TABLE_LEN};
