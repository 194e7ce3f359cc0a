//! Spatial helpers for Trench images.
//!
//! The canvas is an unbounded square lattice. This crate fixes the 3×3
//! neighbourhood ordering that defines the bit layout of a lookup index,
//! and provides [`Bounds`], the tight bounding box that separates the
//! tracked part of an image from its uniform background.
//!
//! # Neighbourhood order
//!
//! [`nine_box`] visits offsets row-major, top row first:
//!
//! ```text
//! (-1,-1) ( 0,-1) ( 1,-1)     bit 8  bit 7  bit 6
//! (-1, 0) ( 0, 0) ( 1, 0)  →  bit 5  bit 4  bit 3
//! (-1, 1) ( 0, 1) ( 1, 1)     bit 2  bit 1  bit 0
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod neighbourhood;

pub use bounds::Bounds;
pub use error::SpaceError;
pub use neighbourhood::{nine_box, NineBox, OFFSETS_9};
