//! Test utilities for Trench development.
//!
//! [`fixtures`] holds the worked-example puzzle and a few hand-built
//! tables; [`invariants`] holds assertions shared by the engine's
//! integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod invariants;

pub use fixtures::{
    alternating_table, dark_table, identity_table, sample_points, sample_table,
    saturating_table, table_from_bits, SAMPLE_COUNTS, SAMPLE_IMAGE, SAMPLE_INPUT, SAMPLE_TABLE,
};
pub use invariants::{assert_bounds_tight, assert_within_growth, translated_to_origin};
