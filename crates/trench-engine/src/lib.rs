//! Generation-by-generation image enhancement over an infinite canvas.
//!
//! An [`ImageArray`] is one immutable generation: the lit pixels inside a
//! tight bounding box plus a single [`Pixel`](trench_core::Pixel) that
//! stands for every cell outside it. [`ImageArray::enhance`] produces the
//! next generation by looking up each cell's 3×3 neighbourhood in a shared
//! [`EnhancementTable`](trench_core::EnhancementTable), and derives the
//! next background from the current one so canvases that flip between
//! dark and lit stay classified correctly.
//!
//! [`Enhancer`] drives a run: it validates an [`EnhanceConfig`], steps
//! generations, records lit counts at checkpoints, and keeps per-pass
//! [`EnhanceMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod image;
pub mod lockstep;
pub mod metrics;
pub mod parse;
mod partition;

pub use config::{ConfigError, EnhanceConfig};
pub use image::ImageArray;
pub use lockstep::{Checkpoint, Enhancer, RunReport, StepResult};
pub use metrics::EnhanceMetrics;
pub use parse::{lit_points, parse_puzzle, ParseError, Puzzle};
