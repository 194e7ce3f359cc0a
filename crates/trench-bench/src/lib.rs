//! Benchmark profiles for the Trench enhancement engine.
//!
//! Provides pre-built starting images for benchmarks and examples:
//!
//! - [`sample_profile`]: the 5x5 worked example with its table
//! - [`scatter_profile`]: a seeded pseudo-random pattern of any size
//! - [`scatter_points`]: the lit cells behind [`scatter_profile`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trench_core::Point;
use trench_engine::{parse_puzzle, ImageArray, ParseError};
use trench_test_utils::{sample_table, SAMPLE_INPUT};

/// The worked example, ready to enhance.
pub fn sample_profile() -> Result<ImageArray, ParseError> {
    Ok(parse_puzzle(SAMPLE_INPUT)?.image)
}

/// A `width` x `height` image with roughly half its cells lit, driven by
/// the sample table.
///
/// Returns `None` if the pattern came out with no lit cells (only
/// possible for tiny sizes).
pub fn scatter_profile(width: u32, height: u32, seed: u64) -> Option<ImageArray> {
    ImageArray::new(scatter_points(width, height, seed), sample_table()).ok()
}

/// Deterministic lit cells for [`scatter_profile`].
///
/// Each cell is lit when the top bit of a 64-bit LCG step is set, so the
/// same `seed` always yields the same pattern.
pub fn scatter_points(width: u32, height: u32, seed: u64) -> Vec<Point> {
    let mut state = seed;
    let mut lit = Vec::new();
    for y in 0..height {
        for x in 0..width {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            if state >> 63 == 1 {
                lit.push(Point::new(x as i32, y as i32));
            }
        }
    }
    lit
}
