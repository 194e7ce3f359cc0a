use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Apply `generations` passes and print the bounded region.
pub fn run(input: &Path, generations: u32, out: &mut impl Write) -> Result<()> {
    let puzzle = super::load_puzzle(input)?;
    let mut image = puzzle.image;
    for _ in 0..generations {
        image = image.enhance();
    }
    if image.background().is_lit() {
        warn!(
            generation = image.generation(),
            "background is lit; cells beyond the printed region are all lit"
        );
    }
    writeln!(out, "{image}")?;
    info!(
        generation = image.generation(),
        bounds = %image.bounds(),
        lit = image.lit_within_bounds(),
        "rendered"
    );
    Ok(())
}
