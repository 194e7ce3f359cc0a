pub mod render;
pub mod run;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use trench_engine::{parse_puzzle, Puzzle};

/// Read and parse a puzzle file.
pub fn load_puzzle(input: &Path) -> Result<Puzzle> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let puzzle =
        parse_puzzle(&text).with_context(|| format!("failed to parse {}", input.display()))?;
    info!(
        path = %input.display(),
        lit = puzzle.image.lit_within_bounds(),
        bounds = %puzzle.image.bounds(),
        alternates = puzzle.table.alternates(),
        "puzzle loaded"
    );
    Ok(puzzle)
}
