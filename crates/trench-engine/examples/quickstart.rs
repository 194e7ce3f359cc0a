//! Trench quickstart: parse the worked example and watch it grow.
//!
//! Demonstrates:
//!   1. Parsing puzzle text into a table and an image
//!   2. Stepping an `Enhancer` and reading per-pass metrics
//!   3. Running to the configured checkpoints
//!   4. Resetting and rendering
//!
//! Run with:
//!   cargo run -p trench-engine --example quickstart

use trench_engine::{parse_puzzle, EnhanceConfig, Enhancer};
use trench_test_utils::SAMPLE_INPUT;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let puzzle = parse_puzzle(SAMPLE_INPUT)?;
    println!(
        "table: alternates={} saturates={}",
        puzzle.table.alternates(),
        puzzle.table.saturates()
    );
    println!("generation 0:\n{}\n", puzzle.image);

    let mut enhancer = Enhancer::new(puzzle.image, EnhanceConfig::default())?;

    for _ in 0..2 {
        let result = enhancer.step();
        println!(
            "generation {} ({} us, {} cells visited):\n{}\n",
            result.image.generation(),
            result.metrics.total_us,
            result.metrics.cells_visited,
            result.image
        );
    }

    enhancer.reset();
    let report = enhancer.run()?;
    for checkpoint in &report.checkpoints {
        println!(
            "generation {}: {} lit",
            checkpoint.generation, checkpoint.lit_count
        );
    }
    println!("{} passes in {} us", report.passes, report.total_us);
    Ok(())
}
