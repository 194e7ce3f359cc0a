use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use trench_engine::{EnhanceConfig, Enhancer, ImageArray, RunReport};

/// Build a run configuration from CLI flags.
///
/// Checkpoints are sorted and deduplicated. Without `--iterations` the run
/// stops at the last checkpoint; with neither flag the defaults apply.
pub fn config_from_args(
    iterations: Option<u32>,
    mut checkpoints: Vec<u32>,
    workers: usize,
) -> EnhanceConfig {
    checkpoints.sort_unstable();
    checkpoints.dedup();
    let defaults = EnhanceConfig::default();
    match (iterations, checkpoints.last().copied()) {
        (None, None) => EnhanceConfig {
            workers,
            ..defaults
        },
        (Some(n), None) => EnhanceConfig {
            iterations: n,
            checkpoints: vec![n],
            workers,
        },
        (n, Some(last)) => EnhanceConfig {
            iterations: n.unwrap_or(last),
            checkpoints,
            workers,
        },
    }
}

pub fn run(
    input: &Path,
    config: EnhanceConfig,
    frames: Option<&Path>,
    out: &mut impl Write,
) -> Result<RunReport> {
    let start = Instant::now();
    let puzzle = super::load_puzzle(input)?;
    let mut enhancer = Enhancer::new(puzzle.image, config).context("invalid run configuration")?;

    let report = match frames {
        Some(dir) => run_with_frames(&mut enhancer, dir)?,
        None => enhancer.run()?,
    };

    for checkpoint in &report.checkpoints {
        writeln!(
            out,
            "generation {}: {} lit",
            checkpoint.generation, checkpoint.lit_count
        )?;
        info!(
            generation = checkpoint.generation,
            lit = checkpoint.lit_count,
            "checkpoint"
        );
    }
    info!(
        passes = report.passes,
        last_pass_us = enhancer.last_metrics().total_us,
        "Execution time: {:?}",
        start.elapsed()
    );
    Ok(report)
}

/// Drive `enhancer` to its last iteration, writing every generation
/// (including the starting one) into `dir`.
fn run_with_frames(enhancer: &mut Enhancer, dir: &Path) -> Result<RunReport> {
    let start = Instant::now();
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    write_frame(dir, enhancer.image())?;

    let mut report = RunReport::default();
    while enhancer.generation() < enhancer.config().iterations {
        report.checkpoints.extend(enhancer.advance()?);
        report.passes += 1;
        write_frame(dir, enhancer.image())?;
    }
    report.total_us = start.elapsed().as_micros() as u64;
    info!(dir = %dir.display(), frames = report.passes + 1, "frames written");
    Ok(report)
}

pub fn frame_path(dir: &Path, generation: u32) -> PathBuf {
    dir.join(format!("frame_{generation:03}.txt"))
}

fn write_frame(dir: &Path, image: &ImageArray) -> Result<()> {
    let path = frame_path(dir, image.generation());
    fs::write(&path, image.render()).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trench_test_utils::{SAMPLE_COUNTS, SAMPLE_INPUT};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("trench-cli-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_input(dir: &Path) -> PathBuf {
        let path = dir.join("input.txt");
        fs::write(&path, SAMPLE_INPUT).unwrap();
        path
    }

    #[test]
    fn config_defaults() {
        assert_eq!(config_from_args(None, vec![], 1), EnhanceConfig::default());
    }

    #[test]
    fn config_iterations_only() {
        let cfg = config_from_args(Some(7), vec![], 2);
        assert_eq!(cfg.iterations, 7);
        assert_eq!(cfg.checkpoints, vec![7]);
        assert_eq!(cfg.workers, 2);
    }

    #[test]
    fn config_checkpoints_sorted_and_bound_iterations() {
        let cfg = config_from_args(None, vec![10, 2, 10], 1);
        assert_eq!(cfg.checkpoints, vec![2, 10]);
        assert_eq!(cfg.iterations, 10);
    }

    #[test]
    fn run_prints_sample_counts() {
        let dir = scratch_dir("run");
        let input = write_input(&dir);
        let mut out = Vec::new();
        let report = run(&input, EnhanceConfig::default(), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected: String = SAMPLE_COUNTS
            .iter()
            .map(|(g, c)| format!("generation {g}: {c} lit\n"))
            .collect();
        assert_eq!(text, expected);
        assert_eq!(report.passes, 50);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn run_writes_frames() {
        let dir = scratch_dir("frames");
        let input = write_input(&dir);
        let frames = dir.join("frames");
        let config = config_from_args(Some(2), vec![2], 1);
        let mut out = Vec::new();
        run(&input, config, Some(frames.as_path()), &mut out).unwrap();

        let first = fs::read_to_string(frame_path(&frames, 0)).unwrap();
        assert_eq!(first.matches('#').count(), 10);
        let last = fs::read_to_string(frame_path(&frames, 2)).unwrap();
        assert_eq!(last.matches('#').count(), 35);
        assert!(!frame_path(&frames, 3).exists());
        assert_eq!(String::from_utf8(out).unwrap(), "generation 2: 35 lit\n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_reported() {
        let err = run(
            Path::new("/nonexistent/trench/input.txt"),
            EnhanceConfig::default(),
            None,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn bad_config_is_reported() {
        let dir = scratch_dir("badcfg");
        let input = write_input(&dir);
        let config = EnhanceConfig {
            workers: 0,
            ..EnhanceConfig::default()
        };
        let err = run(&input, config, None, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("invalid run configuration"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
