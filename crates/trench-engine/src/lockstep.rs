//! Lockstep enhancement driver.
//!
//! [`Enhancer`] owns the current generation and advances it one pass at a
//! time. [`step()`](Enhancer::step) returns a [`StepResult`] that borrows
//! the new image, so the caller cannot step again while holding it.
//! [`run()`](Enhancer::run) steps to the configured iteration count and
//! records the lit count at each checkpoint.

use std::time::Instant;

use tracing::{debug, warn};
use trench_core::CountError;

use crate::config::{ConfigError, EnhanceConfig};
use crate::image::ImageArray;
use crate::metrics::EnhanceMetrics;

// ── StepResult ──────────────────────────────────────────────────

/// Result of an [`Enhancer::step()`] call.
pub struct StepResult<'e> {
    /// The generation this pass produced.
    pub image: &'e ImageArray,
    /// Metrics for this pass.
    pub metrics: EnhanceMetrics,
}

/// A lit count recorded at a configured generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    /// Generation the count was taken at.
    pub generation: u32,
    /// Number of lit pixels on the whole canvas.
    pub lit_count: usize,
}

/// Outcome of [`Enhancer::run()`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Checkpoints in generation order.
    pub checkpoints: Vec<Checkpoint>,
    /// Passes executed by this call.
    pub passes: u32,
    /// Wall-clock time of the whole call, in microseconds.
    pub total_us: u64,
}

// ── Enhancer ────────────────────────────────────────────────────

/// Synchronous driver over successive [`ImageArray`] generations.
///
/// # Example
///
/// ```ignore
/// let mut enhancer = Enhancer::new(image, EnhanceConfig::default())?;
/// let report = enhancer.run()?;
/// for cp in &report.checkpoints {
///     println!("generation {}: {} lit", cp.generation, cp.lit_count);
/// }
/// ```
pub struct Enhancer {
    initial: ImageArray,
    current: ImageArray,
    config: EnhanceConfig,
    last_metrics: EnhanceMetrics,
}

impl Enhancer {
    /// Create a driver starting at `image`.
    ///
    /// Validates `config` and keeps a copy of `image` for
    /// [`reset()`](Self::reset).
    pub fn new(image: ImageArray, config: EnhanceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            initial: image.clone(),
            current: image,
            config,
            last_metrics: EnhanceMetrics::default(),
        })
    }

    /// Run one enhancement pass.
    pub fn step(&mut self) -> StepResult<'_> {
        let start = Instant::now();
        let cells_visited = self.current.bounds().expanded(1).area();
        let (next, bands) = self.current.enhance_in_bands(self.config.workers);
        let metrics = EnhanceMetrics {
            total_us: start.elapsed().as_micros() as u64,
            cells_visited,
            lit_cells: next.lit_within_bounds(),
            bounds_area: next.bounds().area(),
            workers: bands,
        };
        self.current = next;
        self.last_metrics = metrics.clone();
        StepResult {
            image: &self.current,
            metrics,
        }
    }

    /// Run one pass and, if the new generation is a checkpoint, count it.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::Unbounded`] when a checkpoint lands on a lit
    /// background. The pass itself has already been applied.
    pub fn advance(&mut self) -> Result<Option<Checkpoint>, CountError> {
        let generation = self.step().image.generation();
        if !self.config.is_checkpoint(generation) {
            return Ok(None);
        }
        match self.current.lit_count() {
            Ok(lit_count) => {
                debug!(generation, lit_count, "checkpoint");
                Ok(Some(Checkpoint {
                    generation,
                    lit_count,
                }))
            }
            Err(err) => {
                warn!(
                    generation,
                    within_bounds = self.current.lit_within_bounds(),
                    "checkpoint on a lit background has no finite count"
                );
                Err(err)
            }
        }
    }

    /// Advance until generation `config.iterations`, collecting
    /// checkpoints.
    ///
    /// Starts from the current generation, so checkpoints already passed
    /// are not revisited; call [`reset()`](Self::reset) to start over.
    pub fn run(&mut self) -> Result<RunReport, CountError> {
        let start = Instant::now();
        let mut report = RunReport::default();
        while self.current.generation() < self.config.iterations {
            let checkpoint = self.advance()?;
            report.passes += 1;
            report.checkpoints.extend(checkpoint);
        }
        report.total_us = start.elapsed().as_micros() as u64;
        Ok(report)
    }

    /// Return to the initial image and clear metrics.
    pub fn reset(&mut self) -> &ImageArray {
        self.current = self.initial.clone();
        self.last_metrics = EnhanceMetrics::default();
        &self.current
    }

    /// The current generation's image.
    pub fn image(&self) -> &ImageArray {
        &self.current
    }

    /// Current generation number (0 after construction or reset).
    pub fn generation(&self) -> u32 {
        self.current.generation()
    }

    /// Metrics from the most recent pass.
    pub fn last_metrics(&self) -> &EnhanceMetrics {
        &self.last_metrics
    }

    /// The validated configuration.
    pub fn config(&self) -> &EnhanceConfig {
        &self.config
    }
}

impl std::fmt::Debug for Enhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enhancer")
            .field("generation", &self.current.generation())
            .field("iterations", &self.config.iterations)
            .field("workers", &self.config.workers)
            .finish()
    }
}
