//! Per-pass metrics for the enhancement driver.

/// Timing and size figures for a single enhancement pass.
///
/// The [`Enhancer`](crate::Enhancer) fills these after each
/// [`step()`](crate::Enhancer::step); callers read the most recent pass
/// through [`last_metrics()`](crate::Enhancer::last_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnhanceMetrics {
    /// Wall-clock time for the pass, in microseconds.
    pub total_us: u64,
    /// Cells evaluated: the area of the previous bounds grown by one.
    pub cells_visited: u64,
    /// Lit cells inside the new bounds.
    pub lit_cells: usize,
    /// Area of the new bounds.
    pub bounds_area: u64,
    /// Row bands the pass was split into: the configured worker count,
    /// capped by the rows in the evaluated region. 1 means the pass ran
    /// on the calling thread.
    pub workers: usize,
}
