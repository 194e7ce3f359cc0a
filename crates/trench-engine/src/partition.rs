//! Row-band partitioning of one enhancement pass across worker threads.
//!
//! Every worker reads the same immutable snapshot and owns a disjoint band
//! of output rows, so no coordination is needed beyond collecting the
//! bands. Results travel over a channel tagged with their band index and
//! are stitched back in row order, which keeps the lit set's order (and
//! therefore the snapshot) identical to the single-threaded pass.

use crate::image::ImageArray;
use indexmap::IndexSet;
use std::thread;
use tracing::{trace, warn};
use trench_core::Point;
use trench_space::Bounds;

impl ImageArray {
    /// [`enhance`](Self::enhance) split into horizontal bands, one per
    /// worker thread.
    ///
    /// The result is equal to `self.enhance()` for any `workers`. With
    /// `workers <= 1`, or a region with a single row, the pass runs on the
    /// calling thread.
    pub fn enhance_partitioned(&self, workers: usize) -> ImageArray {
        self.enhance_in_bands(workers).0
    }

    /// [`enhance_partitioned`](Self::enhance_partitioned) plus the number
    /// of bands the pass actually used (1 when it ran sequentially).
    pub(crate) fn enhance_in_bands(&self, workers: usize) -> (ImageArray, usize) {
        let region = self.bounds().expanded(1);
        let bands = region.split_rows(workers);
        if bands.len() <= 1 {
            return (self.enhance(), 1);
        }

        let (tx, rx) = crossbeam_channel::unbounded::<(usize, Vec<Point>)>();
        let mut inline = Vec::new();
        thread::scope(|scope| {
            for (idx, band) in bands.iter().copied().enumerate() {
                let tx = tx.clone();
                let spawned = thread::Builder::new()
                    .name(format!("trench-band-{idx}"))
                    .spawn_scoped(scope, move || {
                        // rx outlives the scope, so the send cannot fail.
                        let _ = tx.send((idx, self.enhance_band(idx, band)));
                    });
                if let Err(err) = spawned {
                    warn!(band = idx, %err, "band worker failed to spawn, enhancing inline");
                    inline.push((idx, self.enhance_band(idx, band)));
                }
            }
        });
        drop(tx);

        let mut parts: Vec<Vec<Point>> = vec![Vec::new(); bands.len()];
        for (idx, lit) in rx.iter().chain(inline) {
            parts[idx] = lit;
        }
        let lit: IndexSet<Point> = parts.into_iter().flatten().collect();
        (self.successor(lit, region), bands.len())
    }

    fn enhance_band(&self, idx: usize, band: Bounds) -> Vec<Point> {
        let lit: Vec<Point> = self.enhance_region(band).collect();
        trace!(band = idx, rows = %band, lit = lit.len(), "band enhanced");
        lit
    }
}
