//! Assertions over [`ImageArray`] snapshots.
//!
//! These take `trench-engine` types, so use them from integration tests
//! (`tests/`) rather than from unit tests inside `trench-engine` itself.

use indexmap::IndexSet;
use trench_core::Point;
use trench_engine::ImageArray;
use trench_space::Bounds;

/// Panic unless `image.bounds()` is exactly the bounding box of its lit
/// set. An image with no lit cells is exempt.
pub fn assert_bounds_tight(image: &ImageArray) {
    if image.lit_within_bounds() == 0 {
        return;
    }
    let tight = Bounds::enclosing(image.lit()).expect("lit set is non-empty");
    assert_eq!(
        image.bounds(),
        tight,
        "generation {} bounds are not tight",
        image.generation()
    );
}

/// Panic unless `next` stays within one cell of `prev` on every side.
pub fn assert_within_growth(prev: &ImageArray, next: &ImageArray) {
    let limit = prev.bounds().expanded(1);
    assert!(
        limit.contains_bounds(&next.bounds()),
        "generation {} bounds {} escape {}",
        next.generation(),
        next.bounds(),
        limit
    );
}

/// Lit set shifted so the bounds' top-left corner sits at `(0, 0)`, the
/// frame a rendered grid is re-parsed in.
pub fn translated_to_origin(image: &ImageArray) -> IndexSet<Point> {
    let min = image.bounds().min();
    image.lit().map(|p| p.offset(-min.x, -min.y)).collect()
}
