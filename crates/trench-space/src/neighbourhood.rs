//! The fixed 3×3 neighbourhood of a cell.

use smallvec::SmallVec;
use trench_core::Point;

/// All 9 offsets as `(dx, dy)`, row-major: top row, middle row, bottom row.
///
/// Position in this array is the bit position counted from the most
/// significant end of a [`NeighbourhoodIndex`](trench_core::NeighbourhoodIndex).
pub const OFFSETS_9: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The nine cells of a 3×3 neighbourhood, in [`OFFSETS_9`] order.
pub type NineBox = SmallVec<[Point; 9]>;

/// The 3×3 block of cells centred on `centre`, centre included.
pub fn nine_box(centre: Point) -> NineBox {
    OFFSETS_9
        .iter()
        .map(|&(dx, dy)| centre.offset(dx, dy))
        .collect()
}
