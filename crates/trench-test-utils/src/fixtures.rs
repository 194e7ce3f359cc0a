//! Canonical puzzle data and table builders.
//!
//! Everything here returns `trench-core` types so fixtures can be shared
//! by unit tests inside `trench-engine` as well as by integration tests.

use trench_core::{EnhancementTable, NeighbourhoodIndex, Pixel, Point};

/// The worked-example enhancement table as one 512-symbol line.
pub const SAMPLE_TABLE: &str = concat!(
    "..#.#..#####.#.#.#.###.##.....###.##.#..###.####..#####..#....#..#..##..##",
    "#..######.###...####..#..#####..##..#.#####...##.#.#..#.##..#.#......#.###",
    ".######.###.####...#.##.##..#..#..#####.....#.#....###..#.##......#.....#.",
    ".#..#..##..#...##.######.####.####.#.#...#.......#..#.#.#...####.##.#.....",
    ".#..#...##.#.##..#...##.#.##..###.#......#.#.......#.#.#.####.###.##...#..",
    "...####.#..#..#.##.#....##..#.####....##...##..#...#......#.#.......#.....",
    "..##..####..#...#.#.#...##..#.#..###..#####........#..####......#..#",
);

/// The worked-example image: 5×5 with 10 lit cells.
pub const SAMPLE_IMAGE: &str = concat!(
    "#..#.\n",
    "#....\n",
    "##..#\n",
    "..#..\n",
    "..###"
);

/// A complete puzzle file: the table wrapped over seven lines, a blank
/// line, then the image.
pub const SAMPLE_INPUT: &str = concat!(
    "..#.#..#####.#.#.#.###.##.....###.##.#..###.####..#####..#....#..#..##..##\n",
    "#..######.###...####..#..#####..##..#.#####...##.#.#..#.##..#.#......#.###\n",
    ".######.###.####...#.##.##..#..#..#####.....#.#....###..#.##......#.....#.\n",
    ".#..#..##..#...##.######.####.####.#.#...#.......#..#.#.#...####.##.#.....\n",
    ".#..#...##.#.##..#...##.#.##..###.#......#.#.......#.#.#.####.###.##...#..\n",
    "...####.#..#..#.##.#....##..#.####....##...##..#...#......#.#.......#.....\n",
    "..##..####..#...#.#.#...##..#.#..###..#####........#..####......#..#\n",
    "\n",
    "#..#.\n",
    "#....\n",
    "##..#\n",
    "..#..\n",
    "..###\n"
);

/// Lit-pixel counts of the worked example after 2 and 50 passes.
pub const SAMPLE_COUNTS: [(u32, usize); 2] = [(2, 35), (50, 3351)];

/// The worked-example table.
pub fn sample_table() -> EnhancementTable {
    EnhancementTable::parse(SAMPLE_TABLE).expect("sample table is well-formed")
}

/// Lit points of [`SAMPLE_IMAGE`] in row-major order.
pub fn sample_points() -> Vec<Point> {
    SAMPLE_IMAGE
        .lines()
        .enumerate()
        .flat_map(|(y, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, c)| c == Pixel::LIT_SYMBOL)
                .map(move |(x, _)| Point::new(x as i32, y as i32))
        })
        .collect()
}

/// A table built from a predicate over raw 9-bit indices.
pub fn table_from_bits(lit: impl Fn(u16) -> bool) -> EnhancementTable {
    EnhancementTable::from_fn(|index| Pixel::from(lit(index.value() as u16)))
}

/// The sample table with entry 0 lit and entry 511 dark, so the
/// background flips every pass.
pub fn alternating_table() -> EnhancementTable {
    let sample = sample_table();
    EnhancementTable::from_fn(|index| {
        if index == NeighbourhoodIndex::uniform(Pixel::Dark) {
            Pixel::Lit
        } else if index == NeighbourhoodIndex::MAX {
            Pixel::Dark
        } else {
            sample.lookup(index)
        }
    })
}

/// The sample table with entries 0 and 511 both lit: the background turns
/// lit after one pass and stays lit.
pub fn saturating_table() -> EnhancementTable {
    let sample = sample_table();
    EnhancementTable::from_fn(|index| {
        if index == NeighbourhoodIndex::uniform(Pixel::Dark) || index == NeighbourhoodIndex::MAX {
            Pixel::Lit
        } else {
            sample.lookup(index)
        }
    })
}

/// Each cell keeps its own state: lit iff the centre bit is set.
pub fn identity_table() -> EnhancementTable {
    table_from_bits(|bits| bits & 0b000_010_000 != 0)
}

/// Every neighbourhood maps to dark.
pub fn dark_table() -> EnhancementTable {
    table_from_bits(|_| false)
}
