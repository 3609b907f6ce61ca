//! Capacity-bounded toroidal cell grid.
//!
//! Cells live in a fixed bit array sized for the largest supported grid, so a
//! [`Grid`] is a plain value that can be cloned and moved around without an
//! allocator. Only the first `width * height` bits are used, row-major.

use bitset_core::BitSet;

use crate::error::{Error, Result};
use crate::random::RandomSource;

pub const MAX_WIDTH: usize = 128;
pub const MAX_HEIGHT: usize = 128;

const WORDS: usize = MAX_WIDTH * MAX_HEIGHT / 32;

/// Draws at or below this value leave a seeded cell dead.
pub const SEED_THRESHOLD: i32 = 65;

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: [u32; WORDS],
}

impl Grid {
    /// An all-dead grid. Fails if a dimension is zero or above the maximum.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: [0; WORDS],
        })
    }

    /// Seed every cell independently: alive iff a draw from `[0, 100]` exceeds
    /// `threshold`.
    pub fn seed_random<R: RandomSource>(
        rng: &mut R,
        width: usize,
        height: usize,
        threshold: i32,
    ) -> Result<Self> {
        let mut grid = Grid::new(width, height)?;
        grid.fill_random(rng, threshold);
        Ok(grid)
    }

    /// Replace every cell with a fresh independent draw, keeping the size.
    pub fn fill_random<R: RandomSource>(&mut self, rng: &mut R, threshold: i32) {
        self.clear();
        for x in 0..self.width {
            for y in 0..self.height {
                if rng.random_int(0, 100) > threshold {
                    self.set(x, y, true);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Grid with exactly the listed cells alive.
    pub fn from_cells(width: usize, height: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Grid::new(width, height)?;
        for &(x, y) in alive {
            grid.set(x, y, true);
        }
        Ok(grid)
    }

    /// Parse rows of `#` (alive) and `.` (dead). All rows must have the same
    /// length; any other character panics.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.len());
        let mut grid = Grid::new(width, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            assert!(row.len() == width, "row {} has length {}, expected {}", y, row.len(), width);
            for (x, b) in row.bytes().enumerate() {
                match b {
                    b'#' => grid.set(x, y, true),
                    b'.' => (),
                    _ => panic!("pattern rows may only contain '.' or '#'"),
                }
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells.bit_test(self.index(x, y))
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.index(x, y);
        if alive {
            self.cells.bit_set(i);
        } else {
            self.cells.bit_reset(i);
        }
    }

    /// Number of alive cells among the 8 toroidally adjacent positions.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as isize;
        let h = self.height as isize;
        OFFSETS
            .iter()
            .filter(|(dx, dy)| {
                let nx = (x as isize + dx + w) % w;
                let ny = (y as isize + dy + h) % h;
                self.get(nx as usize, ny as usize)
            })
            .count() as u8
    }

    pub fn population(&self) -> usize {
        self.cells.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|w| *w == 0)
    }

    /// Alive coordinates in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.get(x, y))
    }
}
