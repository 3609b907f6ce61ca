use crate::error::{Error, Result};
use crate::grid::Grid;

/// Outer-totalistic birth/survival rule over the 8-cell neighborhood.
///
/// Bit `n` of `birth` set means a dead cell with `n` live neighbors becomes
/// alive; bit `n` of `survive` set means a live cell with `n` neighbors stays
/// alive. Everything else is dead in the next generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rule {
    birth: u16,
    survive: u16,
}

impl Rule {
    /// B3/S23
    pub const CONWAY: Rule = Rule::new(&[3], &[2, 3]);
    /// B36/S23
    pub const HIGHLIFE: Rule = Rule::new(&[3, 6], &[2, 3]);

    pub const fn new(birth: &[u8], survive: &[u8]) -> Rule {
        Rule {
            birth: mask(birth),
            survive: mask(survive),
        }
    }

    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let set = if alive { self.survive } else { self.birth };
        neighbors <= 8 && set & (1u16 << neighbors) != 0
    }
}

const fn mask(counts: &[u8]) -> u16 {
    let mut m = 0u16;
    let mut i = 0;
    while i < counts.len() {
        assert!(counts[i] <= 8, "neighbor count above 8");
        m |= 1u16 << counts[i];
        i += 1;
    }
    m
}

impl Default for Rule {
    fn default() -> Self {
        Rule::CONWAY
    }
}

/// Advances a [`Grid`] by one generation.
///
/// The input is never written to: each output cell is computed from the
/// untouched previous generation.
#[derive(Clone, Copy, Default, Debug)]
pub struct AutomatonEngine {
    rule: Rule,
}

impl AutomatonEngine {
    pub fn new(rule: Rule) -> Self {
        AutomatonEngine { rule }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn step(&self, current: &Grid) -> Grid {
        let mut next = current.clone();
        self.fill_next(current, &mut next);
        next
    }

    /// Like [`step`](Self::step) but writes into `next`, which must have the
    /// same dimensions as `current`.
    pub fn step_into(&self, current: &Grid, next: &mut Grid) -> Result<()> {
        if current.dimensions() != next.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: current.dimensions(),
                found: next.dimensions(),
            });
        }
        self.fill_next(current, next);
        Ok(())
    }

    fn fill_next(&self, current: &Grid, next: &mut Grid) {
        for y in 0..current.height() {
            for x in 0..current.width() {
                let neighbors = current.count_live_neighbors(x, y);
                next.set(x, y, self.rule.next_state(current.get(x, y), neighbors));
            }
        }
    }
}
