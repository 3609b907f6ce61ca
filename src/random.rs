use rand::{rngs::SmallRng, Rng, SeedableRng};
use rand_core::RngCore;

/// Source of uniformly distributed integers, used to seed grids and rain drops.
pub trait RandomSource {
    /// Uniform draw from the inclusive range `[min, max]`. Panics if `min > max`.
    fn random_int(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RngCore> RandomSource for R {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.gen_range(min..=max)
    }
}

/// Small, fast generator seeded from `seed`. On the target the seed comes from
/// the ring oscillator, in tests from a constant.
pub fn small_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
