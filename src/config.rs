//! Compile-time tunables for both animations. The defaults match a 128×128
//! surface.

use smart_leds::RGB8;

use crate::color;
use crate::grid::{MAX_HEIGHT, MAX_WIDTH, SEED_THRESHOLD};

pub const LIFE_FRAME_DELAY_MS: u64 = 100;
pub const MAX_GENERATIONS: u32 = 150;
pub const RAIN_FRAME_DELAY_MS: u64 = 25;
/// Drop count of the default rain.
pub const NUM_DROPS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Seed draws in `[0, 100]` above this make a cell alive.
    pub seed_threshold: i32,
    /// Re-seed once this many generations have passed. `None` keeps a single
    /// run going forever.
    pub max_generations: Option<u32>,
    pub frame_delay_ms: u64,
    pub alive_color: RGB8,
}

impl LifeConfig {
    pub const DEFAULT: LifeConfig = LifeConfig {
        width: MAX_WIDTH,
        height: MAX_HEIGHT,
        seed_threshold: SEED_THRESHOLD,
        max_generations: Some(MAX_GENERATIONS),
        frame_delay_ms: LIFE_FRAME_DELAY_MS,
        alive_color: color::WHITE,
    };
}

impl Default for LifeConfig {
    fn default() -> Self {
        LifeConfig::DEFAULT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RainConfig {
    pub width: i32,
    pub height: i32,
    pub frame_delay_ms: u64,
    pub color: RGB8,
}

impl RainConfig {
    pub const DEFAULT: RainConfig = RainConfig {
        width: MAX_WIDTH as i32,
        height: MAX_HEIGHT as i32,
        frame_delay_ms: RAIN_FRAME_DELAY_MS,
        color: color::GREEN,
    };
}

impl Default for RainConfig {
    fn default() -> Self {
        RainConfig::DEFAULT
    }
}
