//! Generative animations for LED matrix panels: Conway's Game of Life on a
//! torus and a falling-rain particle effect.
//!
//! Everything here is hardware independent. Animations draw onto a
//! [`DisplaySurface`](display::DisplaySurface) and take their randomness from a
//! [`RandomSource`](random::RandomSource), so the same code runs on the
//! firmware and in host tests.
#![cfg_attr(target_os = "none", no_std)]

// must come first so the logging macros are visible in the modules below
mod fmt;

pub mod app;
pub mod automaton;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod grid;
pub mod random;

pub use error::{Error, Result};
pub use smart_leds::RGB8;

pub mod prelude {
    pub use super::{
        app::{self, App},
        automaton::{AutomatonEngine, Rule},
        color,
        config::{LifeConfig, RainConfig},
        display::{DisplaySurface, FrameBuffer},
        grid::{Grid, MAX_HEIGHT, MAX_WIDTH},
        random::RandomSource,
        Error, RGB8,
    };
}
