//! Falling drops with fading tails. Drops are independent: each one falls at
//! its own speed, goes dormant once its tail has left the bottom edge, and
//! respawns at the top at random.

use crate::{
    app::App,
    color,
    config::{RainConfig, NUM_DROPS},
    display::DisplaySurface,
    random::RandomSource,
};

const HEAD_HEIGHT: i32 = 2;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
struct Raindrop {
    x: i32,
    y: i32,
    width: i32,
    tail_length: i32,
    speed: i32,
    active: bool,
}

pub struct Rain<R, const N: usize = NUM_DROPS> {
    rng: R,
    config: RainConfig,
    drops: [Raindrop; N],
}

pub fn new<R: RandomSource>(rng: R, config: RainConfig) -> Rain<R> {
    Rain::new(rng, config)
}

impl<R: RandomSource, const N: usize> Rain<R, N> {
    pub fn new(mut rng: R, config: RainConfig) -> Self {
        let mut drops = [Raindrop::default(); N];
        for d in drops.iter_mut() {
            *d = Raindrop {
                x: rng.random_int(0, config.width),
                y: 0,
                width: rng.random_int(1, 2),
                tail_length: rng.random_int(20, 80),
                speed: rng.random_int(1, 4),
                active: true,
            };
        }
        Rain { rng, config, drops }
    }

    pub fn active_drops(&self) -> usize {
        self.drops.iter().filter(|d| d.active).count()
    }

    fn draw_drop<D: DisplaySurface>(&self, d: &Raindrop, surface: &mut D) {
        surface.fill_rect(d.x, d.y, d.width, HEAD_HEIGHT, self.config.color);
        let segment = 255 / d.tail_length;
        for j in 0..=d.tail_length {
            let level = (255 - segment * j).clamp(0, 255) as u8;
            surface.fill_rect(
                d.x,
                d.y - j,
                d.width,
                HEAD_HEIGHT,
                color::dim(self.config.color, level),
            );
        }
    }
}

impl<R: RandomSource, const N: usize> App for Rain<R, N> {
    fn tick<D: DisplaySurface>(&mut self, surface: &mut D) {
        surface.clear();
        for i in 0..N {
            let mut d = self.drops[i];
            if !d.active {
                // roughly two respawns in a hundred frames per dormant drop
                if self.rng.random_int(0, N as i32) <= 1 {
                    d.x = self.rng.random_int(0, self.config.width);
                    d.y = 0;
                    d.active = true;
                    trace!("rain: drop {} respawned at x={}", i, d.x);
                }
            } else {
                d.y += d.speed;
                if d.y - d.tail_length >= self.config.height {
                    d.active = false;
                } else {
                    self.draw_drop(&d, surface);
                }
            }
            self.drops[i] = d;
        }
        surface.present();
    }

    fn frame_delay_ms(&self) -> u64 {
        self.config.frame_delay_ms
    }
}
