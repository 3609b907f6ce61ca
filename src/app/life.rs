//! Conway's Game of Life on a torus, re-seeded after a bounded number of
//! generations so the panel never settles into a dead or static board.

use crate::{
    app::App,
    automaton::AutomatonEngine,
    config::LifeConfig,
    display::DisplaySurface,
    error::Result,
    grid::Grid,
    random::RandomSource,
};

pub struct Life<R> {
    rng: R,
    engine: AutomatonEngine,
    config: LifeConfig,
    grid: Grid,
    generation: u32,
    runs: u32,
}

/// Seed the first run. Fails if the configured size does not fit a [`Grid`].
pub fn new<R: RandomSource>(rng: R, config: LifeConfig) -> Result<Life<R>> {
    Life::with_engine(rng, config, AutomatonEngine::default())
}

impl<R: RandomSource> Life<R> {
    pub fn with_engine(mut rng: R, config: LifeConfig, engine: AutomatonEngine) -> Result<Self> {
        let grid = Grid::seed_random(&mut rng, config.width, config.height, config.seed_threshold)?;
        info!(
            "life: run 1 seeded {}x{}, {} alive",
            config.width,
            config.height,
            grid.population()
        );
        Ok(Life {
            rng,
            engine,
            config,
            grid,
            generation: 0,
            runs: 1,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations evolved since the current run was seeded.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of runs seeded so far, including the current one.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Start a new run from a fresh random board.
    pub fn reseed(&mut self) {
        self.grid.fill_random(&mut self.rng, self.config.seed_threshold);
        self.generation = 0;
        self.runs = self.runs.wrapping_add(1);
        info!(
            "life: run {} seeded, {} alive",
            self.runs,
            self.grid.population()
        );
    }

    /// Evolve one generation without drawing.
    pub fn evolve(&mut self) {
        let was_empty = self.grid.is_empty();
        self.grid = self.engine.step(&self.grid);
        self.generation = self.generation.saturating_add(1);
        if self.grid.is_empty() && !was_empty {
            debug!("life: extinct at generation {}", self.generation);
        }

        if let Some(max) = self.config.max_generations {
            if self.generation > max {
                debug!(
                    "life: run {} ended after {} generations, {} alive",
                    self.runs,
                    self.generation,
                    self.grid.population()
                );
                self.reseed();
            }
        }
    }

    pub fn render<D: DisplaySurface>(&self, surface: &mut D) {
        surface.clear();
        for (x, y) in self.grid.iter_alive() {
            surface.set_pixel_color(x as i32, y as i32, self.config.alive_color);
        }
        surface.present();
    }
}

impl<R: RandomSource> App for Life<R> {
    fn tick<D: DisplaySurface>(&mut self, surface: &mut D) {
        self.render(surface);
        self.evolve();
    }

    fn frame_delay_ms(&self) -> u64 {
        self.config.frame_delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::config::MAX_GENERATIONS;
    use crate::display::FrameBuffer;
    use crate::error::Error;
    use crate::random::small_rng;

    fn small_config() -> LifeConfig {
        LifeConfig {
            width: 16,
            height: 16,
            ..LifeConfig::DEFAULT
        }
    }

    #[test]
    fn rejects_oversized_board() {
        let config = LifeConfig {
            width: 200,
            ..LifeConfig::DEFAULT
        };
        assert!(matches!(
            new(small_rng(1), config),
            Err(Error::InvalidDimensions { width: 200, .. })
        ));
    }

    #[test]
    fn tick_renders_then_evolves() {
        let mut life = new(small_rng(11), small_config()).unwrap();
        let mut fb = FrameBuffer::<16, 16>::new(color::WHITE);
        let before = life.grid().clone();

        life.tick(&mut fb);

        assert_eq!(fb.frames(), 1);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(fb.is_on(x, y), before.get(x as usize, y as usize));
            }
        }
        assert_eq!(life.generation(), 1);
        assert_eq!(life.grid(), &AutomatonEngine::default().step(&before));
    }

    #[test]
    fn render_clears_previous_frame() {
        let mut life = new(small_rng(2), small_config()).unwrap();
        let mut fb = FrameBuffer::<16, 16>::new(color::WHITE);
        for _ in 0..5 {
            life.tick(&mut fb);
        }
        life.render(&mut fb);
        let lit = (0..16)
            .flat_map(|y| (0..16).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.is_on(x, y))
            .count();
        assert_eq!(lit, life.grid().population());
    }

    #[test]
    fn reseeds_after_cap() {
        let mut life = new(small_rng(3), small_config()).unwrap();
        let mut fb = FrameBuffer::<16, 16>::new(color::WHITE);

        for _ in 0..MAX_GENERATIONS {
            life.tick(&mut fb);
        }
        assert_eq!(life.generation(), MAX_GENERATIONS);
        assert_eq!(life.runs(), 1);

        let lineage = AutomatonEngine::default().step(life.grid());
        life.tick(&mut fb);
        // 151st evolution exceeds the cap: fresh board, counter back to zero
        assert_eq!(life.generation(), 0);
        assert_eq!(life.runs(), 2);
        assert_ne!(life.grid(), &lineage);

        life.tick(&mut fb);
        assert_eq!(life.generation(), 1);
        assert_eq!(fb.frames(), MAX_GENERATIONS + 2);
    }

    #[test]
    fn unbounded_run_never_reseeds() {
        let config = LifeConfig {
            max_generations: None,
            ..small_config()
        };
        let mut life = new(small_rng(4), config).unwrap();
        let mut fb = FrameBuffer::<16, 16>::new(color::WHITE);
        for _ in 0..400 {
            life.tick(&mut fb);
        }
        assert_eq!(life.generation(), 400);
        assert_eq!(life.runs(), 1);
    }

    #[test]
    fn same_seed_same_runs() {
        let mut a = new(small_rng(77), small_config()).unwrap();
        let mut b = new(small_rng(77), small_config()).unwrap();
        for _ in 0..2 * (MAX_GENERATIONS + 1) {
            a.evolve();
            b.evolve();
            assert_eq!(a.grid(), b.grid());
        }
        assert_eq!(a.runs(), 3);
    }

    #[test]
    fn frame_delay_comes_from_config() {
        let life = new(small_rng(5), small_config()).unwrap();
        assert_eq!(life.frame_delay_ms(), 100);
    }
}
