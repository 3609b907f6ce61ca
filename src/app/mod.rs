use crate::display::DisplaySurface;

pub mod life;
pub mod rain;

pub trait App {
    /// Draw and present one frame, then advance to the next state.
    fn tick<D: DisplaySurface>(&mut self, surface: &mut D);

    /// Pause the caller should leave between two ticks.
    fn frame_delay_ms(&self) -> u64;
}
