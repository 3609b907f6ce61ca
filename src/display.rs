use smart_leds::RGB8;

use crate::color;

/// Something frames can be drawn onto and shown.
///
/// Coordinates outside the surface are clipped silently.
pub trait DisplaySurface {
    fn clear(&mut self);
    fn set_pixel(&mut self, x: i32, y: i32, on: bool);
    /// Hand the finished frame to the output. May complete asynchronously.
    fn present(&mut self);

    fn set_pixel_color(&mut self, x: i32, y: i32, color: RGB8) {
        self.set_pixel(x, y, color != color::BLACK);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: RGB8) {
        for yy in y..y + height {
            for xx in x..x + width {
                self.set_pixel_color(xx, yy, color);
            }
        }
    }
}

/// In-memory `W`×`H` surface of RGB pixels.
#[derive(Clone)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[RGB8; W]; H],
    on_color: RGB8,
    frames: u32,
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    pub const fn new(on_color: RGB8) -> Self {
        FrameBuffer {
            pixels: [[color::BLACK; W]; H],
            on_color,
            frames: 0,
        }
    }

    pub fn set_on_color(&mut self, on_color: RGB8) {
        self.on_color = on_color;
    }

    /// `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<RGB8> {
        let (x, y) = Self::clip(x, y)?;
        Some(self.pixels[y][x])
    }

    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.pixel(x, y).map_or(false, |c| c != color::BLACK)
    }

    /// Number of `present` calls so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Pixels row by row, top-left first.
    pub fn leds(&self) -> impl Iterator<Item = RGB8> + '_ {
        self.pixels.iter().flat_map(|row| row.iter().copied())
    }

    /// Copy the pixels row-major into `out`. Extra entries are left untouched.
    pub fn write_leds(&self, out: &mut [RGB8]) {
        for (o, c) in out.iter_mut().zip(self.leds()) {
            *o = c;
        }
    }

    fn clip(x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x as usize >= W || y as usize >= H {
            return None;
        }
        Some((x as usize, y as usize))
    }
}

impl<const W: usize, const H: usize> DisplaySurface for FrameBuffer<W, H> {
    fn clear(&mut self) {
        for row in self.pixels.iter_mut() {
            row.fill(color::BLACK);
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        // off pixels keep whatever is already drawn
        if on {
            self.set_pixel_color(x, y, self.on_color);
        }
    }

    fn present(&mut self) {
        self.frames = self.frames.wrapping_add(1);
    }

    fn set_pixel_color(&mut self, x: i32, y: i32, color: RGB8) {
        if let Some((x, y)) = Self::clip(x, y) {
            self.pixels[y][x] = color;
        }
    }
}
