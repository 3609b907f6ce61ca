use smart_leds::RGB8;

pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

/// Scale every channel of `color` by `level / 255`.
pub fn dim(color: RGB8, level: u8) -> RGB8 {
    let scale = |c: u8| ((c as u16 * level as u16) / 255) as u8;
    RGB8::new(scale(color.r), scale(color.g), scale(color.b))
}
