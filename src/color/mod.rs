use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Convert a float intensity to a channel value
///
/// Truncates toward zero and saturates to 0-255, so signals that overshoot
/// their nominal range clip instead of wrapping.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn channel(value: f32) -> u8 {
    value as u8
}

/// Scale an 8-bit level by a float factor, truncating the result
#[inline]
pub fn scale_level(level: u8, factor: f32) -> u8 {
    channel(f32::from(level) * factor)
}
