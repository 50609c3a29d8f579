//! Hue sweep effect
//!
//! The only effect built in HSV space. Hue swings back and forth across the
//! color wheel quickly, with a long wavelength along the strip. This is the
//! fallback for keys without a dedicated mood.

use super::Effect;
use crate::{
    color::{Hsv, Rgb, channel, hsv2rgb},
    signal::{Oscillator, bias},
};

const HUE_SWING: Oscillator = Oscillator::new(32.0, 1.0 / 32.0);

#[derive(Debug, Clone)]
pub struct ColorWaveEffect {
    /// Saturation (0-255)
    saturation: u8,
    /// Brightness value (0-255)
    value: u8,
}

impl Default for ColorWaveEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorWaveEffect {
    pub const fn new() -> Self {
        Self {
            saturation: 255,
            value: 255,
        }
    }

    /// Hue (0-255) of a LED at `seconds`
    pub fn hue_at(index: usize, seconds: f32) -> u8 {
        channel(bias(HUE_SWING.sin(seconds, index), 0.5, 0.5) * 255.0)
    }
}

impl Effect for ColorWaveEffect {
    fn color_at(&self, index: usize, _count: usize, seconds: f32) -> Rgb {
        hsv2rgb(Hsv {
            hue: Self::hue_at(index, seconds),
            sat: self.saturation,
            val: self.value,
        })
    }
}
