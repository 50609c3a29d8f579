//! Storm effect
//!
//! A dark purple-gray sky lit by two short full-strip flashes per cycle.

use super::Effect;
use crate::{color::Rgb, signal::sawtooth};

const STRIKE_RATE: f32 = 3.0;
const STRIKE_CYCLE: f32 = 2.0;

/// Open intervals inside one cycle during which the strip flashes
const FLASH_WINDOWS: [(f32, f32); 2] = [(1.8, 1.95), (0.3, 0.35)];

const FLASH_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
const SKY_COLOR: Rgb = Rgb {
    r: 20,
    g: 10,
    b: 40,
};

#[derive(Debug, Clone, Default)]
pub struct LightningEffect;

impl LightningEffect {
    pub const fn new() -> Self {
        Self
    }

    /// Whether the strip is inside a flash at `seconds`
    pub fn is_flashing(seconds: f32) -> bool {
        let position = sawtooth(seconds, STRIKE_RATE, STRIKE_CYCLE);
        FLASH_WINDOWS
            .iter()
            .any(|&(from, to)| position > from && position < to)
    }
}

impl Effect for LightningEffect {
    fn color_at(&self, _index: usize, _count: usize, seconds: f32) -> Rgb {
        if Self::is_flashing(seconds) {
            FLASH_COLOR
        } else {
            SKY_COLOR
        }
    }
}
