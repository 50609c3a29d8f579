//! Cave effect
//!
//! Dim cool gray stone. A fast oscillator with a large per-LED phase step
//! pushes individual LEDs past a threshold now and then, which reads as a
//! crystal catching the light.

use super::Effect;
use crate::{
    color::{Rgb, scale_level},
    signal::Oscillator,
};

const GLINT: Oscillator = Oscillator::new(4.0, 2.0);
const GLINT_THRESHOLD: f32 = 0.95;

const STONE_LEVEL: u8 = 40;
const GLINT_LEVEL: u8 = 120;

#[derive(Debug, Clone, Default)]
pub struct CrystalEffect;

impl CrystalEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for CrystalEffect {
    fn color_at(&self, index: usize, _count: usize, seconds: f32) -> Rgb {
        let level = if GLINT.sin(seconds, index) > GLINT_THRESHOLD {
            GLINT_LEVEL
        } else {
            STONE_LEVEL
        };
        Rgb {
            r: scale_level(level, 0.7),
            g: scale_level(level, 0.8),
            b: level,
        }
    }
}
