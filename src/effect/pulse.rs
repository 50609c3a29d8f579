//! Breathing pulse effects
//!
//! The whole strip follows one slow oscillation. The healing variant fades
//! toward the strip ends so the glow appears to radiate from the center.

use super::Effect;
use crate::{
    color::{Rgb, channel, scale_level},
    signal::{Oscillator, bias},
};

const COMBAT_PULSE: Oscillator = Oscillator::uniform(4.0);
const HEALING_PULSE: Oscillator = Oscillator::uniform(2.0);

// Level = signal * GAIN + FLOOR keeps the strip from ever going dark.
const LEVEL_GAIN: f32 = 200.0;
const LEVEL_FLOOR: f32 = 55.0;

/// How much the healing glow dims at the strip ends (0.0 = flat)
const HEALING_FALLOFF: f32 = 0.3;
const HEALING_GREEN: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseVariant {
    /// Red alarm pulse
    Combat,
    /// Warm golden pulse radiating from the center
    Healing,
}

#[derive(Debug, Clone)]
pub struct PulseEffect {
    variant: PulseVariant,
}

impl PulseEffect {
    pub const fn new(variant: PulseVariant) -> Self {
        Self { variant }
    }

    pub const fn variant(&self) -> PulseVariant {
        self.variant
    }

    /// Normalized distance from the strip center, 0.0 at the center
    #[allow(clippy::cast_precision_loss)]
    fn distance_from_center(index: usize, count: usize) -> f32 {
        let half = count / 2;
        if half == 0 {
            return 0.0;
        }
        index.abs_diff(half) as f32 / half as f32
    }
}

impl Effect for PulseEffect {
    fn color_at(&self, index: usize, count: usize, seconds: f32) -> Rgb {
        match self.variant {
            PulseVariant::Combat => {
                let pulse = bias(COMBAT_PULSE.sin(seconds, index), 0.5, 0.5);
                Rgb {
                    r: channel(pulse * LEVEL_GAIN + LEVEL_FLOOR),
                    g: 0,
                    b: 0,
                }
            }
            PulseVariant::Healing => {
                let pulse = bias(HEALING_PULSE.sin(seconds, index), 0.3, 0.7);
                let distance = Self::distance_from_center(index, count);
                let radiate = pulse * (1.0 - distance * HEALING_FALLOFF);
                let level = channel(radiate * LEVEL_GAIN + LEVEL_FLOOR);
                Rgb {
                    r: level,
                    g: scale_level(level, HEALING_GREEN),
                    b: 0,
                }
            }
        }
    }
}
