//! Flame-like flicker effects
//!
//! Every LED gets its own phase, so neighbouring cells flicker out of step.
//! The "randomness" is fully deterministic: it comes from fast oscillators
//! with large per-index phase offsets.

use super::Effect;
use crate::{
    color::{Rgb, channel, scale_level},
    signal::{Interference, Oscillator, bias},
};

// Torch: two multiplied flickers on an orange base
const TORCH_SLOW: Oscillator = Oscillator::new(8.0, 0.5);
const TORCH_FAST: Oscillator = Oscillator::new(15.0, 1.2);
const TORCH_GREEN: f32 = 0.4;

// Hearth: gentle warm yellow-orange
const HEARTH: Oscillator = Oscillator::new(3.0, 0.3);

// Fire: overshoots its nominal range on purpose, peaks clip to full red
const FIRE: Interference = Interference {
    sine: Oscillator::new(12.0, 0.8),
    sine_amplitude: 0.4,
    cosine: Oscillator::new(20.0, 1.1),
    cosine_amplitude: 0.3,
    offset: 0.6,
};

// Shimmer: harsh near-white light with heat haze
const SHIMMER: Oscillator = Oscillator::new(6.0, 0.3);
const SHIMMER_GREEN: f32 = 0.9;
const SHIMMER_BLUE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickerVariant {
    /// Orange torch light on dungeon walls
    Torch,
    /// Tavern hearth glow
    Hearth,
    /// Intense open flames
    Fire,
    /// Desert sun with heat shimmer
    Shimmer,
}

#[derive(Debug, Clone)]
pub struct FlickerEffect {
    variant: FlickerVariant,
}

impl FlickerEffect {
    pub const fn new(variant: FlickerVariant) -> Self {
        Self { variant }
    }

    pub const fn variant(&self) -> FlickerVariant {
        self.variant
    }

    fn torch(seconds: f32, index: usize) -> Rgb {
        let flicker = bias(TORCH_SLOW.sin(seconds, index), 0.3, 0.7)
            * bias(TORCH_FAST.sin(seconds, index), 0.2, 0.8);
        let level = channel(flicker * 200.0 + 55.0);
        Rgb {
            r: level,
            g: scale_level(level, TORCH_GREEN),
            b: 0,
        }
    }

    fn hearth(seconds: f32, index: usize) -> Rgb {
        let flicker = bias(HEARTH.sin(seconds, index), 0.15, 0.85);
        Rgb {
            r: channel(flicker * 255.0),
            g: channel(flicker * 180.0),
            b: channel(flicker * 20.0),
        }
    }

    fn fire(seconds: f32, index: usize) -> Rgb {
        let flame = FIRE.sample(seconds, index);
        Rgb {
            r: channel(flame * 255.0),
            g: channel(flame * 100.0),
            b: 0,
        }
    }

    fn shimmer(seconds: f32, index: usize) -> Rgb {
        let shimmer = bias(SHIMMER.sin(seconds, index), 0.1, 0.9);
        let level = channel(shimmer * 255.0);
        Rgb {
            r: level,
            g: scale_level(level, SHIMMER_GREEN),
            b: scale_level(level, SHIMMER_BLUE),
        }
    }
}

impl Effect for FlickerEffect {
    fn color_at(&self, index: usize, _count: usize, seconds: f32) -> Rgb {
        match self.variant {
            FlickerVariant::Torch => Self::torch(seconds, index),
            FlickerVariant::Hearth => Self::hearth(seconds, index),
            FlickerVariant::Fire => Self::fire(seconds, index),
            FlickerVariant::Shimmer => Self::shimmer(seconds, index),
        }
    }
}
