//! Travelling wave effects
//!
//! A sine and a cosine with different speeds and wavelengths interfere,
//! producing slow organic motion along the strip.

use super::Effect;
use crate::{
    color::{Rgb, channel, scale_level},
    signal::{Interference, Oscillator},
};

// Forest: dappled green light with moving shadows
const FOREST: Interference = Interference {
    sine: Oscillator::new(2.0, 0.4),
    sine_amplitude: 0.3,
    cosine: Oscillator::new(1.5, 0.6),
    cosine_amplitude: 0.2,
    offset: 0.5,
};

// Ocean: blue-green undulation
const OCEAN: Interference = Interference {
    sine: Oscillator::new(3.0, 0.2),
    sine_amplitude: 0.3,
    cosine: Oscillator::new(2.0, 0.15),
    cosine_amplitude: 0.2,
    offset: 0.5,
};

// Arcane: purple sparkles and wisps
const ARCANE: Interference = Interference {
    sine: Oscillator::new(5.0, 1.5),
    sine_amplitude: 0.4,
    cosine: Oscillator::new(7.0, 0.8),
    cosine_amplitude: 0.3,
    offset: 0.3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveVariant {
    Forest,
    Ocean,
    /// Magic
    Arcane,
}

#[derive(Debug, Clone)]
pub struct WaveEffect {
    variant: WaveVariant,
}

impl WaveEffect {
    pub const fn new(variant: WaveVariant) -> Self {
        Self { variant }
    }

    pub const fn variant(&self) -> WaveVariant {
        self.variant
    }
}

impl Effect for WaveEffect {
    fn color_at(&self, index: usize, _count: usize, seconds: f32) -> Rgb {
        match self.variant {
            WaveVariant::Forest => {
                let dapple = FOREST.sample(seconds, index);
                Rgb {
                    r: channel(dapple * 80.0 + 30.0),
                    g: channel(dapple * 150.0 + 50.0),
                    b: 10,
                }
            }
            WaveVariant::Ocean => {
                let wave = OCEAN.sample(seconds, index);
                Rgb {
                    r: 0,
                    g: channel(wave * 120.0 + 60.0),
                    b: channel(wave * 180.0 + 75.0),
                }
            }
            WaveVariant::Arcane => {
                let sparkle = ARCANE.sample(seconds, index);
                let level = channel(sparkle * 180.0 + 75.0);
                Rgb {
                    r: scale_level(level, 0.8),
                    g: scale_level(level, 0.3),
                    b: level,
                }
            }
        }
    }
}
