//! Static color fill effect
//!
//! Fills all LEDs with a single solid color. Used for the calm moods.

use super::Effect;
use crate::color::Rgb;

/// Static color effect - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: Rgb,
}

impl StaticColorEffect {
    /// Create a new static color effect
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for StaticColorEffect {
    fn color_at(&self, _index: usize, _count: usize, _seconds: f32) -> Rgb {
        self.color
    }
}
