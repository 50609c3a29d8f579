//! Logical LED buffer
//!
//! Physical strips often have dead or hidden cells at either end. Effects
//! only ever see the logical window; the strip keeps the full physical
//! array and transmits all of it on flush.

use crate::bounds::RenderingBounds;
use crate::color::Rgb;
use crate::output::{OutputDriver, OutputError};

/// Write access to a run of logically addressed LEDs
pub trait LogicalLeds {
    /// Number of addressable logical LEDs
    fn led_count(&self) -> usize;

    /// Set a logical LED. Indices outside `0..led_count()` are ignored.
    fn write_led(&mut self, index: usize, color: Rgb);
}

/// Physical LED buffer with a logical rendering window
///
/// `N` is the number of LEDs in the physical chain.
#[derive(Debug, Clone)]
pub struct LedStrip<const N: usize> {
    leds: [Rgb; N],
    bounds: RenderingBounds,
}

impl<const N: usize> LedStrip<N> {
    /// Create a black strip
    ///
    /// Bounds reaching past the physical chain are shrunk to fit.
    pub fn new(bounds: RenderingBounds) -> Self {
        Self {
            leds: [Rgb::default(); N],
            bounds: bounds.clamped(N),
        }
    }

    /// Logical window in use
    pub const fn bounds(&self) -> RenderingBounds {
        self.bounds
    }

    /// Read a logical LED
    pub fn get(&self, index: usize) -> Option<Rgb> {
        let physical = self.bounds.physical_index(index)?;
        self.leds.get(physical).copied()
    }

    /// Whole physical array, including cells outside the window
    pub const fn physical(&self) -> &[Rgb; N] {
        &self.leds
    }

    /// Transmit the whole physical array
    pub fn flush<O: OutputDriver>(&self, output: &mut O) -> Result<(), OutputError> {
        output.write(&self.leds)
    }
}

impl<const N: usize> LogicalLeds for LedStrip<N> {
    fn led_count(&self) -> usize {
        self.bounds.count()
    }

    fn write_led(&mut self, index: usize, color: Rgb) {
        let Some(physical) = self.bounds.physical_index(index) else {
            return;
        };
        if let Some(led) = self.leds.get_mut(physical) {
            *led = color;
        }
    }
}

impl LogicalLeds for [Rgb] {
    fn led_count(&self) -> usize {
        self.len()
    }

    fn write_led(&mut self, index: usize, color: Rgb) {
        if let Some(led) = self.get_mut(index) {
            *led = color;
        }
    }
}
