use crate::color::Rgb;
use crate::config::TableConfig;
use crate::effect::{EffectId, EffectSlot};
use crate::output::{OutputDriver, OutputError};
use crate::strip::LedStrip;

/// Renderer - owns the LED buffer and the current mood
///
/// `N` is the number of LEDs in the physical chain.
#[derive(Debug, Clone)]
pub struct Renderer<const N: usize> {
    strip: LedStrip<N>,
    effect_id: EffectId,
    effect: EffectSlot,
}

impl<const N: usize> Renderer<N> {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            strip: LedStrip::new(config.bounds),
            effect_id: config.effect,
            effect: config.effect.to_slot(),
        }
    }

    /// Select the effect for a raw id (usually a key code)
    ///
    /// Unknown ids select [`EffectId::DEFAULT`]. Returns the effect now active.
    pub fn select(&mut self, raw: u8) -> EffectId {
        let id = EffectId::resolve(raw);
        self.set_effect(id);
        id
    }

    /// Set new effect by id
    pub fn set_effect(&mut self, id: EffectId) {
        if id == self.effect_id {
            return;
        }
        self.effect_id = id;
        self.effect = id.to_slot();
    }

    /// Currently selected effect
    pub const fn effect_id(&self) -> EffectId {
        self.effect_id
    }

    /// Render one frame and return the whole physical buffer
    pub fn render(&mut self, seconds: f32) -> &[Rgb] {
        self.effect.render(seconds, &mut self.strip);
        self.strip.physical()
    }

    /// Transmit the last rendered frame
    pub fn flush<O: OutputDriver>(&self, output: &mut O) -> Result<(), OutputError> {
        self.strip.flush(output)
    }

    pub const fn strip(&self) -> &LedStrip<N> {
        &self.strip
    }
}
