//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations and function
//! pointers. Every effect is a pure function of LED index and elapsed
//! seconds: rendering the same time twice yields the same frame.

mod color_wave;
mod crystal;
mod flicker;
mod lightning;
mod pulse;
mod static_color;
mod wave;

pub use color_wave::ColorWaveEffect;
pub use crystal::CrystalEffect;
pub use flicker::{FlickerEffect, FlickerVariant};
pub use lightning::LightningEffect;
pub use pulse::{PulseEffect, PulseVariant};
pub use static_color::StaticColorEffect;
pub use wave::{WaveEffect, WaveVariant};

use crate::color::{Rgb, rgb_from_u32};
use crate::strip::LogicalLeds;

const EFFECT_NAME_DUNGEON: &str = "dungeon";
const EFFECT_NAME_COMBAT: &str = "combat";
const EFFECT_NAME_TAVERN: &str = "tavern";
const EFFECT_NAME_DARKNESS: &str = "darkness";
const EFFECT_NAME_FOREST: &str = "forest";
const EFFECT_NAME_STEALTH: &str = "stealth";
const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_LIGHTNING: &str = "lightning";
const EFFECT_NAME_DESERT: &str = "desert";
const EFFECT_NAME_CAVE: &str = "cave";
const EFFECT_NAME_HEALING: &str = "healing";
const EFFECT_NAME_MAGIC: &str = "magic";
const EFFECT_NAME_CITY: &str = "city";
const EFFECT_NAME_OCEAN: &str = "ocean";
const EFFECT_NAME_COLOR_WAVE: &str = "color_wave";

const EFFECT_ID_DUNGEON: u8 = 0;
const EFFECT_ID_COMBAT: u8 = 1;
const EFFECT_ID_TAVERN: u8 = 2;
const EFFECT_ID_DARKNESS: u8 = 3;
const EFFECT_ID_FOREST: u8 = 4;
const EFFECT_ID_STEALTH: u8 = 5;
const EFFECT_ID_FIRE: u8 = 6;
const EFFECT_ID_LIGHTNING: u8 = 7;
const EFFECT_ID_DESERT: u8 = 8;
const EFFECT_ID_CAVE: u8 = 9;
const EFFECT_ID_HEALING: u8 = 10;
const EFFECT_ID_MAGIC: u8 = 11;
const EFFECT_ID_CITY: u8 = 12;
const EFFECT_ID_OCEAN: u8 = 13;
const EFFECT_ID_COLOR_WAVE: u8 = 14;

// Calm washes
const DARKNESS_COLOR: Rgb = rgb_from_u32(0x0005_000A); // Very dim purple edge light
const STEALTH_COLOR: Rgb = rgb_from_u32(0x0000_0519); // Very dim blue
const CITY_COLOR: Rgb = rgb_from_u32(0x00F0_F0FF); // Clean bright white

pub trait Effect {
    /// Color of a single LED
    ///
    /// `count` is the number of LEDs being rendered, for effects that are
    /// shaped around the strip center.
    fn color_at(&self, index: usize, count: usize, seconds: f32) -> Rgb;

    /// Render a single frame into every logical LED
    fn render<L: LogicalLeds + ?Sized>(&self, seconds: f32, leds: &mut L) {
        let count = leds.led_count();
        for index in 0..count {
            leds.write_led(index, self.color_at(index, count, seconds));
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Constant color wash
    Static(StaticColorEffect),
    /// Whole-strip breathing pulse
    Pulse(PulseEffect),
    /// Flame-like per-LED flicker
    Flicker(FlickerEffect),
    /// Two interfering waves travelling along the strip
    Wave(WaveEffect),
    /// Dark sky with periodic white flashes
    Lightning(LightningEffect),
    /// Dim stone with sparse crystal glints
    Crystal(CrystalEffect),
    /// Full hue sweep
    ColorWave(ColorWaveEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Dungeon = EFFECT_ID_DUNGEON,
    Combat = EFFECT_ID_COMBAT,
    Tavern = EFFECT_ID_TAVERN,
    Darkness = EFFECT_ID_DARKNESS,
    Forest = EFFECT_ID_FOREST,
    Stealth = EFFECT_ID_STEALTH,
    Fire = EFFECT_ID_FIRE,
    Lightning = EFFECT_ID_LIGHTNING,
    Desert = EFFECT_ID_DESERT,
    Cave = EFFECT_ID_CAVE,
    Healing = EFFECT_ID_HEALING,
    Magic = EFFECT_ID_MAGIC,
    City = EFFECT_ID_CITY,
    Ocean = EFFECT_ID_OCEAN,
    ColorWave = EFFECT_ID_COLOR_WAVE,
}

impl Default for EffectSlot {
    fn default() -> Self {
        EffectId::DEFAULT.to_slot()
    }
}

impl Default for EffectId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl EffectId {
    /// Effect used for every id without a table entry
    pub const DEFAULT: Self = Self::ColorWave;

    /// Every effect, in id order
    pub const ALL: [Self; 15] = [
        Self::Dungeon,
        Self::Combat,
        Self::Tavern,
        Self::Darkness,
        Self::Forest,
        Self::Stealth,
        Self::Fire,
        Self::Lightning,
        Self::Desert,
        Self::Cave,
        Self::Healing,
        Self::Magic,
        Self::City,
        Self::Ocean,
        Self::ColorWave,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_DUNGEON => Self::Dungeon,
            EFFECT_ID_COMBAT => Self::Combat,
            EFFECT_ID_TAVERN => Self::Tavern,
            EFFECT_ID_DARKNESS => Self::Darkness,
            EFFECT_ID_FOREST => Self::Forest,
            EFFECT_ID_STEALTH => Self::Stealth,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_LIGHTNING => Self::Lightning,
            EFFECT_ID_DESERT => Self::Desert,
            EFFECT_ID_CAVE => Self::Cave,
            EFFECT_ID_HEALING => Self::Healing,
            EFFECT_ID_MAGIC => Self::Magic,
            EFFECT_ID_CITY => Self::City,
            EFFECT_ID_OCEAN => Self::Ocean,
            EFFECT_ID_COLOR_WAVE => Self::ColorWave,
            _ => return None,
        })
    }

    /// Like [`from_raw`](Self::from_raw), but unknown ids fall back to
    /// [`EffectId::DEFAULT`]
    pub fn resolve(value: u8) -> Self {
        Self::from_raw(value).unwrap_or(Self::DEFAULT)
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn to_slot(self) -> EffectSlot {
        match self {
            Self::Dungeon => EffectSlot::Flicker(FlickerEffect::new(FlickerVariant::Torch)),
            Self::Combat => EffectSlot::Pulse(PulseEffect::new(PulseVariant::Combat)),
            Self::Tavern => EffectSlot::Flicker(FlickerEffect::new(FlickerVariant::Hearth)),
            Self::Darkness => EffectSlot::Static(StaticColorEffect::new(DARKNESS_COLOR)),
            Self::Forest => EffectSlot::Wave(WaveEffect::new(WaveVariant::Forest)),
            Self::Stealth => EffectSlot::Static(StaticColorEffect::new(STEALTH_COLOR)),
            Self::Fire => EffectSlot::Flicker(FlickerEffect::new(FlickerVariant::Fire)),
            Self::Lightning => EffectSlot::Lightning(LightningEffect::new()),
            Self::Desert => EffectSlot::Flicker(FlickerEffect::new(FlickerVariant::Shimmer)),
            Self::Cave => EffectSlot::Crystal(CrystalEffect::new()),
            Self::Healing => EffectSlot::Pulse(PulseEffect::new(PulseVariant::Healing)),
            Self::Magic => EffectSlot::Wave(WaveEffect::new(WaveVariant::Arcane)),
            Self::City => EffectSlot::Static(StaticColorEffect::new(CITY_COLOR)),
            Self::Ocean => EffectSlot::Wave(WaveEffect::new(WaveVariant::Ocean)),
            Self::ColorWave => EffectSlot::ColorWave(ColorWaveEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dungeon => EFFECT_NAME_DUNGEON,
            Self::Combat => EFFECT_NAME_COMBAT,
            Self::Tavern => EFFECT_NAME_TAVERN,
            Self::Darkness => EFFECT_NAME_DARKNESS,
            Self::Forest => EFFECT_NAME_FOREST,
            Self::Stealth => EFFECT_NAME_STEALTH,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::Lightning => EFFECT_NAME_LIGHTNING,
            Self::Desert => EFFECT_NAME_DESERT,
            Self::Cave => EFFECT_NAME_CAVE,
            Self::Healing => EFFECT_NAME_HEALING,
            Self::Magic => EFFECT_NAME_MAGIC,
            Self::City => EFFECT_NAME_CITY,
            Self::Ocean => EFFECT_NAME_OCEAN,
            Self::ColorWave => EFFECT_NAME_COLOR_WAVE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_DUNGEON => Some(Self::Dungeon),
            EFFECT_NAME_COMBAT => Some(Self::Combat),
            EFFECT_NAME_TAVERN => Some(Self::Tavern),
            EFFECT_NAME_DARKNESS => Some(Self::Darkness),
            EFFECT_NAME_FOREST => Some(Self::Forest),
            EFFECT_NAME_STEALTH => Some(Self::Stealth),
            EFFECT_NAME_FIRE => Some(Self::Fire),
            EFFECT_NAME_LIGHTNING => Some(Self::Lightning),
            EFFECT_NAME_DESERT => Some(Self::Desert),
            EFFECT_NAME_CAVE => Some(Self::Cave),
            EFFECT_NAME_HEALING => Some(Self::Healing),
            EFFECT_NAME_MAGIC => Some(Self::Magic),
            EFFECT_NAME_CITY => Some(Self::City),
            EFFECT_NAME_OCEAN => Some(Self::Ocean),
            EFFECT_NAME_COLOR_WAVE => Some(Self::ColorWave),
            _ => None,
        }
    }
}

/// Look up the effect bound to a raw id
///
/// Total over `u8`: ids without a table entry render [`EffectId::DEFAULT`].
pub fn resolve(value: u8) -> EffectSlot {
    EffectId::resolve(value).to_slot()
}

impl EffectSlot {
    /// Color of a single LED for the current effect
    pub fn color_at(&self, index: usize, count: usize, seconds: f32) -> Rgb {
        match self {
            Self::Static(effect) => effect.color_at(index, count, seconds),
            Self::Pulse(effect) => effect.color_at(index, count, seconds),
            Self::Flicker(effect) => effect.color_at(index, count, seconds),
            Self::Wave(effect) => effect.color_at(index, count, seconds),
            Self::Lightning(effect) => effect.color_at(index, count, seconds),
            Self::Crystal(effect) => effect.color_at(index, count, seconds),
            Self::ColorWave(effect) => effect.color_at(index, count, seconds),
        }
    }

    /// Render the current effect
    pub fn render<L: LogicalLeds + ?Sized>(&self, seconds: f32, leds: &mut L) {
        match self {
            Self::Static(effect) => effect.render(seconds, leds),
            Self::Pulse(effect) => effect.render(seconds, leds),
            Self::Flicker(effect) => effect.render(seconds, leds),
            Self::Wave(effect) => effect.render(seconds, leds),
            Self::Lightning(effect) => effect.render(seconds, leds),
            Self::Crystal(effect) => effect.render(seconds, leds),
            Self::ColorWave(effect) => effect.render(seconds, leds),
        }
    }
}
