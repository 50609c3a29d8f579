//! Wiring and defaults of the table installation
//!
//! Topology is fixed at build time; nothing here is read at runtime.

use embassy_time::Duration;

use crate::{bounds::RenderingBounds, effect::EffectId};

/// GPIO driving the LED data line
pub const DATA_PIN: u8 = 3;

/// LEDs in the physical chain
pub const PHYSICAL_LED_COUNT: usize = 90;

/// First physical LED visible around the table edge
pub const FIRST_VALID_LED: usize = 5;

/// Physical LED one past the last visible one
pub const LAST_VALID_LED: usize = 83;

pub const LOGICAL_LED_COUNT: usize = LAST_VALID_LED - FIRST_VALID_LED;

/// Keypad row lines, scanned top to bottom
pub const ROW_PINS: [u8; 4] = [4, 5, 6, 7];

/// Keypad column lines, read left to right
pub const COLUMN_PINS: [u8; 4] = [8, 9, 10, 11];

pub const KEYPAD_ROWS: usize = ROW_PINS.len();
pub const KEYPAD_COLUMNS: usize = COLUMN_PINS.len();

/// Frequency of the free-running board timer (microseconds)
pub const TIMER_TICKS_PER_SECOND: u32 = 1_000_000;

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Configuration for the renderer and frame loop
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Visible window of the physical chain
    pub bounds: RenderingBounds,
    /// Effect shown before the first key press
    pub effect: EffectId,
    /// Target time between frames
    pub frame_duration: Duration,
}

impl TableConfig {
    /// The table as wired: 78 visible LEDs starting at physical LED 5
    pub const DEFAULT: Self = Self {
        bounds: RenderingBounds::between(FIRST_VALID_LED, LAST_VALID_LED),
        effect: EffectId::Dungeon,
        frame_duration: DEFAULT_FRAME_DURATION,
    };
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
