#![no_std]

#[cfg(feature = "esp32-log")]
macro_rules! log {
    ($($arg:tt)*) => {
        esp_println::println!($($arg)*)
    };
}

#[cfg(not(feature = "esp32-log"))]
macro_rules! log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub mod bounds;
pub mod clock;
pub mod color;
pub mod config;
pub mod effect;
pub mod frame_scheduler;
pub mod keypad;
pub mod output;
pub mod renderer;
pub mod signal;
pub mod strip;

pub use bounds::RenderingBounds;
pub use clock::{Clock, MicrosTicks, TickSource};
pub use config::TableConfig;
pub use effect::{Effect, EffectId, EffectSlot, resolve};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use keypad::{KeySource, KeypadScanner};
pub use output::{OutputDriver, OutputError, SmartLedsOutput};
pub use renderer::Renderer;
pub use strip::{LedStrip, LogicalLeds};

pub use color::{Hsv, Rgb};
pub use embassy_time::Duration;
