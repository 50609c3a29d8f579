//! Elapsed time since the last reset
//!
//! Hardware tick counters are free-running and wrap. [`Clock`] subtracts
//! readings modulo the counter range, so a single wrap between `start` and
//! a read is invisible to callers.

use embassy_time::{Duration, Instant};

use crate::config;

/// Free-running hardware tick counter
pub trait TickSource {
    /// Counter frequency
    const TICKS_PER_SECOND: u32;

    /// Largest value the counter reports before wrapping to zero
    const MAX_TICKS: u32 = u32::MAX;

    /// Read the counter
    fn now_ticks(&mut self) -> u32;
}

/// 32-bit microsecond counter derived from the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrosTicks;

impl TickSource for MicrosTicks {
    const TICKS_PER_SECOND: u32 = config::TIMER_TICKS_PER_SECOND;

    #[allow(clippy::cast_possible_truncation)]
    fn now_ticks(&mut self) -> u32 {
        // Keep the low 32 bits: wraps every ~71.6 minutes like a board timer.
        Instant::now().as_micros() as u32
    }
}

/// Stopwatch over a [`TickSource`]
#[derive(Debug, Clone)]
pub struct Clock<T: TickSource> {
    source: T,
    start_ticks: u32,
}

impl<T: TickSource> Clock<T> {
    /// Create a clock and start it
    pub fn new(mut source: T) -> Self {
        let start_ticks = source.now_ticks();
        Self {
            source,
            start_ticks,
        }
    }

    /// Reset the reference point to now
    pub fn start(&mut self) {
        self.start_ticks = self.source.now_ticks();
    }

    /// Ticks since the last [`start`](Self::start)
    ///
    /// Correct across at most one counter wrap.
    pub fn elapsed_ticks(&mut self) -> u32 {
        let now = self.source.now_ticks();
        if now >= self.start_ticks {
            now - self.start_ticks
        } else {
            T::MAX_TICKS
                .saturating_sub(self.start_ticks)
                .saturating_add(now)
                .saturating_add(1)
        }
    }

    /// Seconds since the last [`start`](Self::start)
    pub fn elapsed_seconds(&mut self) -> f32 {
        Self::seconds_from_ticks(self.elapsed_ticks())
    }

    /// Time since the last [`start`](Self::start)
    pub fn elapsed(&mut self) -> Duration {
        Self::duration_from_ticks(self.elapsed_ticks())
    }

    /// Convert a tick count of this clock's source into seconds
    #[allow(clippy::cast_possible_truncation)]
    pub fn seconds_from_ticks(ticks: u32) -> f32 {
        (f64::from(ticks) / f64::from(T::TICKS_PER_SECOND.max(1))) as f32
    }

    /// Convert a tick count of this clock's source into a [`Duration`]
    pub fn duration_from_ticks(ticks: u32) -> Duration {
        let rate = u64::from(T::TICKS_PER_SECOND.max(1));
        Duration::from_micros(u64::from(ticks) * 1_000_000 / rate)
    }

    /// Get a mutable reference to the tick source.
    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }
}
