//! Frame scheduling and timing utilities.
//!
//! Provides one step of the table's main loop without async/await or
//! platform-specific timers. The caller is responsible for sleeping/waiting
//! between frames.

use embassy_time::Duration;

use crate::clock::{Clock, TickSource};
use crate::config::TableConfig;
use crate::effect::EffectId;
use crate::keypad::KeySource;
use crate::output::{OutputDriver, OutputError};
use crate::renderer::Renderer;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Effect rendered in this frame.
    pub effect: EffectId,
    /// Clock reading used for this frame.
    pub elapsed: Duration,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Every tick:
/// - Scans the keypad and switches effect on a key press
/// - Renders the current effect at the clock's elapsed time
/// - Pushes the frame to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(keypad, clock, driver, &TableConfig::DEFAULT);
///
/// loop {
///     let result = scheduler.tick()?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<K, T, O, const N: usize>
where
    K: KeySource,
    T: TickSource,
    O: OutputDriver,
{
    keys: K,
    clock: Clock<T>,
    output: O,
    renderer: Renderer<N>,
    next_frame: Duration,
    frame_duration: Duration,
}

impl<K, T, O, const N: usize> FrameScheduler<K, T, O, N>
where
    K: KeySource,
    T: TickSource,
    O: OutputDriver,
{
    /// Create a new frame scheduler.
    ///
    /// Frame pacing uses `config.frame_duration`.
    pub fn new(keys: K, clock: Clock<T>, output: O, config: &TableConfig) -> Self {
        Self {
            keys,
            clock,
            output,
            renderer: Renderer::new(config),
            next_frame: Duration::from_millis(0),
            frame_duration: config.frame_duration,
        }
    }

    /// Override the target time between frames.
    #[must_use]
    pub fn with_frame_duration(mut self, frame_duration: Duration) -> Self {
        self.frame_duration = frame_duration;
        self
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Scans for a key and selects its effect
    /// 2. Reads the clock once for both rendering and pacing
    /// 3. Renders the frame and writes it to the output driver
    /// 4. Returns the delay until the next frame
    pub fn tick(&mut self) -> Result<FrameResult, OutputError> {
        if let Some(key) = self.keys.read() {
            let previous = self.renderer.effect_id();
            let effect = self.renderer.select(key);
            if effect != previous {
                log!("[frame] key {} selects {}", key, effect.as_str());
            }
        }

        let ticks = self.clock.elapsed_ticks();
        let now = Clock::<T>::duration_from_ticks(ticks);
        let seconds = Clock::<T>::seconds_from_ticks(ticks);

        // Drift correction: if we've fallen too far behind, or the clock
        // restarted underneath us, reset the schedule to now
        let max_drift = self.frame_duration + self.frame_duration;
        if now > self.next_frame + max_drift || now + self.frame_duration < self.next_frame {
            self.next_frame = now;
        }

        self.renderer.render(seconds);
        self.renderer.flush(&mut self.output)?;

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            effect: self.renderer.effect_id(),
            elapsed: now,
            sleep_duration,
        })
    }

    /// Restart the animation clock from zero.
    pub fn restart_clock(&mut self) {
        self.clock.start();
        self.next_frame = Duration::from_millis(0);
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<N> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<N> {
        &mut self.renderer
    }

    /// Get a mutable reference to the animation clock.
    pub fn clock_mut(&mut self) -> &mut Clock<T> {
        &mut self.clock
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
