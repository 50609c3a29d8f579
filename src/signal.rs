//! Periodic signal synthesis
//!
//! Effects describe their motion as sums and products of sine/cosine
//! oscillators. Each oscillator advances with time and carries a per-LED
//! phase offset proportional to the LED index.

/// A single periodic component `f(rate * t + spread * i)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Angular speed in radians per second
    pub rate: f32,
    /// Phase offset per LED index, in radians
    pub spread: f32,
}

impl Oscillator {
    /// Oscillator that moves the whole strip in lockstep
    pub const fn uniform(rate: f32) -> Self {
        Self { rate, spread: 0.0 }
    }

    pub const fn new(rate: f32, spread: f32) -> Self {
        Self { rate, spread }
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn phase(self, seconds: f32, index: usize) -> f32 {
        seconds * self.rate + index as f32 * self.spread
    }

    /// Sine of the oscillator phase, in -1.0..=1.0
    #[inline]
    pub fn sin(self, seconds: f32, index: usize) -> f32 {
        libm::sinf(self.phase(seconds, index))
    }

    /// Cosine of the oscillator phase, in -1.0..=1.0
    #[inline]
    pub fn cos(self, seconds: f32, index: usize) -> f32 {
        libm::cosf(self.phase(seconds, index))
    }
}

/// Sine and cosine components summed around a resting level
///
/// `sin(a) * sine_amplitude + cos(b) * cosine_amplitude + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interference {
    pub sine: Oscillator,
    pub sine_amplitude: f32,
    pub cosine: Oscillator,
    pub cosine_amplitude: f32,
    pub offset: f32,
}

impl Interference {
    #[inline]
    pub fn sample(&self, seconds: f32, index: usize) -> f32 {
        self.sine.sin(seconds, index) * self.sine_amplitude
            + self.cosine.cos(seconds, index) * self.cosine_amplitude
            + self.offset
    }
}

/// Map a -1.0..=1.0 wave into `offset +/- amplitude`
#[inline]
pub fn bias(wave: f32, amplitude: f32, offset: f32) -> f32 {
    wave * amplitude + offset
}

/// Position of `seconds * rate` inside a repeating window of `period`
#[inline]
pub fn sawtooth(seconds: f32, rate: f32, period: f32) -> f32 {
    libm::fmodf(seconds * rate, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_ignores_index() {
        let osc = Oscillator::uniform(4.0);
        assert_eq!(osc.sin(1.25, 0).to_bits(), osc.sin(1.25, 77).to_bits());
    }

    #[test]
    fn test_phase_at_origin() {
        let osc = Oscillator::new(3.0, 0.2);
        assert_eq!(osc.sin(0.0, 0), 0.0);
        assert_eq!(osc.cos(0.0, 0), 1.0);
    }

    #[test]
    fn test_bias() {
        assert_eq!(bias(0.0, 0.5, 0.5), 0.5);
        assert_eq!(bias(1.0, 0.5, 0.5), 1.0);
        assert_eq!(bias(-1.0, 0.5, 0.5), 0.0);
    }

    #[test]
    fn test_sawtooth_wraps() {
        assert_eq!(sawtooth(0.5, 3.0, 2.0), 1.5);
        assert_eq!(sawtooth(1.0, 3.0, 2.0), 1.0);
    }
}
