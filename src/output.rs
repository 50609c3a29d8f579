//! LED transmission seam
//!
//! The strip never talks to the bus itself. It hands the whole physical
//! frame to an [`OutputDriver`] which owns the wire protocol.

use smart_leds::SmartLedsWrite;

use crate::color::Rgb;

/// Error returned when a frame could not be pushed to the LED chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    /// The underlying bus rejected or failed the write
    Transmission,
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Receives the full physical frame, including cells outside the
/// logical window.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), OutputError>;
}

/// [`OutputDriver`] over any `smart-leds` writer (RMT, SPI, bit-bang...)
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a mutable reference to the wrapped writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) -> Result<(), OutputError> {
        self.writer
            .write(colors.iter().copied())
            .map_err(|_| OutputError::Transmission)
    }
}
