//! Serial byte classification and dispatch
//!
//! Polled once per main-loop tick: take at most one byte from the
//! transport, classify it, and route it to the display and (for
//! digits) the light-matrix.

use crate::render::{matrix, patterns, writer::DisplayWriter};
use crate::traits::display::TextDisplay;
use crate::traits::matrix::PixelSink;
use crate::traits::serial::SerialLink;

/// A received byte after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialEvent {
    /// ASCII digit, carried as its numeric value 0-9
    Digit(u8),
    /// Any other byte, echoed verbatim
    Character(u8),
}

impl SerialEvent {
    /// Classify one received byte
    ///
    /// Bytes outside the printable range are passed through on the
    /// character path unfiltered - permissive terminal echo, not a
    /// security boundary.
    pub fn classify(byte: u8) -> Self {
        if byte.is_ascii_digit() {
            SerialEvent::Digit(byte - b'0')
        } else {
            SerialEvent::Character(byte)
        }
    }
}

/// Poll the transport and dispatch at most one byte
///
/// Zero-wait: a disconnected link or an empty receive buffer returns
/// `Ok(None)`. A digit renders on the display and then repaints the
/// matrix; any other byte renders on the display only. The returned
/// event lets the caller log and flush frame buffers.
pub fn poll<L, D, S>(
    link: &mut L,
    writer: &mut DisplayWriter<D>,
    sink: &mut S,
) -> Result<Option<SerialEvent>, D::Error>
where
    L: SerialLink,
    D: TextDisplay,
    S: PixelSink,
{
    if !link.is_connected() {
        return Ok(None);
    }
    let Some(byte) = link.try_read_byte() else {
        return Ok(None);
    };

    let event = SerialEvent::classify(byte);
    match event {
        SerialEvent::Digit(digit) => {
            writer.digit(digit)?;
            if let Some(pattern) = patterns::pattern_for(digit) {
                matrix::render(pattern, sink);
            }
        }
        SerialEvent::Character(c) => {
            writer.character(c as char)?;
        }
    }
    Ok(Some(event))
}
