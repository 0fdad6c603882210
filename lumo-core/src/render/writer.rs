//! Display writer facade
//!
//! Thin facade over the character display: every render is a full
//! clear -> single draw -> flush sequence. The glyph coordinates match
//! the board's fixed layout for each kind of render.

use heapless::String;

use crate::traits::display::TextDisplay;

// Fixed glyph positions on the 128x64 panel
const STATUS_X: u8 = 8;
const STATUS_Y: u8 = 10;
const DIGIT_X: u8 = 40;
const DIGIT_Y: u8 = 25;
const CHAR_X: u8 = 32;
const CHAR_Y: u8 = 20;

/// Facade owning the display collaborator
///
/// Stateless beyond the collaborator's own framebuffer.
pub struct DisplayWriter<D: TextDisplay> {
    pub(crate) display: D,
}

impl<D: TextDisplay> DisplayWriter<D> {
    /// Wrap a display collaborator
    pub fn new(display: D) -> Self {
        Self { display }
    }

    /// Render an indicator status line
    pub fn status(&mut self, line: &str) -> Result<(), D::Error> {
        self.display.clear()?;
        self.display.draw_text(line, STATUS_X, STATUS_Y)?;
        self.display.flush()
    }

    /// Render a received digit as text
    ///
    /// A value outside 0-9 is dropped without touching the panel.
    pub fn digit(&mut self, digit: u8) -> Result<(), D::Error> {
        if digit > 9 {
            return Ok(());
        }
        let mut text: String<2> = String::new();
        let _ = text.push((b'0' + digit) as char);
        self.display.clear()?;
        self.display.draw_text(&text, DIGIT_X, DIGIT_Y)?;
        self.display.flush()
    }

    /// Render a received character verbatim
    pub fn character(&mut self, c: char) -> Result<(), D::Error> {
        self.display.clear()?;
        self.display.draw_char(c, CHAR_X, CHAR_Y)?;
        self.display.flush()
    }
}
