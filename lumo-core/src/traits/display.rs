//! Character display collaborator trait

/// Trait for the character-oriented display
///
/// Abstracts the OLED driver (glyph rasterization and framebuffer
/// transfer stay behind this trait). Callers always issue a full
/// `clear` -> draw -> `flush` sequence per render; there is no
/// incremental update path.
pub trait TextDisplay {
    /// Driver-specific communication error
    type Error;

    /// Clear the framebuffer
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw a text run with its top-left corner at pixel (x, y)
    fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), Self::Error>;

    /// Draw a single character at pixel (x, y)
    fn draw_char(&mut self, c: char, x: u8, y: u8) -> Result<(), Self::Error>;

    /// Push the framebuffer to the panel
    fn flush(&mut self) -> Result<(), Self::Error>;
}
