//! In-memory matrix frame
//!
//! Records the ordered pixel commands of one full repaint so that
//! frame-at-a-time LED chain drivers (PIO/DMA WS2812) can ship the
//! whole grid in a single transfer. Slot order equals emission order,
//! preserving the chain's implied addressing.

use smart_leds::RGB8;

use lumo_core::render::MATRIX_PIXEL_COUNT;
use lumo_core::traits::matrix::PixelSink;

/// One 25-pixel frame in emission order
pub struct MatrixFrame {
    pixels: [RGB8; MATRIX_PIXEL_COUNT],
}

impl MatrixFrame {
    /// All pixels off
    pub const fn new() -> Self {
        Self {
            pixels: [RGB8 { r: 0, g: 0, b: 0 }; MATRIX_PIXEL_COUNT],
        }
    }

    /// The recorded frame, ready for a chain driver
    pub fn pixels(&self) -> &[RGB8; MATRIX_PIXEL_COUNT] {
        &self.pixels
    }

    /// Number of pixels currently driven at any non-zero color
    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|p| p.r != 0 || p.g != 0 || p.b != 0)
            .count()
    }
}

// RGB8 carries no Format impl, so log the frame as its lit-pixel count
#[cfg(feature = "defmt")]
impl defmt::Format for MatrixFrame {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "MatrixFrame {{ lit: {=usize}/25 }}", self.lit_count());
    }
}

impl Default for MatrixFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSink for MatrixFrame {
    fn set_pixel(&mut self, index: u8, color: RGB8) {
        // Out-of-range commands are ignored, matching the do-nothing
        // error policy of the render path
        if let Some(slot) = self.pixels.get_mut(index as usize) {
            *slot = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dark() {
        let frame = MatrixFrame::new();
        assert!(frame
            .pixels()
            .iter()
            .all(|&p| p == RGB8::new(0, 0, 0)));
    }

    #[test]
    fn test_records_by_index() {
        let mut frame = MatrixFrame::new();
        let white = RGB8::new(255, 255, 255);
        frame.set_pixel(0, white);
        frame.set_pixel(24, white);
        assert_eq!(frame.pixels()[0], white);
        assert_eq!(frame.pixels()[24], white);
        assert_eq!(frame.pixels()[12], RGB8::new(0, 0, 0));
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut frame = MatrixFrame::new();
        frame.set_pixel(25, RGB8::new(255, 0, 0));
        frame.set_pixel(255, RGB8::new(255, 0, 0));
        assert!(frame
            .pixels()
            .iter()
            .all(|&p| p == RGB8::new(0, 0, 0)));
    }

    #[test]
    fn test_lit_count_tracks_nonzero_pixels() {
        let mut frame = MatrixFrame::new();
        assert_eq!(frame.lit_count(), 0);
        frame.set_pixel(3, RGB8::new(255, 255, 255));
        frame.set_pixel(3, RGB8::new(0, 0, 255));
        frame.set_pixel(17, RGB8::new(255, 255, 255));
        assert_eq!(frame.lit_count(), 2);
        frame.set_pixel(17, RGB8::new(0, 0, 0));
        assert_eq!(frame.lit_count(), 1);
    }

    #[test]
    fn test_full_render_fills_frame_in_order() {
        use lumo_core::render::{patterns::DIGIT_PATTERNS, render};

        let mut frame = MatrixFrame::new();
        render(&DIGIT_PATTERNS[8], &mut frame);

        // Digit 8: storage rows 0, 2, 4 are solid; row 4 is shipped
        // first, so frame slots 0..5 and 10..15 and 20..25 are lit
        let white = RGB8::new(255, 255, 255);
        for (i, &pixel) in frame.pixels().iter().enumerate() {
            let storage_row = 4 - i / 5;
            let expected = DIGIT_PATTERNS[8][storage_row][i % 5] == 1;
            assert_eq!(pixel == white, expected, "slot {i}");
        }
    }
}
