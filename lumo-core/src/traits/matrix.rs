//! Light-matrix collaborator trait

use smart_leds::RGB8;

/// Trait for the addressable light-matrix
///
/// The physical device is a shift-register style serial chain with no
/// addressing: position is implied by call order. The `index` mirrors
/// the emission order (0..24 for a full repaint) so that buffer-style
/// sinks can store pixels without counting calls themselves.
pub trait PixelSink {
    /// Emit one pixel-color command
    fn set_pixel(&mut self, index: u8, color: RGB8);
}
