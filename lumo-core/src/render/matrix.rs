//! Matrix rendering order
//!
//! Converts a digit mask into the ordered pixel-color commands the
//! light-matrix chain expects. The chain has no addressing, so the
//! emission order IS the physical layout and must not change.

use smart_leds::RGB8;

use super::patterns::DigitPattern;
use crate::traits::matrix::PixelSink;

/// Cells per side of the fixed matrix
pub const MATRIX_SIDE: usize = 5;

/// Pixels in one full repaint
pub const MATRIX_PIXEL_COUNT: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Full-intensity white for a set cell
const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

/// Fully off for a clear cell
const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Paint one complete frame from a digit mask
///
/// Emits exactly 25 commands: storage rows from index 4 down to 0
/// (matching the wiring of the physical chain), columns left to right
/// within each row. Binary on/off only - no brightness scaling, no
/// color selection. Stateless: every call is an independent full
/// repaint.
pub fn render(pattern: &DigitPattern, sink: &mut impl PixelSink) {
    let mut index = 0u8;
    for row in (0..MATRIX_SIDE).rev() {
        for col in 0..MATRIX_SIDE {
            let color = if pattern[row][col] != 0 { WHITE } else { OFF };
            sink.set_pixel(index, color);
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::patterns::DIGIT_PATTERNS;
    use heapless::Vec;

    /// Mock sink recording every command in emission order
    struct RecordingSink {
        commands: Vec<(u8, RGB8), 32>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                commands: Vec::new(),
            }
        }
    }

    impl PixelSink for RecordingSink {
        fn set_pixel(&mut self, index: u8, color: RGB8) {
            self.commands.push((index, color)).unwrap();
        }
    }

    #[test]
    fn test_every_digit_emits_exactly_25_commands() {
        for pattern in &DIGIT_PATTERNS {
            let mut sink = RecordingSink::new();
            render(pattern, &mut sink);
            assert_eq!(sink.commands.len(), MATRIX_PIXEL_COUNT);
        }
    }

    #[test]
    fn test_indices_count_up_in_emission_order() {
        let mut sink = RecordingSink::new();
        render(&DIGIT_PATTERNS[0], &mut sink);
        for (expected, (index, _)) in sink.commands.iter().enumerate() {
            assert_eq!(*index as usize, expected);
        }
    }

    #[test]
    fn test_row_order_is_4_down_to_0_columns_left_to_right() {
        // Asymmetric mask: exactly one set cell at storage (row 1, col 3)
        let mut pattern: DigitPattern = [[0; 5]; 5];
        pattern[1][3] = 1;

        let mut sink = RecordingSink::new();
        render(&pattern, &mut sink);

        // Row 4 goes out first, so row 1 is the fourth emitted row:
        // command index = (4 - row) * 5 + col = 3 * 5 + 3 = 18
        let white = RGB8::new(255, 255, 255);
        for (i, (_, color)) in sink.commands.iter().enumerate() {
            if i == 18 {
                assert_eq!(*color, white);
            } else {
                assert_eq!(*color, RGB8::new(0, 0, 0));
            }
        }
    }

    #[test]
    fn test_digit_7_frame_matches_table_entry() {
        let pattern = &DIGIT_PATTERNS[7];
        let mut sink = RecordingSink::new();
        render(pattern, &mut sink);

        for (i, (_, color)) in sink.commands.iter().enumerate() {
            let row = 4 - i / MATRIX_SIDE;
            let col = i % MATRIX_SIDE;
            let lit = *color == RGB8::new(255, 255, 255);
            assert_eq!(
                lit,
                pattern[row][col] == 1,
                "mismatch at storage ({row}, {col})"
            );
        }

        // Storage row 0 (solid bar of the 7) is the last five commands
        for (_, color) in &sink.commands[20..] {
            assert_eq!(*color, RGB8::new(255, 255, 255));
        }
    }
}
