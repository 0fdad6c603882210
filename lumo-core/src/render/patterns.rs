//! Digit pattern table
//!
//! Fixed 5x5 illumination masks for the digits 0-9, row 0 topmost.
//! Read-only for the entire process lifetime.

use super::matrix::MATRIX_SIDE;

/// One 5x5 binary illumination mask, row 0 visually topmost
pub type DigitPattern = [[u8; MATRIX_SIDE]; MATRIX_SIDE];

/// Masks for the digits 0-9, indexed by digit value
pub const DIGIT_PATTERNS: [DigitPattern; 10] = [
    // 0
    [
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 0, 0, 0, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
    ],
    // 1
    [
        [0, 0, 1, 0, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 1, 1, 1, 0],
    ],
    // 2
    [
        [1, 1, 1, 1, 1],
        [0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0],
        [1, 1, 1, 1, 1],
    ],
    // 3
    [
        [1, 1, 1, 1, 1],
        [0, 0, 0, 0, 1],
        [0, 1, 1, 1, 1],
        [0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
    ],
    // 4
    [
        [0, 1, 0, 0, 1],
        [1, 0, 0, 1, 0],
        [1, 1, 1, 1, 1],
        [0, 0, 0, 1, 0],
        [0, 1, 0, 0, 0],
    ],
    // 5
    [
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0],
        [1, 1, 1, 1, 1],
        [0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
    ],
    // 6
    [
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0],
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
    ],
    // 7
    [
        [1, 1, 1, 1, 1],
        [0, 0, 0, 0, 1],
        [0, 1, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 1, 0],
    ],
    // 8
    [
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
    ],
    // 9
    [
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
        [0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
    ],
];

/// Look up the mask for a digit
///
/// Returns `None` outside 0-9. A value out of range reaching the
/// matrix path is a contract violation guarded defensively: the
/// render is skipped, nothing else happens.
pub fn pattern_for(digit: u8) -> Option<&'static DigitPattern> {
    DIGIT_PATTERNS.get(digit as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_ten_complete_entries() {
        assert_eq!(DIGIT_PATTERNS.len(), 10);
        for (digit, pattern) in DIGIT_PATTERNS.iter().enumerate() {
            assert_eq!(pattern.len(), 5);
            for row in pattern {
                assert_eq!(row.len(), 5);
                for &cell in row {
                    assert!(cell <= 1, "digit {digit} has a cell outside 0/1");
                }
            }
        }
    }

    #[test]
    fn test_pattern_lookup_in_range() {
        for digit in 0..10u8 {
            assert_eq!(pattern_for(digit), Some(&DIGIT_PATTERNS[digit as usize]));
        }
    }

    #[test]
    fn test_pattern_lookup_out_of_range() {
        assert_eq!(pattern_for(10), None);
        assert_eq!(pattern_for(255), None);
    }

    #[test]
    fn test_digit_shapes_spot_check() {
        // 0 is a ring: hollow center row
        assert_eq!(DIGIT_PATTERNS[0][2], [1, 0, 0, 0, 1]);
        // 7 has a solid top row and a descending diagonal
        assert_eq!(DIGIT_PATTERNS[7][0], [1, 1, 1, 1, 1]);
        assert_eq!(DIGIT_PATTERNS[7][4], [0, 0, 0, 1, 0]);
        // 8 is fully barred top, middle, bottom
        assert_eq!(DIGIT_PATTERNS[8][0], [1, 1, 1, 1, 1]);
        assert_eq!(DIGIT_PATTERNS[8][2], [1, 1, 1, 1, 1]);
        assert_eq!(DIGIT_PATTERNS[8][4], [1, 1, 1, 1, 1]);
    }
}
