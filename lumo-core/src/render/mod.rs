//! Output rendering
//!
//! Digit pattern table, matrix rendering order, and the display
//! writer facade.

pub mod matrix;
pub mod patterns;
pub mod writer;

pub use matrix::{render, MATRIX_PIXEL_COUNT, MATRIX_SIDE};
pub use patterns::{pattern_for, DigitPattern, DIGIT_PATTERNS};
pub use writer::DisplayWriter;
