//! Button input handling
//!
//! The interrupt-driven half of the firmware: raw edges pass through
//! the debounce gate, validated presses flip indicator toggles.

pub mod debounce;
pub mod toggle;

pub use debounce::{ButtonId, DebounceGate, PressEvent, DEBOUNCE_WINDOW_MS};
pub use toggle::{RenderIntent, ToggleController};
