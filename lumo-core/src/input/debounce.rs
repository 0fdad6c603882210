//! Per-button debounce gate
//!
//! Converts raw edge interrupts into validated press events using a
//! two-stage filter: a time window since the last accepted press, then
//! a re-read of the physical line level. No timer or counting state
//! beyond a single timestamp per button.

use crate::traits::indicator::IndicatorId;

/// Minimum elapsed time between two accepted edges on one button
pub const DEBOUNCE_WINDOW_MS: u32 = 200;

/// The two physical buttons on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    A,
    B,
}

impl ButtonId {
    /// The indicator output bound to this button
    pub fn indicator(self) -> IndicatorId {
        match self {
            ButtonId::A => IndicatorId::Green,
            ButtonId::B => IndicatorId::Blue,
        }
    }
}

/// A validated button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    /// Which button produced the press
    pub button: ButtonId,
}

/// Debounce state machine for one button
///
/// Owned exclusively by that button's edge handler; no synchronization
/// is needed beyond word-sized timestamp updates.
pub struct DebounceGate {
    button: ButtonId,
    /// Monotonic milliseconds of the last accepted press (0 at boot)
    last_validated_ms: u32,
}

impl DebounceGate {
    /// Create a gate bound to one button
    pub const fn new(button: ButtonId) -> Self {
        Self {
            button,
            last_validated_ms: 0,
        }
    }

    /// Process one raw edge
    ///
    /// - `now_ms`: current monotonic time in milliseconds
    /// - `line_active`: whether the physical line still reads pressed
    ///   at the moment of validation
    ///
    /// Accepts the edge only when the debounce window has strictly
    /// elapsed (a tie does not count) and the line is still active; a
    /// transient glitch that already cleared produces no event. A
    /// suppressed edge is dropped silently - that is policy, not an
    /// error. Rejected edges do not consume the window: the timestamp
    /// advances only on acceptance.
    pub fn on_edge(&mut self, now_ms: u32, line_active: bool) -> Option<PressEvent> {
        // wrapping_sub keeps the comparison sound across the u32
        // millisecond rollover (~49 days of uptime)
        if now_ms.wrapping_sub(self.last_validated_ms) <= DEBOUNCE_WINDOW_MS {
            return None;
        }
        if !line_active {
            return None;
        }
        self.last_validated_ms = now_ms;
        Some(PressEvent {
            button: self.button,
        })
    }
}
