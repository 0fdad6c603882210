//! Indicator toggle controller
//!
//! Holds the on/off state of both indicators and applies validated
//! press events: flip the bound state, drive the output, and hand the
//! caller a status line to render.

use super::debounce::PressEvent;
use crate::traits::indicator::{IndicatorId, IndicatorOutput};

/// Requested display update after a toggle
///
/// Carries the human-readable status line for the indicator that just
/// changed. The caller renders it as a full clear + draw + flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderIntent {
    /// Status line, e.g. `"Green LED ON"`
    pub line: &'static str,
}

/// On/off state for both indicators
///
/// Mutated only by validated press events; applying a press cannot
/// fail.
pub struct ToggleController {
    green_on: bool,
    blue_on: bool,
}

impl ToggleController {
    /// Both indicators start off
    pub const fn new() -> Self {
        Self {
            green_on: false,
            blue_on: false,
        }
    }

    /// Current state of one indicator
    pub fn is_on(&self, id: IndicatorId) -> bool {
        match id {
            IndicatorId::Green => self.green_on,
            IndicatorId::Blue => self.blue_on,
        }
    }

    /// Apply a validated press: flip the bound indicator, drive its
    /// output, and return the status line to render
    pub fn apply(&mut self, press: PressEvent, outputs: &mut impl IndicatorOutput) -> RenderIntent {
        let id = press.button.indicator();
        let on = match id {
            IndicatorId::Green => {
                self.green_on = !self.green_on;
                self.green_on
            }
            IndicatorId::Blue => {
                self.blue_on = !self.blue_on;
                self.blue_on
            }
        };
        outputs.set(id, on);
        let line = match (id, on) {
            (IndicatorId::Green, true) => "Green LED ON",
            (IndicatorId::Green, false) => "Green LED OFF",
            (IndicatorId::Blue, true) => "Blue LED ON",
            (IndicatorId::Blue, false) => "Blue LED OFF",
        };
        RenderIntent { line }
    }
}

impl Default for ToggleController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::debounce::ButtonId;
    use heapless::Vec;

    /// Mock indicator bank recording every drive call
    struct MockOutputs {
        calls: Vec<(IndicatorId, bool), 8>,
    }

    impl MockOutputs {
        fn new() -> Self {
            Self { calls: Vec::new() }
        }
    }

    impl IndicatorOutput for MockOutputs {
        fn set(&mut self, id: IndicatorId, on: bool) {
            self.calls.push((id, on)).unwrap();
        }
    }

    fn press(button: ButtonId) -> PressEvent {
        PressEvent { button }
    }

    #[test]
    fn test_press_turns_indicator_on() {
        let mut toggles = ToggleController::new();
        let mut outputs = MockOutputs::new();

        let intent = toggles.apply(press(ButtonId::A), &mut outputs);

        assert!(toggles.is_on(IndicatorId::Green));
        assert_eq!(intent.line, "Green LED ON");
        assert_eq!(outputs.calls.as_slice(), &[(IndicatorId::Green, true)]);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut toggles = ToggleController::new();
        let mut outputs = MockOutputs::new();

        toggles.apply(press(ButtonId::B), &mut outputs);
        let intent = toggles.apply(press(ButtonId::B), &mut outputs);

        // Two presses return the indicator to its original state
        assert!(!toggles.is_on(IndicatorId::Blue));
        assert_eq!(intent.line, "Blue LED OFF");
        assert_eq!(
            outputs.calls.as_slice(),
            &[(IndicatorId::Blue, true), (IndicatorId::Blue, false)]
        );
    }

    #[test]
    fn test_indicators_toggle_independently() {
        let mut toggles = ToggleController::new();
        let mut outputs = MockOutputs::new();

        toggles.apply(press(ButtonId::A), &mut outputs);
        toggles.apply(press(ButtonId::B), &mut outputs);
        toggles.apply(press(ButtonId::A), &mut outputs);

        assert!(!toggles.is_on(IndicatorId::Green));
        assert!(toggles.is_on(IndicatorId::Blue));
    }
}
