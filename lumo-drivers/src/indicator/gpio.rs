//! GPIO indicator bank
//!
//! Drives the two discrete indicator outputs through `embedded-hal`
//! output pins. Active high: on = pin high.

use embedded_hal::digital::OutputPin;

use lumo_core::traits::indicator::{IndicatorId, IndicatorOutput};

/// The two indicator pins as one bank
pub struct GpioIndicators<G, B> {
    green: G,
    blue: B,
}

impl<G: OutputPin, B: OutputPin> GpioIndicators<G, B> {
    /// Create a bank from the two pins; both start driven low
    pub fn new(mut green: G, mut blue: B) -> Self {
        let _ = green.set_low();
        let _ = blue.set_low();
        Self { green, blue }
    }
}

impl<G: OutputPin, B: OutputPin> IndicatorOutput for GpioIndicators<G, B> {
    fn set(&mut self, id: IndicatorId, on: bool) {
        // Pin errors are discarded: push-pull GPIO writes are
        // infallible on this hardware
        match (id, on) {
            (IndicatorId::Green, true) => {
                let _ = self.green.set_high();
            }
            (IndicatorId::Green, false) => {
                let _ = self.green.set_low();
            }
            (IndicatorId::Blue, true) => {
                let _ = self.blue.set_high();
            }
            (IndicatorId::Blue, false) => {
                let _ = self.blue.set_low();
            }
        }
    }
}
