//! Button edge tasks
//!
//! The interrupt-driven input path: one task per button awaits falling
//! edges (buttons are wired to ground with pull-ups), runs the
//! debounce gate, and forwards validated presses to the controller.
//! This path is fully asynchronous to the serial poll cadence.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use lumo_core::input::{ButtonId, DebounceGate};

use crate::channels::PRESS_EVENTS;

/// Button edge task - one instance per physical button
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut input: Input<'static>, button: ButtonId) {
    info!("Button task started for {:?}", button);

    let mut gate = DebounceGate::new(button);

    loop {
        input.wait_for_falling_edge().await;
        trace!("Edge on {:?}", button);

        // Two-stage filter: time window, then a level re-read at the
        // moment of validation
        let now_ms = Instant::now().as_millis() as u32;
        if let Some(press) = gate.on_edge(now_ms, input.is_low()) {
            debug!("Press accepted on {:?}", button);
            if PRESS_EVENTS.try_send(press).is_err() {
                warn!("Press queue full, dropping {:?}", button);
            }
        }
    }
}
