//! Controller task
//!
//! Sole owner of the display writer, the matrix driver and frame, the
//! indicator bank, and the toggle state. Routing every render through
//! this one task serializes access to the shared display resources: a
//! button press can never interleave with a serial render.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::{Duration, Timer};

use lumo_core::dispatch::{self, SerialEvent};
use lumo_core::input::ToggleController;
use lumo_core::render::{DisplayWriter, MATRIX_PIXEL_COUNT};
use lumo_drivers::{GpioIndicators, MatrixFrame};

use crate::channels::PRESS_EVENTS;
use crate::display::Oled;
use crate::serial_link::UsbSerialLink;

/// Fixed delay between serial polls
const POLL_INTERVAL_MS: u64 = 10;

/// WS2812 chain driver for the 5x5 matrix
pub type MatrixDriver = PioWs2812<'static, PIO0, 0, MATRIX_PIXEL_COUNT>;

/// Controller task - main coordination loop, never terminates
#[embassy_executor::task]
pub async fn controller_task(
    oled: Oled,
    mut matrix: MatrixDriver,
    mut indicators: GpioIndicators<Output<'static>, Output<'static>>,
) {
    info!("Controller task started");

    let mut writer = DisplayWriter::new(oled);
    let mut toggles = ToggleController::new();
    let mut frame = MatrixFrame::new();
    let mut link = UsbSerialLink;

    loop {
        match select(
            PRESS_EVENTS.receive(),
            Timer::after(Duration::from_millis(POLL_INTERVAL_MS)),
        )
        .await
        {
            // Button path: presses render as soon as they arrive,
            // independent of the poll cadence
            Either::First(press) => {
                let intent = toggles.apply(press, &mut indicators);
                info!("{}", intent.line);
                if writer.status(intent.line).is_err() {
                    // Lost frame; the next render repaints everything
                    warn!("Status render failed");
                }
            }
            // Serial path: exactly one zero-wait poll per tick
            Either::Second(()) => match dispatch::poll(&mut link, &mut writer, &mut frame) {
                Ok(Some(SerialEvent::Digit(digit))) => {
                    debug!("Digit {} received, {}", digit, frame);
                    // The frame now holds all 25 pixels in emission
                    // order; ship it to the chain in one DMA write
                    matrix.write(frame.pixels()).await;
                }
                Ok(Some(SerialEvent::Character(byte))) => {
                    debug!("Character byte {} received", byte);
                }
                Ok(None) => {}
                Err(_) => warn!("Serial render failed"),
            },
        }
    }
}
