//! USB serial tasks
//!
//! `usb_task` runs the device state machine; `serial_rx_task` owns the
//! CDC-ACM class, tracks the connection flag, and feeds received bytes
//! into the bounded RX channel for the controller to drain.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::driver::EndpointError;
use embassy_usb::UsbDevice;

use crate::channels::{LINK_UP, RX_BYTES};

/// USB device task - runs the bus state machine forever
#[embassy_executor::task]
pub async fn usb_task(mut usb: UsbDevice<'static, Driver<'static, USB>>) -> ! {
    info!("USB task started");
    usb.run().await
}

/// Serial RX task - receives CDC packets and queues their bytes
#[embassy_executor::task]
pub async fn serial_rx_task(mut class: CdcAcmClass<'static, Driver<'static, USB>>) {
    info!("Serial RX task started");

    let mut buf = [0u8; 64];

    loop {
        class.wait_connection().await;
        info!("Serial link up");
        LINK_UP.store(true, Ordering::Relaxed);

        loop {
            match class.read_packet(&mut buf).await {
                Ok(n) => {
                    trace!("RX: {} bytes", n);
                    for &byte in &buf[..n] {
                        // Bounded queue; a saturated reader drops bytes
                        if RX_BYTES.try_send(byte).is_err() {
                            warn!("RX queue full, dropping byte");
                        }
                    }
                }
                Err(EndpointError::Disabled) => break,
                Err(EndpointError::BufferOverflow) => {
                    warn!("CDC packet overflow");
                }
            }
        }

        LINK_UP.store(false, Ordering::Relaxed);

        // Discard anything still queued so a reconnect starts clean
        while RX_BYTES.try_receive().is_ok() {}

        info!("Serial link down");
    }
}
