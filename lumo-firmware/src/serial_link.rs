//! USB CDC serial link collaborator
//!
//! The USB stack runs in its own tasks (see `tasks::usb`); this type
//! only exposes the received bytes and the connection flag to the
//! dispatcher, zero-wait on both sides.

use core::sync::atomic::Ordering;

use lumo_core::traits::SerialLink;

use crate::channels::{LINK_UP, RX_BYTES};

/// Zero-wait view over the USB receive queue
pub struct UsbSerialLink;

impl SerialLink for UsbSerialLink {
    fn is_connected(&self) -> bool {
        LINK_UP.load(Ordering::Relaxed)
    }

    fn try_read_byte(&mut self) -> Option<u8> {
        RX_BYTES.try_receive().ok()
    }
}
