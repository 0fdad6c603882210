//! Inter-task communication channels
//!
//! Static channels and flags shared between the Embassy tasks. Uses
//! embassy-sync primitives for safe cross-context communication.

use core::sync::atomic::AtomicBool;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use lumo_core::input::PressEvent;

/// Channel capacity for validated button presses
const PRESS_CHANNEL_SIZE: usize = 4;

/// Channel capacity for raw serial bytes
const RX_CHANNEL_SIZE: usize = 32;

/// Validated press events from the button edge tasks
pub static PRESS_EVENTS: Channel<CriticalSectionRawMutex, PressEvent, PRESS_CHANNEL_SIZE> =
    Channel::new();

/// Raw bytes received over the USB serial link
pub static RX_BYTES: Channel<CriticalSectionRawMutex, u8, RX_CHANNEL_SIZE> = Channel::new();

/// Whether a USB serial connection is currently established
/// (load/store only; word-sized, so plain atomics suffice on RP2040)
pub static LINK_UP: AtomicBool = AtomicBool::new(false);
