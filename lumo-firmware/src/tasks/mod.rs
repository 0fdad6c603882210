//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/flags.

pub mod buttons;
pub mod controller;
pub mod usb;

pub use buttons::button_task;
pub use controller::controller_task;
pub use usb::{serial_rx_task, usb_task};
