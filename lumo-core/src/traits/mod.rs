//! Hardware collaborator traits
//!
//! These traits define the interface between the coordination logic
//! and the hardware-specific implementations in the firmware.

pub mod display;
pub mod indicator;
pub mod matrix;
pub mod serial;

pub use display::TextDisplay;
pub use indicator::{IndicatorId, IndicatorOutput};
pub use matrix::PixelSink;
pub use serial::SerialLink;
