//! Indicator output drivers

pub mod gpio;

pub use gpio::GpioIndicators;
