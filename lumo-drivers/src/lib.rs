//! Hardware driver implementations
//!
//! Concrete implementations of the collaborator traits defined in
//! lumo-core that stay generic over `embedded-hal`:
//!
//! - GPIO indicator bank (two discrete output pins)
//! - In-memory matrix frame for DMA-style LED chain drivers

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod matrix;

pub use indicator::GpioIndicators;
pub use matrix::MatrixFrame;
