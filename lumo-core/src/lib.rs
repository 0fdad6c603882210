//! Board-agnostic coordination logic for the Lumo demo firmware
//!
//! This crate contains everything that does not depend on specific
//! hardware:
//!
//! - Collaborator traits (serial link, indicator outputs, character
//!   display, light-matrix pixel sink)
//! - Button debounce gate and indicator toggle controller
//! - Serial byte classification and dispatch
//! - Digit pattern table and matrix rendering order
//! - Display writer facade (clear / draw / flush sequences)

#![no_std]
#![deny(unsafe_code)]

pub mod dispatch;
pub mod input;
pub mod render;
pub mod traits;
