//! Light-matrix sinks

pub mod frame;

pub use frame::MatrixFrame;
