//! Tip temperature regulation

pub mod regulator;

pub use regulator::{TipConfig, TipController, TipSensor};
