//! Analog sensing helpers

pub mod battery;

pub use battery::BatteryGauge;
