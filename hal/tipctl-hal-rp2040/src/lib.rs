//! RP2040 bindings for the soldering iron firmware
//!
//! This crate provides RP2040-specific implementations of the tipctl-core
//! contracts:
//!
//! - Shared blocking ADC: thermocouple amplifier, battery divider, grip input
//! - Hardware watchdog with reset-cause detection
//! - Seven-segment digit multiplexing on GPIO
//! - Flash configuration store (implements `ConfigStore`)

#![no_std]

pub mod adc;
pub mod flash;
pub mod mux;
pub mod watchdog;

pub use adc::{BoardSensing, SharedAdc, ThermocoupleInput};
pub use flash::{FlashConfigStore, FlashError, StorageKey};
pub use mux::SegmentMux;
pub use watchdog::RpWatchdog;
