//! Board-agnostic core logic for the soldering iron firmware
//!
//! This crate contains everything the supervisory control loop needs that
//! does not depend on a specific microcontroller:
//!
//! - Hardware contracts (tip driver, display, sensing, watchdog, storage)
//! - Cooperative software timers over a wrapping tick counter
//! - Watchdog supervisor and the power-cycle fault trap
//! - Battery and grip safety interlock
//! - Tip state machine and display readout policy
//! - Normal/Menu mode controller
//! - Boot warm-up and the per-tick control step
//! - Configuration types and persistence policy

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod display;
pub mod mode;
pub mod safety;
pub mod time;
pub mod tip;
pub mod traits;
pub mod watchdog;

pub use traits::Celsius;
