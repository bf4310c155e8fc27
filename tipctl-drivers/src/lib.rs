//! Collaborator implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tipctl-core for the parts of the iron the control loop does not own:
//!
//! - Heater output on a GPIO pin
//! - Bang-bang tip regulator over a thermocouple amplifier
//! - Three-digit seven-segment frame encoding
//! - Debounced buttons, rotary encoder and the input event queue
//! - Battery voltage gauge
//! - Diagnostic line writer over a serial port

#![no_std]
#![deny(unsafe_code)]

pub mod diag;
pub mod display;
pub mod heater;
pub mod input;
pub mod sensor;
pub mod tip;
