//! Operating mode controller
//!
//! Exactly one handler set receives input events at a time. Normal mode
//! adjusts the setpoint; menu mode edits the configuration.

pub mod controller;
pub mod menu;

pub use controller::{step_down, step_up, Dispatch, InputEvent, ModeController, OperatingMode};
pub use menu::{Menu, MenuItem, MenuOutcome};
