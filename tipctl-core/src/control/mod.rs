//! Main control loop
//!
//! `BootSequence` runs the bounded warm-up phase once after a clean reset
//! and hands over a `Controller`, whose `step` is called once per loop
//! iteration for the rest of the session.

pub mod boot;
pub mod state;

#[cfg(test)]
mod mock;

pub use boot::{BootSequence, WARMUP_FRAMES};
pub use state::{Controller, StepOutcome, GRACE_TICKS, REFRESH_TICKS};

use crate::tip::Tip;

/// Collaborators the control loop drives
pub struct Peripherals<T, D, S, L> {
    /// Tip state machine over the heater driver
    pub tip: Tip<T>,
    /// Seven-segment display
    pub display: D,
    /// Battery and grip sensing
    pub sensing: S,
    /// Diagnostic line transport
    pub log: L,
}
