//! Tip state machine
//!
//! Read-through wrapper around the tip driver that owns the clamping and
//! enable bookkeeping and selects what the display shows for each state.

pub mod machine;

pub use machine::Tip;
