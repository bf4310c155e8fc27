//! Embassy async tasks
//!
//! The control loop itself runs in `main`; these tasks only keep time and
//! refresh the display.

pub mod display_mux;
pub mod tick;

pub use display_mux::display_mux_task;
pub use tick::{tick_task, TICKS};
