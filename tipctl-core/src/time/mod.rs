//! Software timer service
//!
//! A monotonic tick counter advanced by the platform tick source, and
//! cooperative countdown timers polled against it. Nothing here blocks.

pub mod counter;
pub mod timer;

pub use counter::{ticks_from_millis, Tick, TickCounter, TICK_HZ};
pub use timer::{deadline_reached, Timer};
