//! Watchdog supervisor
//!
//! Arms the hardware watchdog, takes the per-iteration acknowledgment, and
//! turns a watchdog reset into a permanent fault trap that only a power
//! cycle clears.

pub mod supervisor;
pub mod trap;

pub use supervisor::{
    Startup, SupervisorState, TrippedWatchdog, WatchdogSupervisor, WatchdogTimeout,
    WATCHDOG_LONG_MS, WATCHDOG_SHORT_MS,
};
pub use trap::{FaultTrap, TRAP_FRAMES, TRAP_FRAME_TICKS, TRAP_MESSAGE};
