//! Watchdog supervisor state machine

use crate::traits::{ResetCause, WatchdogTimer};

/// Timeout guarding the main loop body
pub const WATCHDOG_SHORT_MS: u32 = 500;

/// Timeout for the bounded boot warm-up and the fault trap
pub const WATCHDOG_LONG_MS: u32 = 8000;

/// Armed watchdog timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogTimeout {
    Short,
    Long,
}

impl WatchdogTimeout {
    /// Timeout in milliseconds
    pub fn millis(self) -> u32 {
        match self {
            WatchdogTimeout::Short => WATCHDOG_SHORT_MS,
            WatchdogTimeout::Long => WATCHDOG_LONG_MS,
        }
    }
}

/// Supervisor states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupervisorState {
    /// Running with the given timeout
    Armed(WatchdogTimeout),
    /// Previous run ended in a watchdog reset; terminal until power-off
    Tripped,
}

/// Outcome of the boot-time reset cause check
///
/// The two variants are distinct types, so code that needs a healthy
/// supervisor (boot sequence, control loop) cannot be handed a tripped one.
pub enum Startup<W> {
    /// Clean start, watchdog armed with the long timeout
    Normal(WatchdogSupervisor<W>),
    /// Watchdog reset detected, only the fault trap may run
    Tripped(TrippedWatchdog<W>),
}

impl<W: WatchdogTimer> Startup<W> {
    /// Inspect the reset cause and arm the watchdog with the long timeout
    ///
    /// Must be the first thing the firmware does after reset.
    pub fn check(mut hw: W) -> Self {
        hw.start(WATCHDOG_LONG_MS);
        hw.feed();

        match hw.reset_cause() {
            ResetCause::Watchdog => Startup::Tripped(TrippedWatchdog { hw }),
            ResetCause::PowerOn => Startup::Normal(WatchdogSupervisor {
                hw,
                timeout: WatchdogTimeout::Long,
            }),
        }
    }

    /// Supervisor state right after the check
    pub fn state(&self) -> SupervisorState {
        match self {
            Startup::Normal(s) => s.state(),
            Startup::Tripped(t) => t.state(),
        }
    }
}

/// Healthy watchdog supervisor
pub struct WatchdogSupervisor<W> {
    hw: W,
    timeout: WatchdogTimeout,
}

impl<W: WatchdogTimer> WatchdogSupervisor<W> {
    /// Arm the short timeout; must precede any loop that can stall
    pub fn arm_short(&mut self) {
        self.arm(WatchdogTimeout::Short);
    }

    /// Arm the long timeout for a bounded one-time sequence
    pub fn arm_long(&mut self) {
        self.arm(WatchdogTimeout::Long);
    }

    /// Arm the given timeout
    pub fn arm(&mut self, timeout: WatchdogTimeout) {
        self.hw.start(timeout.millis());
        self.hw.feed();
        self.timeout = timeout;
    }

    /// Acknowledge liveness; call at least once per loop iteration
    pub fn acknowledge(&mut self) {
        self.hw.feed();
    }

    /// Current timeout
    pub fn timeout(&self) -> WatchdogTimeout {
        self.timeout
    }

    /// Current state
    pub fn state(&self) -> SupervisorState {
        SupervisorState::Armed(self.timeout)
    }

    /// Get access to the hardware watchdog
    pub fn hw(&self) -> &W {
        &self.hw
    }
}

/// Supervisor after a watchdog reset
///
/// Can only be acknowledged with the long timeout. There is no transition
/// out of this type.
pub struct TrippedWatchdog<W> {
    hw: W,
}

impl<W: WatchdogTimer> TrippedWatchdog<W> {
    /// Acknowledge liveness while trapped
    pub fn acknowledge(&mut self) {
        self.hw.feed();
    }

    /// Always `Tripped`
    pub fn state(&self) -> SupervisorState {
        SupervisorState::Tripped
    }

    /// Get access to the hardware watchdog
    pub fn hw(&self) -> &W {
        &self.hw
    }
}
