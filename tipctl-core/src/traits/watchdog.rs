//! Hardware watchdog trait

/// Why the chip last came out of reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetCause {
    /// Power-on, brown-out or external reset
    PowerOn,
    /// The previous run was terminated by a watchdog timeout
    Watchdog,
}

/// Hardware reset timer
pub trait WatchdogTimer {
    /// (Re)start the watchdog with a timeout in milliseconds
    fn start(&mut self, timeout_ms: u32);

    /// Acknowledge liveness, restarting the countdown
    fn feed(&mut self);

    /// Reset cause latched by the hardware at boot
    fn reset_cause(&self) -> ResetCause;
}
