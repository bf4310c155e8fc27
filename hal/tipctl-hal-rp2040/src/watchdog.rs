//! RP2040 hardware watchdog

use embassy_rp::peripherals::WATCHDOG;
use embassy_rp::watchdog::{ResetReason, Watchdog};
use embassy_rp::Peri;
use embassy_time::Duration;
use tipctl_core::traits::{ResetCause, WatchdogTimer};

/// Hardware watchdog with the reset cause captured at construction
pub struct RpWatchdog {
    watchdog: Watchdog,
    cause: ResetCause,
}

impl RpWatchdog {
    /// Take the watchdog and read why the chip last reset
    pub fn new(peri: Peri<'static, WATCHDOG>) -> Self {
        let watchdog = Watchdog::new(peri);
        let cause = match watchdog.reset_reason() {
            Some(ResetReason::TimedOut) => ResetCause::Watchdog,
            // A forced reset is a deliberate reboot, not a hang
            Some(ResetReason::Forced) | None => ResetCause::PowerOn,
        };
        Self { watchdog, cause }
    }
}

impl WatchdogTimer for RpWatchdog {
    fn start(&mut self, timeout_ms: u32) {
        self.watchdog.start(Duration::from_millis(u64::from(timeout_ms)));
    }

    fn feed(&mut self) {
        self.watchdog.feed();
    }

    fn reset_cause(&self) -> ResetCause {
        self.cause
    }
}
