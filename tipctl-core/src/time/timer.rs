//! Cooperative countdown timers

use super::counter::Tick;

/// Check whether `now` has reached `deadline` on the wrapping tick scale
///
/// Uses the signed distance between the two counts, so a deadline just past
/// the wrap point is not considered reached by a `now` just before it.
/// Valid while the distance is below 2^31 ticks (~194 days at 128 Hz).
#[inline]
pub fn deadline_reached(now: Tick, deadline: Tick) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

/// One-shot countdown timer
///
/// Owned by whichever component started it. `prepare` resets it without
/// starting, `arm` starts a countdown from the current tick, and
/// `has_elapsed` is a non-blocking poll that stays true until re-armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer {
    duration: Tick,
    deadline: Tick,
    armed: bool,
    expired: bool,
}

impl Timer {
    /// Create a prepared (not running) timer with a default duration
    pub const fn new(duration: Tick) -> Self {
        Self {
            duration,
            deadline: 0,
            armed: false,
            expired: false,
        }
    }

    /// Reset bookkeeping without starting the countdown
    pub fn prepare(&mut self) {
        self.deadline = 0;
        self.armed = false;
        self.expired = false;
    }

    /// Start the countdown for the default duration
    pub fn arm(&mut self, now: Tick) {
        self.arm_for(now, self.duration);
    }

    /// Start the countdown for an explicit number of ticks
    pub fn arm_for(&mut self, now: Tick, ticks: Tick) {
        self.deadline = now.wrapping_add(ticks);
        self.armed = true;
        self.expired = false;
    }

    /// Poll the timer
    ///
    /// A prepared timer that was never armed has not elapsed. Once the
    /// deadline is observed the result latches until the next `arm`.
    pub fn has_elapsed(&mut self, now: Tick) -> bool {
        if !self.armed {
            return false;
        }
        if !self.expired && deadline_reached(now, self.deadline) {
            self.expired = true;
        }
        self.expired
    }

    /// Check if a countdown has been started since the last `prepare`
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Default duration in ticks
    pub fn duration(&self) -> Tick {
        self.duration
    }

    /// Absolute deadline of the current countdown
    pub fn deadline(&self) -> Tick {
        self.deadline
    }
}
