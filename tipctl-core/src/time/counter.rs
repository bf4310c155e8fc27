//! Interrupt-shared tick counter

use portable_atomic::{AtomicU32, Ordering};

/// Tick count, wraps at `u32::MAX`
pub type Tick = u32;

/// Tick rate of the counter (1/128 s per tick)
pub const TICK_HZ: u32 = 128;

/// Convert milliseconds to ticks, rounding up so a timeout is never shorter
/// than requested
pub const fn ticks_from_millis(ms: u32) -> Tick {
    ((ms as u64 * TICK_HZ as u64 + 999) / 1000) as Tick
}

/// Monotonic tick counter shared between the tick source and the main loop
///
/// The tick source is the only writer. `increment` publishes with `Release`
/// and `now` reads with `Acquire`, so every increment performed before a
/// read is visible to that read, and anything the tick source wrote before
/// incrementing is visible to the loop after it observes the new count.
/// The value is a single 32-bit word; a read is never torn.
pub struct TickCounter {
    ticks: AtomicU32,
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickCounter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Advance by one tick (wraps)
    ///
    /// Call only from the tick source.
    pub fn increment(&self) {
        self.ticks.fetch_add(1, Ordering::Release);
    }

    /// Current tick count
    pub fn now(&self) -> Tick {
        self.ticks.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_increments() {
        let counter = TickCounter::new();
        assert_eq!(counter.now(), 0);
        counter.increment();
        counter.increment();
        assert_eq!(counter.now(), 2);
    }

    #[test]
    fn test_counter_wraps() {
        let counter = TickCounter {
            ticks: AtomicU32::new(u32::MAX),
        };
        counter.increment();
        assert_eq!(counter.now(), 0);
    }

    #[test]
    fn test_millis_conversion() {
        assert_eq!(ticks_from_millis(250), 32);
        assert_eq!(ticks_from_millis(1000), TICK_HZ);
        // 700ms is 89.6 ticks; never round a timeout down
        assert_eq!(ticks_from_millis(700), 90);
        assert_eq!(ticks_from_millis(0), 0);
    }
}
