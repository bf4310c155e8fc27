//! Power-cycle fault trap
//!
//! Entered when the previous run was ended by the watchdog. The heater is
//! driven off, the output is owned here for the rest of the power-on
//! session, and the display cycles an error message until power is removed.

use super::supervisor::TrippedWatchdog;
use crate::display::{AND, ERR, OFF, ON, TRN};
use crate::time::{ticks_from_millis, Tick, Timer};
use crate::traits::{DiagnosticLog, HeaterOutput, SegmentDisplay, WatchdogTimer, Word};

/// Time each error frame stays on the display
pub const TRAP_FRAME_TICKS: Tick = ticks_from_millis(700);

/// "Err / trn / OFF / And / On"
pub const TRAP_FRAMES: [Word; 5] = [ERR, TRN, OFF, AND, ON];

/// Printed on the diagnostic transport once per frame cycle
pub const TRAP_MESSAGE: &str = "ERROR: please power cycle this device";

/// Terminal fault state
///
/// Takes ownership of the raw heater output and never turns it on; there is
/// no API on this type that could.
pub struct FaultTrap<W, H> {
    watchdog: TrippedWatchdog<W>,
    heater: H,
    frame: Timer,
    next_frame: usize,
}

impl<W: WatchdogTimer, H: HeaterOutput> FaultTrap<W, H> {
    /// Latch the heater off and enter the trap
    pub fn engage(mut watchdog: TrippedWatchdog<W>, mut heater: H, now: Tick) -> Self {
        heater.set_on(false);
        watchdog.acknowledge();

        let mut frame = Timer::new(TRAP_FRAME_TICKS);
        // First frame is due immediately
        frame.arm_for(now, 0);

        Self {
            watchdog,
            heater,
            frame,
            next_frame: 0,
        }
    }

    /// One pass of the trap loop
    ///
    /// Acknowledges the watchdog, re-asserts the heater off, and advances
    /// the error animation when the frame timer elapses. Never blocks.
    pub fn service<D: SegmentDisplay, L: DiagnosticLog>(
        &mut self,
        now: Tick,
        display: &mut D,
        log: &mut L,
    ) {
        self.watchdog.acknowledge();
        self.heater.set_on(false);

        if !self.frame.has_elapsed(now) {
            return;
        }

        if self.next_frame == 0 {
            log.line(format_args!("{}", TRAP_MESSAGE));
        }
        if let Some(word) = TRAP_FRAMES.get(self.next_frame) {
            display.show_word(*word);
        }
        self.next_frame = (self.next_frame + 1) % TRAP_FRAMES.len();
        self.frame.arm(now);
    }

    /// Get access to the latched heater output
    pub fn heater(&self) -> &H {
        &self.heater
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Glyph, ResetCause};
    use crate::watchdog::Startup;
    use core::fmt;

    struct MockWatchdog {
        feeds: u32,
    }

    impl WatchdogTimer for MockWatchdog {
        fn start(&mut self, _timeout_ms: u32) {}

        fn feed(&mut self) {
            self.feeds += 1;
        }

        fn reset_cause(&self) -> ResetCause {
            ResetCause::Watchdog
        }
    }

    // Heater that remembers whether it was ever switched on
    struct MockHeater {
        on: bool,
        ever_on: bool,
    }

    impl HeaterOutput for MockHeater {
        fn set_on(&mut self, on: bool) {
            self.on = on;
            self.ever_on |= on;
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    struct MockDisplay {
        last: Option<Word>,
        frames: u32,
    }

    impl SegmentDisplay for MockDisplay {
        fn show_temperature(&mut self, _value: i16) {}

        fn show_fixed_point(&mut self, _value: i16, _scale: i8) {}

        fn show_glyphs(&mut self, pos2: Glyph, pos1: Glyph, pos0: Glyph) {
            self.last = Some([pos2, pos1, pos0]);
            self.frames += 1;
        }
    }

    struct MockLog {
        lines: u32,
    }

    impl DiagnosticLog for MockLog {
        fn line(&mut self, _args: fmt::Arguments<'_>) {
            self.lines += 1;
        }
    }

    fn engage(heater_on: bool) -> FaultTrap<MockWatchdog, MockHeater> {
        let Startup::Tripped(tripped) = Startup::check(MockWatchdog { feeds: 0 }) else {
            panic!("expected a tripped supervisor");
        };
        let heater = MockHeater {
            on: heater_on,
            ever_on: false,
        };
        FaultTrap::engage(tripped, heater, 0)
    }

    #[test]
    fn test_engage_forces_heater_off() {
        let trap = engage(true);
        assert!(!trap.heater().is_on());
    }

    #[test]
    fn test_heater_never_enabled() {
        let mut trap = engage(false);
        let mut display = MockDisplay {
            last: None,
            frames: 0,
        };
        let mut log = MockLog { lines: 0 };

        for now in 0..10_000 {
            trap.service(now, &mut display, &mut log);
            assert!(!trap.heater().is_on());
        }
        assert!(!trap.heater().ever_on);
    }

    #[test]
    fn test_cycles_error_frames() {
        let mut trap = engage(false);
        let mut display = MockDisplay {
            last: None,
            frames: 0,
        };
        let mut log = MockLog { lines: 0 };

        trap.service(0, &mut display, &mut log);
        assert_eq!(display.last, Some(ERR));
        assert_eq!(log.lines, 1);

        trap.service(TRAP_FRAME_TICKS - 1, &mut display, &mut log);
        assert_eq!(display.frames, 1);

        let mut now = 0;
        for expected in [TRN, OFF, AND, ON, ERR] {
            now += TRAP_FRAME_TICKS;
            trap.service(now, &mut display, &mut log);
            assert_eq!(display.last, Some(expected));
        }

        // Message repeats once per full cycle
        assert_eq!(log.lines, 2);
    }

    #[test]
    fn test_acknowledges_every_pass() {
        let mut trap = engage(false);
        let mut display = MockDisplay {
            last: None,
            frames: 0,
        };
        let mut log = MockLog { lines: 0 };

        let before = trap.watchdog.hw().feeds;
        for now in 0..5 {
            trap.service(now, &mut display, &mut log);
        }
        assert_eq!(trap.watchdog.hw().feeds, before + 5);
    }
}
