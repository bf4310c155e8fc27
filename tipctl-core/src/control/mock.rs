//! Test doubles for the control loop

use super::{BootSequence, Controller, Peripherals};
use crate::config::Config;
use crate::tip::Tip;
use crate::traits::{
    Celsius, DiagnosticLog, Glyph, ResetCause, SegmentDisplay, Sensing, TipDriver, TipStatus,
    WatchdogTimer, Word,
};
use crate::watchdog::{Startup, WatchdogSupervisor};
use core::fmt::{self, Write};
use heapless::String;

pub struct MockDriver {
    pub enabled: bool,
    pub target: Celsius,
    pub measured: Celsius,
    pub status: TipStatus,
}

impl TipDriver for MockDriver {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn set_target(&mut self, target: Celsius) {
        self.target = target;
    }

    fn target(&self) -> Celsius {
        self.target
    }

    fn measured(&self) -> Celsius {
        self.measured
    }

    fn status(&self) -> TipStatus {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shown {
    Temperature(i16),
    FixedPoint(i16, i8),
    Word(Word),
}

pub struct MockDisplay {
    pub last: Option<Shown>,
    pub frames: usize,
}

impl MockDisplay {
    fn show(&mut self, shown: Shown) {
        self.last = Some(shown);
        self.frames += 1;
    }
}

impl SegmentDisplay for MockDisplay {
    fn show_temperature(&mut self, value: i16) {
        self.show(Shown::Temperature(value));
    }

    fn show_fixed_point(&mut self, value: i16, scale: i8) {
        self.show(Shown::FixedPoint(value, scale));
    }

    fn show_glyphs(&mut self, pos2: Glyph, pos1: Glyph, pos0: Glyph) {
        self.show(Shown::Word([pos2, pos1, pos0]));
    }
}

pub struct MockSensing {
    pub battery_dv: u8,
    pub grip_open: bool,
}

impl Sensing for MockSensing {
    fn read_battery_dv(&mut self) -> u8 {
        self.battery_dv
    }

    fn read_grip_open(&mut self) -> bool {
        self.grip_open
    }
}

pub struct MockLog {
    pub lines: usize,
    pub last: String<64>,
}

impl DiagnosticLog for MockLog {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        self.lines += 1;
        self.last.clear();
        let _ = self.last.write_fmt(args);
    }
}

pub struct MockWatchdog {
    pub feeds: u32,
}

impl WatchdogTimer for MockWatchdog {
    fn start(&mut self, _timeout_ms: u32) {}

    fn feed(&mut self) {
        self.feeds += 1;
    }

    fn reset_cause(&self) -> ResetCause {
        ResetCause::PowerOn
    }
}

pub type MockPeripherals = Peripherals<MockDriver, MockDisplay, MockSensing, MockLog>;

pub struct MockIo {
    pub supervisor: WatchdogSupervisor<MockWatchdog>,
    pub io: MockPeripherals,
}

/// Fresh rig: healthy battery (8.0 V), iron in hand, tip connected
pub fn rig() -> MockIo {
    let Startup::Normal(supervisor) = Startup::check(MockWatchdog { feeds: 0 }) else {
        panic!("mock watchdog reports a clean reset");
    };
    let driver = MockDriver {
        enabled: false,
        target: 0,
        measured: 25,
        status: TipStatus::Connected,
    };

    MockIo {
        supervisor,
        io: Peripherals {
            tip: Tip::new(driver, 50, 450),
            display: MockDisplay {
                last: None,
                frames: 0,
            },
            sensing: MockSensing {
                battery_dv: 80,
                grip_open: true,
            },
            log: MockLog {
                lines: 0,
                last: String::new(),
            },
        },
    }
}

/// Rig after the boot sequence, with the log cleared
pub fn booted(config: Config) -> (Controller, MockIo) {
    let mut rig = rig();
    let boot = BootSequence::begin(config, 0, &mut rig.supervisor, &mut rig.io);
    let controller = boot.finish(0, &mut rig.supervisor, &mut rig.io);
    rig.io.log.lines = 0;
    rig.io.log.last.clear();
    (controller, rig)
}
