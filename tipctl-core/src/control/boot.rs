//! Boot warm-up phase

use super::state::{Controller, REFRESH_TICKS};
use super::Peripherals;
use crate::config::Config;
use crate::display::HELLO;
use crate::time::{Tick, Timer};
use crate::traits::{DiagnosticLog, SegmentDisplay, Sensing, TipDriver, WatchdogTimer};
use crate::watchdog::WatchdogSupervisor;

/// Number of battery frames shown during the warm-up, one per refresh period
pub const WARMUP_FRAMES: u8 = 6;

/// Bounded warm-up after a clean reset
///
/// The tip is enabled with a zero target so the driver's sensing runs
/// before any heating is requested. The watchdog stays on the long timeout
/// until `finish` hands over to the control loop.
pub struct BootSequence {
    config: Config,
    frame: Timer,
    frames_shown: u8,
}

impl BootSequence {
    /// Start the warm-up
    pub fn begin<W, T, D, S, L>(
        config: Config,
        now: Tick,
        supervisor: &mut WatchdogSupervisor<W>,
        io: &mut Peripherals<T, D, S, L>,
    ) -> Self
    where
        W: WatchdogTimer,
        T: TipDriver,
        D: SegmentDisplay,
        S: Sensing,
        L: DiagnosticLog,
    {
        supervisor.arm_long();

        io.tip.set_limits(config.min_temp, config.max_temp);
        io.tip.park();
        io.tip.enable();

        io.display.show_word(HELLO);
        io.log.line(format_args!("booted"));
        show_battery(io);

        let mut frame = Timer::new(REFRESH_TICKS);
        frame.arm(now);

        Self {
            config,
            frame,
            frames_shown: 1,
        }
    }

    /// Advance the warm-up; returns `true` once every frame has been shown
    pub fn poll<W, T, D, S, L>(
        &mut self,
        now: Tick,
        supervisor: &mut WatchdogSupervisor<W>,
        io: &mut Peripherals<T, D, S, L>,
    ) -> bool
    where
        W: WatchdogTimer,
        D: SegmentDisplay,
        S: Sensing,
    {
        supervisor.acknowledge();

        if self.is_done() || !self.frame.has_elapsed(now) {
            return self.is_done();
        }

        self.frames_shown += 1;
        self.frame.arm(now);
        if !self.is_done() {
            show_battery(io);
        }
        self.is_done()
    }

    /// Check if the warm-up has run its course
    pub fn is_done(&self) -> bool {
        self.frames_shown > WARMUP_FRAMES
    }

    /// Commit the default setpoint and switch to the short watchdog timeout
    pub fn finish<W, T, D, S, L>(
        self,
        now: Tick,
        supervisor: &mut WatchdogSupervisor<W>,
        io: &mut Peripherals<T, D, S, L>,
    ) -> Controller
    where
        W: WatchdogTimer,
        T: TipDriver,
    {
        let controller = Controller::new(self.config, now);
        io.tip.set_target(controller.setpoint());
        supervisor.arm_short();
        controller
    }
}

fn show_battery<T, D: SegmentDisplay, S: Sensing, L>(io: &mut Peripherals<T, D, S, L>) {
    let battery_dv = io.sensing.read_battery_dv();
    io.display.show_fixed_point(i16::from(battery_dv), -1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::mock::{rig, Shown};
    use crate::watchdog::WatchdogTimeout;

    #[test]
    fn test_begin_warms_up_safely() {
        let mut rig = rig();
        let _boot = BootSequence::begin(Config::default(), 0, &mut rig.supervisor, &mut rig.io);

        assert_eq!(rig.supervisor.timeout(), WatchdogTimeout::Long);
        assert!(rig.io.tip.is_enabled());
        assert_eq!(rig.io.tip.target(), 0);
        assert_eq!(rig.io.log.last.as_str(), "booted");

        // The greeting is replaced by the first battery frame right away
        assert_eq!(rig.io.display.frames, 2);
        assert_eq!(rig.io.display.last, Some(Shown::FixedPoint(80, -1)));
    }

    #[test]
    fn test_warmup_shows_battery_frames() {
        let mut rig = rig();
        let mut boot = BootSequence::begin(Config::default(), 0, &mut rig.supervisor, &mut rig.io);

        let mut now = 0;
        while !boot.poll(now, &mut rig.supervisor, &mut rig.io) {
            now += 1;
            assert!(now <= 10 * REFRESH_TICKS, "warm-up did not finish");
        }

        // Greeting plus six battery frames
        assert_eq!(now, Tick::from(WARMUP_FRAMES) * REFRESH_TICKS);
        assert_eq!(rig.io.display.frames, usize::from(WARMUP_FRAMES) + 1);
        assert_eq!(rig.io.display.last, Some(Shown::FixedPoint(80, -1)));
        assert!(rig.supervisor.hw().feeds > u32::from(WARMUP_FRAMES));
    }

    #[test]
    fn test_finish_commits_default() {
        let mut rig = rig();
        let config = Config {
            default_temp: 320,
            ..Config::default()
        };
        let boot = BootSequence::begin(config, 0, &mut rig.supervisor, &mut rig.io);
        let controller = boot.finish(0, &mut rig.supervisor, &mut rig.io);

        assert_eq!(controller.setpoint(), 320);
        assert_eq!(rig.io.tip.target(), 320);
        assert_eq!(rig.supervisor.timeout(), WatchdogTimeout::Short);
    }

    #[test]
    fn test_limits_follow_config() {
        let mut rig = rig();
        let config = Config {
            min_temp: 100,
            max_temp: 350,
            ..Config::default()
        };
        let _boot = BootSequence::begin(config, 0, &mut rig.supervisor, &mut rig.io);
        assert_eq!(rig.io.tip.set_target(400), 350);
    }
}
