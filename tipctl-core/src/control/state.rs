//! Per-tick control step

use super::Peripherals;
use crate::config::Config;
use crate::display::{Readout, BAT};
use crate::mode::{Dispatch, InputEvent, ModeController, OperatingMode};
use crate::safety::{BatteryEdge, HeaterPermit, SafetyInterlock};
use crate::time::{Tick, Timer, TICK_HZ};
use crate::traits::{Celsius, DiagnosticLog, SegmentDisplay, Sensing, TipDriver, WatchdogTimer};
use crate::watchdog::WatchdogSupervisor;

/// Display refresh period (0.25 s)
pub const REFRESH_TICKS: Tick = TICK_HZ / 4;

/// How long a new setpoint stays on the display (1 s)
pub const GRACE_TICKS: Tick = TICK_HZ;

/// What changed during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepOutcome {
    /// Battery interlock edge
    pub battery: Option<BatteryEdge>,
    /// Mode switched to
    pub mode: Option<OperatingMode>,
    /// Configuration committed by the menu, to be persisted
    pub commit: Option<Config>,
}

/// All mutable control loop state
///
/// Created by `BootSequence::finish`. The configuration is a copy taken at
/// boot and only replaced when the menu commits an edit.
#[derive(Debug, Clone)]
pub struct Controller {
    config: Config,
    setpoint: Celsius,
    announced: Celsius,
    announcing: bool,
    modes: ModeController,
    safety: SafetyInterlock,
    grace: Timer,
    refresh: Timer,
}

impl Controller {
    pub(super) fn new(config: Config, now: Tick) -> Self {
        let mut refresh = Timer::new(REFRESH_TICKS);
        refresh.arm(now);

        Self {
            config,
            setpoint: config.default_temp,
            announced: config.default_temp,
            announcing: false,
            modes: ModeController::new(),
            safety: SafetyInterlock::new(),
            grace: Timer::new(GRACE_TICKS),
            refresh,
        }
    }

    /// Run one loop iteration
    ///
    /// Acknowledges the watchdog, evaluates the safety interlock, dispatches
    /// the queued input events, applies the heater-enable rule and then does
    /// the mode's display work. Never blocks.
    pub fn step<W, T, D, S, L, I>(
        &mut self,
        now: Tick,
        supervisor: &mut WatchdogSupervisor<W>,
        io: &mut Peripherals<T, D, S, L>,
        events: I,
    ) -> StepOutcome
    where
        W: WatchdogTimer,
        T: TipDriver,
        D: SegmentDisplay,
        S: Sensing,
        L: DiagnosticLog,
        I: IntoIterator<Item = InputEvent>,
    {
        supervisor.acknowledge();

        let battery_dv = io.sensing.read_battery_dv();
        let grip_open = io.sensing.read_grip_open();
        let decision = self
            .safety
            .evaluate(now, battery_dv, grip_open, self.config.voltage_min_dv);
        if decision.heater == HeaterPermit::Inhibited {
            io.tip.disable();
        }

        let mut outcome = StepOutcome {
            battery: decision.edge,
            ..StepOutcome::default()
        };
        if let Some(BatteryEdge::WentLow) = decision.edge {
            io.log.line(format_args!("battery low: {} dV", battery_dv));
        }

        for event in events {
            match self.input(event, io) {
                Dispatch::EnteredMenu => outcome.mode = Some(OperatingMode::Menu),
                Dispatch::ExitedMenu(commit) => {
                    outcome.mode = Some(OperatingMode::Normal);
                    if commit.is_some() {
                        outcome.commit = commit;
                    }
                }
                Dispatch::Ignored | Dispatch::Setpoint(_) | Dispatch::MenuUpdated => {}
            }
        }

        // Heating only in normal mode with the interlock permitting
        let mode = self.modes.mode();
        if mode == OperatingMode::Normal
            && decision.heater == HeaterPermit::Allowed
            && !io.tip.is_enabled()
        {
            io.tip.enable();
        }

        match mode {
            OperatingMode::Normal => self.run_normal(now, io),
            OperatingMode::Menu => self.run_menu(now, io),
        }

        outcome
    }

    /// Dispatch one input event and apply its effect immediately
    ///
    /// Entering the menu disables the tip right away. Leaving it does not
    /// re-enable anything; the next `step` does that if the interlock
    /// permits.
    pub fn input<T, D, S, L>(&mut self, event: InputEvent, io: &mut Peripherals<T, D, S, L>) -> Dispatch
    where
        T: TipDriver,
        D: SegmentDisplay,
    {
        let dispatch = self.modes.dispatch(event, self.setpoint, &self.config);
        match dispatch {
            Dispatch::Ignored => {}
            Dispatch::Setpoint(setpoint) => {
                self.setpoint = setpoint;
                io.display.show_temperature(setpoint);
            }
            Dispatch::EnteredMenu => {
                io.tip.disable();
                self.render_menu(&mut io.display);
            }
            Dispatch::MenuUpdated => self.render_menu(&mut io.display),
            Dispatch::ExitedMenu(commit) => {
                if let Some(config) = commit {
                    self.apply_config(config, io);
                }
            }
        }
        dispatch
    }

    fn apply_config<T: TipDriver, D, S, L>(&mut self, config: Config, io: &mut Peripherals<T, D, S, L>) {
        self.config = config;
        io.tip.set_limits(config.min_temp, config.max_temp);
        self.setpoint = config.clamp_temp(self.setpoint);
    }

    fn run_normal<T, D, S, L>(&mut self, now: Tick, io: &mut Peripherals<T, D, S, L>)
    where
        T: TipDriver,
        D: SegmentDisplay,
        L: DiagnosticLog,
    {
        if self.setpoint != self.announced {
            self.announced = self.setpoint;
            self.grace.arm(now);
            self.announcing = true;
        }

        let target = self.safety.effective_target(self.setpoint, self.config.rest_temp);
        io.tip.set_target(target);

        if self.announcing && self.grace.has_elapsed(now) {
            self.announcing = false;
            self.refresh.arm(now);
        }

        if !self.announcing && self.refresh.has_elapsed(now) {
            self.refresh.arm(now);
            let measured = io.tip.measured();
            self.readout(io).render(&mut io.display);
            io.log.line(format_args!("{}", measured));
        }
    }

    fn run_menu<T, D: SegmentDisplay, S, L>(&mut self, now: Tick, io: &mut Peripherals<T, D, S, L>) {
        if self.refresh.has_elapsed(now) {
            self.refresh.arm(now);
            self.render_menu(&mut io.display);
        }
    }

    fn render_menu<D: SegmentDisplay>(&self, display: &mut D) {
        if let Some(menu) = self.modes.menu() {
            menu.readout().render(display);
        }
    }

    /// Normal-mode readout; the battery banner wins over the tip status
    pub fn readout<T: TipDriver, D, S, L>(&self, io: &Peripherals<T, D, S, L>) -> Readout {
        if self.safety.battery_low() {
            Readout::Word(BAT)
        } else {
            io.tip.readout(self.safety.battery_dv())
        }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// User setpoint
    pub fn setpoint(&self) -> Celsius {
        self.setpoint
    }

    /// Active operating mode
    pub fn mode(&self) -> OperatingMode {
        self.modes.mode()
    }
}
