//! Tip wrapper implementation

use crate::display::{Readout, TIP};
use crate::traits::{Celsius, TipDriver, TipStatus};

/// Tip state machine over a concrete driver
///
/// Starts disabled: the heater only runs after an explicit `enable`.
pub struct Tip<D> {
    driver: D,
    min: Celsius,
    max: Celsius,
    enabled: bool,
}

impl<D: TipDriver> Tip<D> {
    /// Wrap a driver, forcing it off
    pub fn new(mut driver: D, min: Celsius, max: Celsius) -> Self {
        driver.disable();
        Self {
            driver,
            min,
            max,
            enabled: false,
        }
    }

    /// Current tip state, recomputed by the driver every tick
    pub fn status(&self) -> TipStatus {
        self.driver.status()
    }

    /// Last measured temperature
    pub fn measured(&self) -> Celsius {
        self.driver.measured()
    }

    /// Target the driver is currently regulating to
    pub fn target(&self) -> Celsius {
        self.driver.target()
    }

    /// Set the target, clamped to the allowed window
    ///
    /// Returns the value actually applied.
    pub fn set_target(&mut self, target: Celsius) -> Celsius {
        let clamped = target.clamp(self.min, self.max);
        self.driver.set_target(clamped);
        clamped
    }

    /// Drop the target to zero so the regulator never switches on
    ///
    /// Used during the boot warm-up, where the driver runs its sensing loop
    /// without a setpoint yet.
    pub fn park(&mut self) {
        self.driver.set_target(0);
    }

    /// Change the allowed target window
    pub fn set_limits(&mut self, min: Celsius, max: Celsius) {
        self.min = min;
        self.max = max;
    }

    /// Allow heating
    pub fn enable(&mut self) {
        self.driver.enable();
        self.enabled = true;
    }

    /// Force the heater off (idempotent)
    pub fn disable(&mut self) {
        self.driver.disable();
        self.enabled = false;
    }

    /// Check if heating is currently allowed
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Display readout for the current tip state
    ///
    /// Connected shows the temperature, Disconnected falls back to the
    /// battery voltage, Broken shows `TIP`.
    pub fn readout(&self, battery_dv: u8) -> Readout {
        match self.status() {
            TipStatus::Connected => Readout::Temperature(self.measured()),
            TipStatus::Disconnected => Readout::Battery(battery_dv),
            TipStatus::Broken => Readout::Word(TIP),
        }
    }

    /// Get access to the underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get mutable access to the underlying driver (regulation, calibration)
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
