//! Battery and grip interlock implementation

use crate::time::{Tick, Timer, TICK_HZ};
use crate::traits::Celsius;

/// Minimum time the battery stays flagged low before heating may resume
pub const BATTERY_DEBOUNCE_TICKS: Tick = 10 * TICK_HZ;

/// Whether the heater may run this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaterPermit {
    Allowed,
    Inhibited,
}

/// Battery state change detected this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryEdge {
    /// Voltage dropped below the threshold
    WentLow,
    /// Voltage back above the threshold and debounce elapsed
    Recovered,
}

/// Result of one interlock evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SafetyDecision {
    pub heater: HeaterPermit,
    pub edge: Option<BatteryEdge>,
}

/// Battery-low latch with debounce, plus the last grip reading
///
/// Once the battery reads low the heater stays inhibited until the voltage
/// is back at or above the threshold *and* the debounce timer started at
/// the low edge has elapsed. Readings chattering around the threshold can
/// therefore not toggle the heater faster than the debounce period.
#[derive(Debug, Clone)]
pub struct SafetyInterlock {
    battery_low: bool,
    debounce: Timer,
    grip_open: bool,
    battery_dv: u8,
}

impl Default for SafetyInterlock {
    fn default() -> Self {
        Self::new()
    }
}

impl SafetyInterlock {
    /// Create an interlock with the standard debounce period
    pub fn new() -> Self {
        Self::with_debounce(BATTERY_DEBOUNCE_TICKS)
    }

    /// Create an interlock with a custom debounce period
    pub fn with_debounce(ticks: Tick) -> Self {
        Self {
            battery_low: false,
            debounce: Timer::new(ticks),
            grip_open: false,
            battery_dv: 0,
        }
    }

    /// Evaluate the interlock for this tick
    ///
    /// # Arguments
    /// - `battery_dv`: Battery voltage in decivolts
    /// - `grip_open`: Grip sensor reading (`true` = iron in hand)
    /// - `voltage_min_dv`: Low-battery threshold in decivolts
    pub fn evaluate(
        &mut self,
        now: Tick,
        battery_dv: u8,
        grip_open: bool,
        voltage_min_dv: u8,
    ) -> SafetyDecision {
        self.battery_dv = battery_dv;
        self.grip_open = grip_open;

        let mut edge = None;
        if battery_dv < voltage_min_dv {
            if !self.battery_low {
                self.debounce.arm(now);
                edge = Some(BatteryEdge::WentLow);
            }
            self.battery_low = true;
        } else if self.battery_low && self.debounce.has_elapsed(now) {
            self.battery_low = false;
            edge = Some(BatteryEdge::Recovered);
        }

        SafetyDecision {
            heater: if self.battery_low {
                HeaterPermit::Inhibited
            } else {
                HeaterPermit::Allowed
            },
            edge,
        }
    }

    /// Target the tip should regulate to
    ///
    /// An open grip contact means the iron is in the hand: use the user
    /// setpoint. A closed contact means it rests in the stand: drop to the
    /// rest temperature regardless of the setpoint.
    pub fn effective_target(&self, setpoint: Celsius, rest_temp: Celsius) -> Celsius {
        if self.grip_open {
            setpoint
        } else {
            rest_temp
        }
    }

    /// Check if the battery-low latch is set
    pub fn battery_low(&self) -> bool {
        self.battery_low
    }

    /// Last battery reading in decivolts
    pub fn battery_dv(&self) -> u8 {
        self.battery_dv
    }
}
