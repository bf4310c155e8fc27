//! Bang-bang tip regulator
//!
//! Reads the thermocouple amplifier, classifies the tip, and switches the
//! heater with hysteresis around the target.

use tipctl_core::traits::{Celsius, HeaterOutput, SensorError, TipDriver, TipStatus};

/// Raw thermocouple amplifier reading
pub trait TipSensor {
    /// Read the amplifier output (12-bit, 0-4095)
    ///
    /// Only meaningful while the heater is off; the caller takes care of
    /// sampling between heating pulses.
    fn read_raw(&mut self) -> Result<u16, SensorError>;
}

/// Regulator configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TipConfig {
    /// Reading at or above which no tip is plugged in (amplifier saturates)
    pub open_raw: u16,
    /// Reading at or below which the amplifier output is stuck low
    pub short_raw: u16,
    /// Reading with the tip at ambient temperature
    pub zero_raw: u16,
    /// Assumed cold-junction temperature
    pub ambient: Celsius,
    /// Gain numerator (°C per count = num / den)
    pub gain_num: i32,
    /// Gain denominator
    pub gain_den: i32,
    /// Readings above this are not physically plausible
    pub plausible_max: Celsius,
    /// Hard cutoff: heater is never on at or above this temperature
    pub max_temp: Celsius,
    /// Hysteresis around the target
    pub hysteresis: Celsius,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            open_raw: 4000,
            short_raw: 20,
            zero_raw: 100,
            ambient: 25,
            gain_num: 3,
            gain_den: 20,
            plausible_max: 550,
            max_temp: 480,
            hysteresis: 2,
        }
    }
}

impl TipConfig {
    /// Classify a raw reading and convert it to a temperature
    pub fn classify(&self, raw: u16) -> (TipStatus, Celsius) {
        if raw >= self.open_raw {
            return (TipStatus::Disconnected, 0);
        }
        if raw <= self.short_raw {
            return (TipStatus::Broken, 0);
        }

        let delta = i32::from(raw) - i32::from(self.zero_raw);
        let temp = i32::from(self.ambient) + delta * self.gain_num / self.gain_den.max(1);
        let temp = temp.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as Celsius;

        if temp > self.plausible_max {
            (TipStatus::Broken, temp)
        } else {
            (TipStatus::Connected, temp)
        }
    }
}

/// Tip regulator implementing `TipDriver`
///
/// The heater is forced off while disabled, while the tip is not
/// connected, and at or above `max_temp`.
pub struct TipController<S, H> {
    sensor: S,
    heater: H,
    config: TipConfig,
    target: Celsius,
    enabled: bool,
    status: TipStatus,
    measured: Celsius,
    heating: bool,
}

impl<S: TipSensor, H: HeaterOutput> TipController<S, H> {
    /// Create a disabled regulator with the heater off
    pub fn new(sensor: S, mut heater: H, config: TipConfig) -> Self {
        heater.set_on(false);
        Self {
            sensor,
            heater,
            config,
            target: 0,
            enabled: false,
            status: TipStatus::Disconnected,
            measured: 0,
            heating: false,
        }
    }

    /// Sample the tip and update the heater output
    ///
    /// Called once per loop iteration from the platform housekeeping.
    pub fn regulate(&mut self) -> TipStatus {
        let (status, measured) = match self.sensor.read_raw() {
            Ok(raw) => self.config.classify(raw),
            Err(_) => (TipStatus::Broken, 0),
        };
        self.status = status;
        self.measured = measured;

        let heat = if !self.enabled
            || status != TipStatus::Connected
            || measured >= self.config.max_temp
        {
            false
        } else if measured < self.target - self.config.hysteresis {
            true
        } else if measured > self.target + self.config.hysteresis {
            false
        } else {
            // Inside the band: keep the previous decision
            self.heating
        };

        self.heating = heat;
        self.heater.set_on(heat);
        status
    }

    /// Get access to the heater output
    pub fn heater(&self) -> &H {
        &self.heater
    }

    /// Get access to the sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Check if the regulator is allowed to heat
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl<S: TipSensor, H: HeaterOutput> TipDriver for TipController<S, H> {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.heating = false;
        self.heater.set_on(false);
    }

    fn set_target(&mut self, target: Celsius) {
        self.target = target.min(self.config.max_temp);
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
