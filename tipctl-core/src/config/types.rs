//! Configuration type definitions

use crate::traits::{Celsius, ConfigError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout version written by this firmware
pub const CONFIG_VERSION: u8 = 1;

/// Lowest temperature any configuration may allow
pub const TEMP_MIN: Celsius = 50;

/// Highest temperature any configuration may allow
pub const TEMP_MAX: Celsius = 450;

/// Setpoint adjustment step
pub const TEMP_STEP: Celsius = 10;

/// Lowest battery threshold the menu accepts (decivolts)
pub const VOLTAGE_MIN_FLOOR_DV: u8 = 50;

/// Highest battery threshold the menu accepts (decivolts)
pub const VOLTAGE_MIN_CEIL_DV: u8 = 90;

/// User configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Layout version
    pub version: u8,
    /// Setpoint after boot and after "reset to default"
    pub default_temp: Celsius,
    /// Lowest selectable setpoint
    pub min_temp: Celsius,
    /// Highest selectable setpoint
    pub max_temp: Celsius,
    /// Target while the iron rests in the stand
    pub rest_temp: Celsius,
    /// Battery voltage below which heating is inhibited (decivolts)
    pub voltage_min_dv: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            default_temp: 300,
            min_temp: TEMP_MIN,
            max_temp: TEMP_MAX,
            rest_temp: 150,
            voltage_min_dv: 64, // 2S Li-ion at 3.2V/cell
        }
    }
}

impl Config {
    /// Check all configuration invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }
        if self.min_temp < TEMP_MIN || self.max_temp > TEMP_MAX || self.min_temp >= self.max_temp {
            return Err(ConfigError::Invalid);
        }
        if !self.in_range(self.default_temp) || !self.in_range(self.rest_temp) {
            return Err(ConfigError::Invalid);
        }
        if !(VOLTAGE_MIN_FLOOR_DV..=VOLTAGE_MIN_CEIL_DV).contains(&self.voltage_min_dv) {
            return Err(ConfigError::Invalid);
        }
        Ok(())
    }

    /// Clamp a temperature into the configured window
    pub fn clamp_temp(&self, temp: Celsius) -> Celsius {
        temp.clamp(self.min_temp, self.max_temp)
    }

    /// Check if a temperature lies inside the configured window
    pub fn in_range(&self, temp: Celsius) -> bool {
        (self.min_temp..=self.max_temp).contains(&temp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_version_mismatch() {
        let config = Config {
            version: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::VersionMismatch));
    }

    #[test]
    fn test_window_outside_absolute_bounds() {
        let config = Config {
            max_temp: TEMP_MAX + 10,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Invalid));

        let config = Config {
            min_temp: 200,
            max_temp: 200,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Invalid));
    }

    #[test]
    fn test_rest_outside_window() {
        let config = Config {
            rest_temp: 20,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Invalid));
    }

    #[test]
    fn test_battery_threshold_bounds() {
        let config = Config {
            voltage_min_dv: 120,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Invalid));
    }

    #[test]
    fn test_clamp_temp() {
        let config = Config::default();
        assert_eq!(config.clamp_temp(500), 450);
        assert_eq!(config.clamp_temp(0), 50);
        assert_eq!(config.clamp_temp(320), 320);
    }
}
