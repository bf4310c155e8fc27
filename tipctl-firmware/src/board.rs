//! Board definition
//!
//! Pin assignment for the reference RP2040 iron controller:
//!
//! | Function            | GPIO      |
//! |---------------------|-----------|
//! | Diagnostic UART TX  | 0         |
//! | Segments a..g, dp   | 2..=9     |
//! | Digit enables (low) | 10..=12   |
//! | Heater gate         | 13        |
//! | Up / Down buttons   | 14, 15    |
//! | Select / Menu       | 16, 17    |
//! | Encoder A / B       | 20, 21    |
//! | Grip sense          | 22        |
//! | Thermocouple amp    | 26 (ADC0) |
//! | Battery divider     | 27 (ADC1) |
//!
//! Buttons are active-low with internal pull-ups. The grip switch closes
//! to ground when the iron is in its stand; left floating it reads open.

use tipctl_drivers::sensor::BatteryGauge;
use tipctl_drivers::tip::TipConfig;

/// Diagnostic log baud rate
pub const UART_BAUD: u32 = 19_200;

/// Ignore the stored configuration on every boot
pub const FORCE_DEFAULT_CONFIG: bool = false;

/// Heater gate is driven active-high
pub const HEATER_INVERTED: bool = false;

/// Encoder transitions per detent
pub const ENCODER_STEPS_PER_DETENT: i8 = 4;

/// Digit multiplex period (3 digits, ~110 Hz refresh)
pub const MUX_PERIOD_US: u64 = 3_000;

/// ADC reference in millivolts
const ADC_VREF_MV: u32 = 3300;

/// Battery divider (top resistor to the pack, bottom to ground)
const BATTERY_R_TOP: u32 = 100_000;
const BATTERY_R_BOTTOM: u32 = 22_000;

/// Battery gauge for the on-board divider
pub fn battery_gauge() -> BatteryGauge {
    BatteryGauge::new(ADC_VREF_MV, BATTERY_R_TOP, BATTERY_R_BOTTOM)
}

/// Thermocouple amplifier calibration
pub fn tip_config() -> TipConfig {
    TipConfig::default()
}
