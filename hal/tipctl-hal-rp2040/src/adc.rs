//! Shared blocking ADC
//!
//! RP2040 has a single ADC. The thermocouple amplifier (tip) and the
//! battery divider are both sampled from the main loop, so the converter is
//! shared through a `RefCell`. Nothing samples it from an interrupt.

use core::cell::RefCell;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Input;
use tipctl_core::traits::{SensorError, Sensing};
use tipctl_drivers::sensor::BatteryGauge;
use tipctl_drivers::tip::TipSensor;

/// ADC shared between the loop's sensing collaborators
pub type SharedAdc<'d> = RefCell<Adc<'d, Blocking>>;

fn read_channel(adc: &SharedAdc<'_>, channel: &mut Channel<'_>) -> Result<u16, SensorError> {
    let mut adc = adc.try_borrow_mut().map_err(|_| SensorError::ConversionError)?;
    adc.blocking_read(channel).map_err(|_| SensorError::ConversionError)
}

/// Thermocouple amplifier output on an ADC pin
pub struct ThermocoupleInput<'d> {
    adc: &'d SharedAdc<'d>,
    channel: Channel<'d>,
}

impl<'d> ThermocoupleInput<'d> {
    pub fn new(adc: &'d SharedAdc<'d>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl TipSensor for ThermocoupleInput<'_> {
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        read_channel(self.adc, &mut self.channel)
    }
}

/// Battery divider and grip contact
pub struct BoardSensing<'d> {
    adc: &'d SharedAdc<'d>,
    battery: Channel<'d>,
    gauge: BatteryGauge,
    grip: Input<'d>,
}

impl<'d> BoardSensing<'d> {
    /// # Arguments
    /// - `battery`: ADC channel on the divided pack voltage
    /// - `gauge`: Divider conversion
    /// - `grip`: Grip contact with pull-up (high = open = iron in hand)
    pub fn new(adc: &'d SharedAdc<'d>, battery: Channel<'d>, gauge: BatteryGauge, grip: Input<'d>) -> Self {
        Self {
            adc,
            battery,
            gauge,
            grip,
        }
    }
}

impl Sensing for BoardSensing<'_> {
    fn read_battery_dv(&mut self) -> u8 {
        match read_channel(self.adc, &mut self.battery) {
            Ok(raw) => self.gauge.decivolts(raw),
            Err(_e) => {
                // Reads as empty, so the interlock holds the heater off
                #[cfg(feature = "defmt")]
                defmt::warn!("Battery read failed: {:?}", _e);
                0
            }
        }
    }

    fn read_grip_open(&mut self) -> bool {
        self.grip.is_high()
    }
}
