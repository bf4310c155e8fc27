//! Battery voltage gauge
//!
//! Converts a raw ADC reading of the divided pack voltage to decivolts.

/// Divided battery voltage to decivolts
///
/// Circuit: VBAT -- R_top -- ADC_PIN -- R_bottom -- GND
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryGauge {
    /// ADC reference voltage in millivolts
    vref_mv: u32,
    /// ADC full scale (4096 for 12-bit)
    adc_max: u32,
    /// Upper divider resistor in ohms
    r_top: u32,
    /// Lower divider resistor in ohms
    r_bottom: u32,
}

impl BatteryGauge {
    /// Create a gauge for a 12-bit ADC
    ///
    /// # Arguments
    /// - `vref_mv`: Reference voltage in millivolts (typically 3300)
    /// - `r_top`, `r_bottom`: Divider resistors in ohms
    pub fn new(vref_mv: u32, r_top: u32, r_bottom: u32) -> Self {
        Self {
            vref_mv,
            adc_max: 4096,
            r_top,
            r_bottom: r_bottom.max(1),
        }
    }

    /// Pin voltage in millivolts
    pub fn pin_millivolts(&self, raw: u16) -> u32 {
        u32::from(raw) * self.vref_mv / self.adc_max
    }

    /// Battery voltage in decivolts, saturating at 25.5 V
    pub fn decivolts(&self, raw: u16) -> u8 {
        let pin_mv = u64::from(self.pin_millivolts(raw));
        let battery_mv = pin_mv * u64::from(self.r_top + self.r_bottom) / u64::from(self.r_bottom);
        u8::try_from(battery_mv / 100).unwrap_or(u8::MAX)
    }
}
