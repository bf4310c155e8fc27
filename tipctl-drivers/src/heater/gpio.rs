//! GPIO heater output
//!
//! Drives the tip MOSFET gate directly from a GPIO pin.

use core::convert::Infallible;
use embedded_hal::digital::OutputPin;
use tipctl_core::traits::HeaterOutput;

/// GPIO heater output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioHeater<P> {
    pin: P,
    /// If true, heater ON = pin LOW
    inverted: bool,
    /// Current logical state (true = heater on)
    on: bool,
}

impl<P: OutputPin<Error = Infallible>> GpioHeater<P> {
    /// Create a new GPIO heater output, switched off
    ///
    /// # Arguments
    /// - `pin`: The gate drive pin
    /// - `inverted`: If true, heater is ON when pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut heater = Self {
            pin,
            inverted,
            on: false,
        };
        heater.set_on(false);
        heater
    }

    /// Create a new GPIO heater with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new GPIO heater with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin<Error = Infallible>> HeaterOutput for GpioHeater<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.unwrap_or_else(|e| match e {});
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
