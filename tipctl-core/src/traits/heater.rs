//! Tip driver and heater output traits

/// Temperature in whole degrees Celsius
pub type Celsius = i16;

/// Electrical state of the soldering tip, as classified by the sensing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TipStatus {
    /// Heater loop healthy, temperature readable
    Connected,
    /// Open circuit, most likely no tip inserted
    Disconnected,
    /// Shorted or otherwise implausible reading
    Broken,
}

/// Sensing read failure
///
/// Tip faults are not errors; they are reported through `TipStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion failed or the converter was busy
    ConversionError,
}

/// Raw heater switch (MOSFET gate, SSR, ...)
pub trait HeaterOutput {
    /// Turn the heater on or off
    fn set_on(&mut self, on: bool);

    /// Check if the heater is currently on
    fn is_on(&self) -> bool;
}

/// Closed-loop tip driver
///
/// Owns the heater output and the tip temperature sensor. The control loop
/// only tells it what to aim for and whether it may heat at all.
pub trait TipDriver {
    /// Allow the driver to heat towards the target
    fn enable(&mut self);

    /// Force the heater off. Must be safe to call at any time, repeatedly.
    fn disable(&mut self);

    /// Set the target temperature
    fn set_target(&mut self, target: Celsius);

    /// Current target temperature
    fn target(&self) -> Celsius;

    /// Last measured tip temperature
    fn measured(&self) -> Celsius;

    /// Last classified tip state
    fn status(&self) -> TipStatus;
}
