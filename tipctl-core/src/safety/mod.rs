//! Safety interlock
//!
//! Derives heater permission from the battery voltage and the target
//! temperature from the grip sensor, once per control tick.

pub mod interlock;

pub use interlock::{
    BatteryEdge, HeaterPermit, SafetyDecision, SafetyInterlock, BATTERY_DEBOUNCE_TICKS,
};
