//! Hardware abstraction traits
//!
//! These traits define the interface between the control loop and the
//! collaborators it does not own: tip driver, display, sensing, watchdog,
//! configuration storage and the diagnostic transport.

pub mod diag;
pub mod display;
pub mod heater;
pub mod sensing;
pub mod storage;
pub mod watchdog;

pub use diag::DiagnosticLog;
pub use display::{Glyph, SegmentDisplay, Word};
pub use heater::{Celsius, HeaterOutput, SensorError, TipDriver, TipStatus};
pub use sensing::Sensing;
pub use storage::{ConfigError, ConfigStore};
pub use watchdog::{ResetCause, WatchdogTimer};
