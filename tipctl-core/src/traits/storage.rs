//! Persistent configuration storage trait

use core::future::Future;

use crate::config::Config;

/// Errors from configuration persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Nothing stored yet
    NotFound,
    /// Flash or storage layer failure
    Storage,
    /// Stored bytes could not be decoded
    Corrupted,
    /// Stored layout version is not the one this firmware writes
    VersionMismatch,
    /// Decoded values break a configuration invariant
    Invalid,
}

/// Configuration store
///
/// Implementations keep a single `Config` record in non-volatile memory.
pub trait ConfigStore {
    /// Load the stored configuration
    fn load(&mut self) -> impl Future<Output = Result<Config, ConfigError>>;

    /// Persist a configuration
    fn save(&mut self, config: &Config) -> impl Future<Output = Result<(), ConfigError>>;

    /// Replace the stored configuration with known-good defaults
    ///
    /// Always returns the defaults, even if writing them failed.
    fn reset(&mut self) -> impl Future<Output = Config>;
}
