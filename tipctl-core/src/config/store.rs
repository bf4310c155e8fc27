//! Boot-time configuration policy

use super::types::Config;
use crate::traits::{ConfigError, ConfigStore, WatchdogTimer};
use crate::watchdog::WatchdogSupervisor;

/// Where the active configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigSource {
    /// Loaded from the store and valid
    Stored,
    /// Defaults were forced at boot
    Requested,
    /// Store was empty
    Missing,
    /// Stored record was unusable
    Rejected(ConfigError),
}

/// Load the configuration once at boot
///
/// Falls back to the store's known-good defaults when asked to, when
/// nothing is stored, or when the stored record fails to load or validate.
pub async fn load_or_reset<S: ConfigStore>(store: &mut S, force_defaults: bool) -> (Config, ConfigSource) {
    if force_defaults {
        return (store.reset().await, ConfigSource::Requested);
    }

    let error = match store.load().await {
        Ok(config) => match config.validate() {
            Ok(()) => return (config, ConfigSource::Stored),
            Err(e) => e,
        },
        Err(e) => e,
    };

    let source = match error {
        ConfigError::NotFound => ConfigSource::Missing,
        e => ConfigSource::Rejected(e),
    };
    (store.reset().await, source)
}

/// Persist a configuration committed from the menu
///
/// The write runs under the long watchdog timeout since a flash erase can
/// outlast the short one. The previous timeout is re-armed afterwards,
/// whether or not the write succeeded.
pub async fn commit<S: ConfigStore, W: WatchdogTimer>(
    store: &mut S,
    supervisor: &mut WatchdogSupervisor<W>,
    config: &Config,
) -> Result<(), ConfigError> {
    let previous = supervisor.timeout();
    supervisor.arm_long();
    let result = store.save(config).await;
    supervisor.arm(previous);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ResetCause;
    use crate::watchdog::{Startup, WatchdogTimeout, WATCHDOG_LONG_MS, WATCHDOG_SHORT_MS};
    use core::cell::Cell;
    use embassy_futures::block_on;

    struct MockStore {
        stored: Result<Config, ConfigError>,
        resets: u8,
    }

    impl ConfigStore for MockStore {
        async fn load(&mut self) -> Result<Config, ConfigError> {
            self.stored
        }

        async fn save(&mut self, config: &Config) -> Result<(), ConfigError> {
            self.stored = Ok(*config);
            Ok(())
        }

        async fn reset(&mut self) -> Config {
            self.resets += 1;
            self.stored = Ok(Config::default());
            Config::default()
        }
    }

    fn custom() -> Config {
        Config {
            default_temp: 340,
            rest_temp: 180,
            ..Config::default()
        }
    }

    #[test]
    fn test_loads_stored_config() {
        let mut store = MockStore {
            stored: Ok(custom()),
            resets: 0,
        };
        let (config, source) = block_on(load_or_reset(&mut store, false));
        assert_eq!(config, custom());
        assert_eq!(source, ConfigSource::Stored);
        assert_eq!(store.resets, 0);
    }

    #[test]
    fn test_forced_defaults() {
        let mut store = MockStore {
            stored: Ok(custom()),
            resets: 0,
        };
        let (config, source) = block_on(load_or_reset(&mut store, true));
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Requested);
        assert_eq!(store.resets, 1);
    }

    #[test]
    fn test_missing_config() {
        let mut store = MockStore {
            stored: Err(ConfigError::NotFound),
            resets: 0,
        };
        let (config, source) = block_on(load_or_reset(&mut store, false));
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Missing);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut store = MockStore {
            stored: Ok(Config {
                default_temp: 900,
                ..Config::default()
            }),
            resets: 0,
        };
        let (config, source) = block_on(load_or_reset(&mut store, false));
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Rejected(ConfigError::Invalid));
        assert_eq!(store.resets, 1);
    }

    #[test]
    fn test_corrupted_config_rejected() {
        let mut store = MockStore {
            stored: Err(ConfigError::Corrupted),
            resets: 0,
        };
        let (_, source) = block_on(load_or_reset(&mut store, false));
        assert_eq!(source, ConfigSource::Rejected(ConfigError::Corrupted));
    }

    // Watchdog whose armed timeout is visible to the store during a save
    struct SharedWatchdog<'a> {
        timeout_ms: &'a Cell<u32>,
    }

    impl WatchdogTimer for SharedWatchdog<'_> {
        fn start(&mut self, timeout_ms: u32) {
            self.timeout_ms.set(timeout_ms);
        }

        fn feed(&mut self) {}

        fn reset_cause(&self) -> ResetCause {
            ResetCause::PowerOn
        }
    }

    struct TimedStore<'a> {
        timeout_ms: &'a Cell<u32>,
        saved_under: Option<u32>,
        fail: bool,
    }

    impl ConfigStore for TimedStore<'_> {
        async fn load(&mut self) -> Result<Config, ConfigError> {
            Err(ConfigError::NotFound)
        }

        async fn save(&mut self, _config: &Config) -> Result<(), ConfigError> {
            self.saved_under = Some(self.timeout_ms.get());
            if self.fail {
                Err(ConfigError::Storage)
            } else {
                Ok(())
            }
        }

        async fn reset(&mut self) -> Config {
            Config::default()
        }
    }

    fn running_supervisor(timeout_ms: &Cell<u32>) -> WatchdogSupervisor<SharedWatchdog<'_>> {
        let Startup::Normal(mut supervisor) = Startup::check(SharedWatchdog { timeout_ms }) else {
            panic!("clean reset expected");
        };
        supervisor.arm_short();
        supervisor
    }

    #[test]
    fn test_commit_saves_under_long_timeout() {
        let timeout_ms = Cell::new(0);
        let mut supervisor = running_supervisor(&timeout_ms);
        let mut store = TimedStore {
            timeout_ms: &timeout_ms,
            saved_under: None,
            fail: false,
        };

        let result = block_on(commit(&mut store, &mut supervisor, &custom()));

        assert_eq!(result, Ok(()));
        assert_eq!(store.saved_under, Some(WATCHDOG_LONG_MS));
        assert_eq!(timeout_ms.get(), WATCHDOG_SHORT_MS);
        assert_eq!(supervisor.timeout(), WatchdogTimeout::Short);
    }

    #[test]
    fn test_failed_commit_restores_short_timeout() {
        let timeout_ms = Cell::new(0);
        let mut supervisor = running_supervisor(&timeout_ms);
        let mut store = TimedStore {
            timeout_ms: &timeout_ms,
            saved_under: None,
            fail: true,
        };

        let result = block_on(commit(&mut store, &mut supervisor, &custom()));

        assert_eq!(result, Err(ConfigError::Storage));
        assert_eq!(store.saved_under, Some(WATCHDOG_LONG_MS));
        assert_eq!(supervisor.timeout(), WatchdogTimeout::Short);
    }
}
