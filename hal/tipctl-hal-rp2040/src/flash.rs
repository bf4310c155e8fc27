//! Flash configuration store
//!
//! Uses sequential-storage for wear-leveled key-value storage
//! in the last 64KB of flash. The configuration record is stored as
//! postcard bytes under `StorageKey::Config`.

use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map::{self, SerializationError};
use tipctl_core::config::codec::{self, MAX_ENCODED_LEN};
use tipctl_core::config::Config;
use tipctl_core::traits::{ConfigError, ConfigStore};

/// Flash storage configuration
pub const FLASH_SIZE: usize = 2 * 1024 * 1024; // 2MB on the Pico
pub const CONFIG_PARTITION_SIZE: usize = 64 * 1024;
pub const CONFIG_PARTITION_START: usize = FLASH_SIZE - CONFIG_PARTITION_SIZE;

/// Flash range for the config partition
pub const CONFIG_RANGE: core::ops::Range<u32> = (CONFIG_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Scratch buffer for sequential-storage item headers plus the record
const DATA_BUFFER_LEN: usize = 128;

/// Storage keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// User configuration (binary postcard format)
    Config = 0,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl map::Key for StorageKey {
    fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let slot = buffer.first_mut().ok_or(SerializationError::BufferTooSmall)?;
        *slot = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(buffer: &[u8]) -> Result<(Self, usize), SerializationError> {
        match buffer.first() {
            Some(0) => Ok((StorageKey::Config, 1)),
            Some(_) => Err(SerializationError::InvalidFormat),
            None => Err(SerializationError::BufferTooSmall),
        }
    }
}

/// Errors from flash operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Storage operation failed
    Storage,
    /// Key not found
    NotFound,
    /// Buffer too small
    BufferTooSmall,
}

impl From<FlashError> for ConfigError {
    fn from(e: FlashError) -> Self {
        match e {
            FlashError::NotFound => ConfigError::NotFound,
            FlashError::BufferTooSmall => ConfigError::Corrupted,
            FlashError::Storage => ConfigError::Storage,
        }
    }
}

/// Configuration store in the last 64KB of flash
pub struct FlashConfigStore<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> FlashConfigStore<'d> {
    /// Create a new flash store
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }

    /// Read a value by key into the provided buffer
    ///
    /// Returns the number of bytes read.
    pub async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        let mut data_buffer = [0u8; DATA_BUFFER_LEN];

        let result = map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            CONFIG_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
        )
        .await;

        match result {
            Ok(Some(data)) => {
                let target = buffer.get_mut(..data.len()).ok_or(FlashError::BufferTooSmall)?;
                target.copy_from_slice(data);
                Ok(data.len())
            }
            Ok(None) => Err(FlashError::NotFound),
            Err(_) => Err(FlashError::Storage),
        }
    }

    /// Write a value by key
    pub async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        let mut data_buffer = [0u8; DATA_BUFFER_LEN];

        map::store_item(
            &mut self.flash,
            CONFIG_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
            &data,
        )
        .await
        .map_err(|_| FlashError::Storage)
    }
}

impl ConfigStore for FlashConfigStore<'_> {
    async fn load(&mut self) -> Result<Config, ConfigError> {
        let mut buffer = [0u8; MAX_ENCODED_LEN];
        let len = self.read(StorageKey::Config, &mut buffer).await?;
        codec::decode(&buffer[..len])
    }

    async fn save(&mut self, config: &Config) -> Result<(), ConfigError> {
        let mut buffer = [0u8; MAX_ENCODED_LEN];
        let bytes = codec::encode(config, &mut buffer)?;
        self.write(StorageKey::Config, bytes).await?;
        Ok(())
    }

    async fn reset(&mut self) -> Config {
        let defaults = Config::default();
        if let Err(_e) = self.save(&defaults).await {
            #[cfg(feature = "defmt")]
            defmt::warn!("Writing default config failed: {:?}", _e);
        }
        defaults
    }
}
