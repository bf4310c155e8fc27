//! Binary encoding of the configuration record (postcard)

use super::types::Config;
use crate::traits::ConfigError;

/// Upper bound of an encoded `Config`
pub const MAX_ENCODED_LEN: usize = 32;

/// Serialize a configuration into `buffer`, returning the used prefix
pub fn encode<'b>(config: &Config, buffer: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
    postcard::to_slice(config, buffer).map_err(|_| ConfigError::Storage)
}

/// Deserialize and validate a stored configuration
pub fn decode(bytes: &[u8]) -> Result<Config, ConfigError> {
    let config: Config = postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode(&[]), Err(ConfigError::Corrupted));
    }

    #[test]
    fn test_decode_validates() {
        let config = Config {
            rest_temp: 10,
            ..Config::default()
        };
        let mut buffer = [0u8; MAX_ENCODED_LEN];
        let bytes = encode(&config, &mut buffer).unwrap();
        assert_eq!(decode(bytes), Err(ConfigError::Invalid));
    }

    #[test]
    fn test_encoded_len_fits() {
        let config = Config {
            default_temp: -300,
            min_temp: i16::MIN,
            max_temp: i16::MAX,
            rest_temp: i16::MIN,
            ..Config::default()
        };
        let mut buffer = [0u8; MAX_ENCODED_LEN];
        assert!(encode(&config, &mut buffer).is_ok());
    }
}
