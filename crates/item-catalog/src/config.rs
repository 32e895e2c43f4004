//! # Configuration
//!
//! Settings for the catalog runtime, read from TOML. Every field has a default, so an
//! empty file (or no file at all) yields a working configuration:
//!
//! ```toml
//! [store]
//! buffer_size = 32
//!
//! [messaging]
//! product_topic = "product"
//! separator = "."
//! unit_available = "unit_available"
//! channel_capacity = 64
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! [`CatalogConfig::load`] reads the file named by the `CATALOG_CONFIG` environment
//! variable, or falls back to the defaults when it is unset.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub store: StoreConfig,
    pub messaging: MessagingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the item actor's request channel.
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    pub product_topic: String,
    pub separator: String,
    pub unit_available: String,
    /// Events buffered per subscriber of the in-process publisher.
    pub channel_capacity: usize,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            product_topic: "product".to_string(),
            separator: ".".to_string(),
            unit_available: "unit_available".to_string(),
            channel_capacity: 64,
        }
    }
}

impl MessagingConfig {
    /// Topic for "an item of this product became available", e.g. `product.unit_available`.
    pub fn unit_available_topic(&self) -> String {
        format!(
            "{}{}{}",
            self.product_topic, self.separator, self.unit_available
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Environment variable naming the TOML file [`CatalogConfig::load`] reads.
    pub const PATH_ENV: &'static str = "CATALOG_CONFIG";

    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::from_file(path),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.buffer_size == 0 {
            return Err(invalid("store.buffer_size", "must be greater than zero"));
        }
        if self.messaging.channel_capacity == 0 {
            return Err(invalid(
                "messaging.channel_capacity",
                "must be greater than zero",
            ));
        }
        if self.messaging.product_topic.trim().is_empty() {
            return Err(invalid("messaging.product_topic", "must not be empty"));
        }
        if self.messaging.unit_available.trim().is_empty() {
            return Err(invalid("messaging.unit_available", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compose_topic() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.messaging.unit_available_topic(),
            "product.unit_available"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = CatalogConfig::from_toml_str(
            r#"
            [messaging]
            product_topic = "catalog"
            separator = "-"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.messaging.unit_available_topic(),
            "catalog-unit_available"
        );
        assert_eq!(config.store.buffer_size, 32);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config.messaging.channel_capacity, 64);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = CatalogConfig::from_toml_str("[messaging]\nchannel_capacity = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "messaging.channel_capacity",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = CatalogConfig::from_toml_str("[store\nbuffer_size = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = CatalogConfig::from_file("/definitely/not/here/catalog.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
