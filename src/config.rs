//! Configuration management for the user registry
//!
//! Loads registration input limits from config.toml with environment
//! overrides. A `Default` impl covers library and test use where no
//! config file is present.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Limits applied to registration input before it reaches the store
#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    /// Maximum accepted username length in bytes
    pub max_username_length: usize,

    /// Maximum accepted email length in bytes
    pub max_email_length: usize,

    /// Maximum accepted password length in bytes
    pub max_password_length: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_username_length: 32,
            max_email_length: 254,
            max_password_length: 128,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("USER_REGISTRY").separator("_"))
            .build()?;

        let config: RegistryConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_username_length == 0 {
            return Err(config::ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        if self.max_email_length == 0 {
            return Err(config::ConfigError::Message(
                "max_email_length must be greater than 0".into(),
            ));
        }

        if self.max_password_length == 0 {
            return Err(config::ConfigError::Message(
                "max_password_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
