//! Configuration management for the credential store
//!
//! Hashing cost and input limits are read from built-in defaults, an optional
//! TOML file and `CRED_STORE_*` environment variables, in that order.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default configuration file, resolved relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Complete store configuration
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub hashing: HashingConfig,
    pub limits: InputLimits,
}

/// Argon2id cost parameters used when producing new hashes
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HashingConfig {
    /// Memory cost in KiB
    /// Environment: CRED_STORE_HASHING__MEMORY_COST_KIB
    pub memory_cost_kib: u32,

    /// Number of passes over memory
    /// Environment: CRED_STORE_HASHING__TIME_COST
    pub time_cost: u32,

    /// Lanes
    /// Environment: CRED_STORE_HASHING__PARALLELISM
    pub parallelism: u32,

    /// Ceilings a stored hash may request during verification
    /// Environment: CRED_STORE_HASHING__MAX_MEMORY_COST_KIB
    pub max_memory_cost_kib: u32,
    pub max_time_cost: u32,
    pub max_parallelism: u32,
}

/// Upper bounds on credential sizes. `max_password_length` caps what the
/// store will hash; `max_username_length` is checked only by the opt-in
/// record validation.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputLimits {
    pub max_username_length: usize,
    pub max_password_length: usize,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: 19 * 1024,
            time_cost: 2,
            parallelism: 1,
            max_memory_cost_kib: 64 * 1024,
            max_time_cost: 10,
            max_parallelism: 4,
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_username_length: 64,
            max_password_length: 1024,
        }
    }
}

impl StoreConfig {
    /// Load configuration from `config.toml` with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from the given file with environment overrides.
    /// A missing file is not an error; the defaults apply instead.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let defaults = StoreConfig::default();

        let settings = Config::builder()
            .set_default(
                "hashing.memory_cost_kib",
                i64::from(defaults.hashing.memory_cost_kib),
            )?
            .set_default("hashing.time_cost", i64::from(defaults.hashing.time_cost))?
            .set_default("hashing.parallelism", i64::from(defaults.hashing.parallelism))?
            .set_default(
                "hashing.max_memory_cost_kib",
                i64::from(defaults.hashing.max_memory_cost_kib),
            )?
            .set_default(
                "hashing.max_time_cost",
                i64::from(defaults.hashing.max_time_cost),
            )?
            .set_default(
                "hashing.max_parallelism",
                i64::from(defaults.hashing.max_parallelism),
            )?
            .set_default(
                "limits.max_username_length",
                defaults.limits.max_username_length as i64,
            )?
            .set_default(
                "limits.max_password_length",
                defaults.limits.max_password_length as i64,
            )?
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix("CRED_STORE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.hashing.time_cost == 0 {
            return Err(config::ConfigError::Message(
                "hashing.time_cost must be greater than 0".into(),
            ));
        }

        if self.hashing.parallelism == 0 {
            return Err(config::ConfigError::Message(
                "hashing.parallelism must be greater than 0".into(),
            ));
        }

        // Argon2 needs at least 8 KiB per lane
        if self.hashing.memory_cost_kib < 8 * self.hashing.parallelism {
            return Err(config::ConfigError::Message(format!(
                "hashing.memory_cost_kib must be at least {} for {} lane(s)",
                8 * self.hashing.parallelism,
                self.hashing.parallelism
            )));
        }

        if self.hashing.max_memory_cost_kib < self.hashing.memory_cost_kib
            || self.hashing.max_time_cost < self.hashing.time_cost
            || self.hashing.max_parallelism < self.hashing.parallelism
        {
            return Err(config::ConfigError::Message(
                "verification ceilings must not be below the hashing costs".into(),
            ));
        }

        if self.limits.max_username_length == 0 || self.limits.max_password_length == 0 {
            return Err(config::ConfigError::Message(
                "input limits must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
