//! Application configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable prefix, e.g. `INSURANCE_USERS_FILE`
pub const ENV_PREFIX: &str = "INSURANCE";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Users data file
    pub users_file: PathBuf,
    /// Policies data file
    pub policies_file: PathBuf,
    /// bcrypt cost for new password hashes
    pub hash_cost: u32,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from("data/users.txt"),
            policies_file: PathBuf::from("data/policies.txt"),
            hash_cost: 12,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `INSURANCE_*` environment variables
    ///
    /// Unset variables take their default value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("users_file", defaults.users_file.to_string_lossy().into_owned())?
            .set_default("policies_file", defaults.policies_file.to_string_lossy().into_owned())?
            .set_default("hash_cost", i64::from(defaults.hash_cost))?
            .set_default("log_level", defaults.log_level)?
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Loads configuration, falling back to defaults if the environment is invalid
    pub fn load() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid configuration, using defaults");
            Self::default()
        })
    }
}
