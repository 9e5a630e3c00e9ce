//! services/app/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The
//! `.env` file is used for local development. The administrative credential
//! pair lives here, never in domain logic; the embedding host's ambient
//! identity is passed the same way because the host writes it into the
//! process environment before the application loads.

use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: Level,
    pub admin_login: String,
    pub admin_password: String,
    pub host_user_id: Option<String>,
    pub host_user_name: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for
    /// development, but this is skipped in test environments to ensure
    /// tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let data_dir = std::env::var("BOOKBITES_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // The administrative credential pair is required; there is no
        // compiled-in fallback.
        let admin_login = std::env::var("BOOKBITES_ADMIN_LOGIN")
            .map_err(|_| ConfigError::MissingVar("BOOKBITES_ADMIN_LOGIN".to_string()))?;
        let admin_password = std::env::var("BOOKBITES_ADMIN_PASSWORD")
            .map_err(|_| ConfigError::MissingVar("BOOKBITES_ADMIN_PASSWORD".to_string()))?;

        // Ambient identity from the embedding host, when present.
        let host_user_id = std::env::var("BOOKBITES_HOST_USER_ID").ok();
        let host_user_name = std::env::var("BOOKBITES_HOST_USER_NAME").ok();

        Ok(Self {
            data_dir,
            log_level,
            admin_login,
            admin_password,
            host_user_id,
            host_user_name,
        })
    }
}
