//! CLI configuration, loaded from the environment with CLI overrides.

use anyhow::Result;
use std::env;

/// Runtime configuration for the scout CLI.
pub struct AppConfig {
    pub database_url: String,
    pub log_file: String,
}

impl AppConfig {
    /// Loads configuration from the environment. A `database_url` argument
    /// takes precedence over `DATABASE_URL`; the log file comes from
    /// `SCOUT_LOG_FILE`.
    pub fn load(database_url: Option<String>) -> Result<Self> {
        let database_url = database_url.unwrap_or_else(|| {
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:scout.db".to_string())
        });
        let log_file =
            env::var("SCOUT_LOG_FILE").unwrap_or_else(|_| "logs/scout-engine.log".to_string());

        Ok(Self {
            database_url,
            log_file,
        })
    }
}
