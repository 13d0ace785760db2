use std::{path::PathBuf, time::Duration};

use crate::error::config::ConfigError;

static DEFAULT_USER_AGENT: &str = concat!("apphub/", env!("CARGO_PKG_VERSION"));
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    /// Base URL of the downstream sync API, notified after each persisted crawl.
    pub data_sync_api: String,
    /// Root directory downloaded images are stored under.
    pub images_store: PathBuf,
    pub user_agent: String,
    /// Timeout applied to image downloads and sync API calls.
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "HTTP_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            data_sync_api: required("DATA_SYNC_API")?,
            images_store: PathBuf::from(required("IMAGES_STORE")?),
            user_agent: lookup("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            http_timeout,
        })
    }
}
