//! Host configuration parsed from environment variables.
//!
//! The variable names keep the `REACT_APP_` prefix used by existing
//! deployments of the viewer, so one `.env` file configures either build.

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const DEFAULT_PORT: u16 = 3000;

pub const API_URL_VAR: &str = "REACT_APP_API_URL";
pub const AWS_REGION_VAR: &str = "REACT_APP_AWS_REGION";
pub const BUCKET_NAME_VAR: &str = "REACT_APP_S3_BUCKET_NAME";
pub const PORT_VAR: &str = "PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
}

/// Catalog backend settings for the product fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
}

/// Object-store settings for the listing fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub region: String,
    /// Unset means the listing is sent without a bucket and fails upstream.
    pub bucket_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `REACT_APP_API_URL`: default `http://localhost:8080`
    /// - `REACT_APP_AWS_REGION`: default `us-east-1`
    /// - `REACT_APP_S3_BUCKET_NAME`: no default
    /// - `PORT`: default 3000
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env_non_empty(API_URL_VAR)
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let region = env_non_empty(AWS_REGION_VAR).unwrap_or_else(|| DEFAULT_AWS_REGION.to_owned());
        let bucket_name = env_non_empty(BUCKET_NAME_VAR);
        let port = parse_port(env_non_empty(PORT_VAR).as_deref())?;

        Ok(Self { port, catalog: CatalogConfig { api_url }, storage: StorageConfig { region, bucket_name } })
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { var: PORT_VAR, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
