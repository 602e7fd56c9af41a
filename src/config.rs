use std::env;

use anyhow::{Result, bail};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    /// Mount point of the payroll routes. The OpenAPI paths in `api::payroll`
    /// are written against the default `/api` and do not follow this value.
    pub api_prefix: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://payroll.db".to_string()); // file next to the binary
        if database_url.trim().is_empty() {
            bail!("DATABASE_URL must not be empty");
        }

        let api_prefix = lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string());
        let api_prefix = api_prefix.trim_end_matches('/').to_string();
        if !api_prefix.is_empty() && !api_prefix.starts_with('/') {
            bail!("API_PREFIX must start with '/', got {api_prefix:?}");
        }

        Ok(Self {
            database_url,
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            api_prefix,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }
}
