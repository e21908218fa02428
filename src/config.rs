//! Runtime configuration
//!
//! Read from the environment (a `.env` file is loaded first by the binary):
//! - `DATABASE_URL`: Postgres connection string; unset means static-only mode
//! - `CONTENT_SLUG_PREFIX`: prefix of legacy composite slugs (default `abogados`)
//! - `DB_MAX_CONNECTIONS`: pool size (default 10)
//! - `DB_ACQUIRE_TIMEOUT_SECS`: pool acquire timeout (default 30)

use crate::catalog::DEFAULT_SLUG_PREFIX;
use crate::error::{ContentError, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub slug_prefix: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            slug_prefix: DEFAULT_SLUG_PREFIX.to_string(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, so tests do not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: value("DATABASE_URL"),
            slug_prefix: value("CONTENT_SLUG_PREFIX").unwrap_or(defaults.slug_prefix),
            max_connections: parse_or(value("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout: Duration::from_secs(parse_or(
                value("DB_ACQUIRE_TIMEOUT_SECS"),
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )?),
        })
    }

    pub fn is_offline(&self) -> bool {
        self.database_url.is_none()
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &str, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ContentError::Config(format!("{} must be a number, got '{}'", key, raw))),
    }
}
