// ABOUTME: Environment-only server configuration with validated defaults
// ABOUTME: Reads HTTP port, database URL, plan limits, and cache sizing from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Environment-based configuration
//!
//! All settings come from environment variables with sensible defaults so
//! the server runs out of the box against a local `SQLite` file.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Default HTTP port for the JSON API
const DEFAULT_HTTP_PORT: u16 = 8084;

/// Default database location
const DEFAULT_DATABASE_URL: &str = "sqlite:data/souschef.db";

/// Upper bound on requested plan length, enforced at the request boundary
const DEFAULT_MAX_PLAN_DAYS: u32 = 30;

/// Default capacity of the export artifact cache
const DEFAULT_EXPORT_CACHE_ENTRIES: usize = 256;

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Database URL (`SQLite` path or `sqlite::memory:`)
    pub database_url: String,
    /// Maximum number of days a single meal plan may cover
    pub max_plan_days: u32,
    /// Bounded size of the export artifact cache
    pub export_cache_entries: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            max_plan_days: DEFAULT_MAX_PLAN_DAYS,
            export_cache_entries: DEFAULT_EXPORT_CACHE_ENTRIES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a variable is present but
    /// unparseable, or when a parsed value is out of range.
    pub fn from_env() -> AppResult<Self> {
        let http_port = parse_var("HTTP_PORT", DEFAULT_HTTP_PORT)?;
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let max_plan_days = parse_var("MAX_PLAN_DAYS", DEFAULT_MAX_PLAN_DAYS)?;
        let export_cache_entries =
            parse_var("EXPORT_CACHE_ENTRIES", DEFAULT_EXPORT_CACHE_ENTRIES)?;

        if max_plan_days == 0 {
            return Err(AppError::config("MAX_PLAN_DAYS must be at least 1"));
        }
        if export_cache_entries == 0 {
            return Err(AppError::config("EXPORT_CACHE_ENTRIES must be at least 1"));
        }

        let config = Self {
            http_port,
            database_url,
            max_plan_days,
            export_cache_entries,
        };

        info!(
            http_port = config.http_port,
            database_url = %config.database_url,
            max_plan_days = config.max_plan_days,
            "configuration loaded from environment"
        );

        Ok(config)
    }
}

/// Parse an environment variable, falling back to a default when unset
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {name} value: {raw}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(config.max_plan_days, 30);
        assert!(config.export_cache_entries > 0);
    }
}
