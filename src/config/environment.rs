// ABOUTME: Environment configuration for the remote exercise store
// ABOUTME: Parses base URL, service key, table name, and timeout with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! Environment-based configuration

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Connection settings for the hosted exercise store
#[derive(Clone)]
pub struct StoreConfig {
    /// Project base URL (scheme and host, optionally a path prefix)
    pub base_url: Url,
    /// Privileged access key sent on every request
    pub service_key: String,
    /// Exercise table name
    pub table: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url.as_str())
            .field("service_key", &"[REDACTED]")
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, reading `.env` first if present
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the base URL or service key is unset and
    /// `ConfigInvalid` when a value cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`StoreConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = get(env_config::SUPABASE_URL)
            .or_else(|| get(env_config::VITE_SUPABASE_URL))
            .ok_or_else(|| AppError::config_missing(env_config::SUPABASE_URL))?;
        let service_key = get(env_config::SUPABASE_SERVICE_ROLE_KEY)
            .ok_or_else(|| AppError::config_missing(env_config::SUPABASE_SERVICE_ROLE_KEY))?;

        let table = get(env_config::EXERCISES_TABLE)
            .unwrap_or_else(|| defaults::EXERCISES_TABLE.to_owned());

        let timeout_secs = match get(env_config::STORE_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::config_invalid(format!(
                    "{} must be a whole number of seconds: {e}",
                    env_config::STORE_TIMEOUT_SECS
                ))
            })?,
            None => defaults::STORE_TIMEOUT_SECS,
        };

        let config = Self {
            base_url: parse_base_url(raw_url.trim())?,
            service_key: service_key.trim().to_owned(),
            table: table.trim().to_owned(),
            timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero timeout or a table name that is not a
    /// plain identifier
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout.is_zero() {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than 0",
                env_config::STORE_TIMEOUT_SECS
            )));
        }

        let table_ok = !self.table.is_empty()
            && self
                .table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !table_ok {
            return Err(AppError::config_invalid(format!(
                "{} must contain only letters, digits, and underscores",
                env_config::EXERCISES_TABLE
            )));
        }

        Ok(())
    }
}

fn parse_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw).map_err(|e| {
        AppError::config_invalid(format!("{} is not a valid URL: {e}", env_config::SUPABASE_URL))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "{} must use http or https, got {}",
            env_config::SUPABASE_URL,
            url.scheme()
        )));
    }

    // Url::join replaces the last segment unless the path ends with a slash
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Load `.env` from the working directory (or a parent) into the process environment
///
/// Variables already set take precedence. Call before logging is initialized
/// so `RUST_LOG` and `LOG_FORMAT` from the file apply.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {e}"),
    }
}

/// Resolve the loader input file: explicit override, then `EXERCISES_FILE`, then the default
#[must_use]
pub fn exercises_file_from_env(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(|| {
            env::var(env_config::EXERCISES_FILE)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(defaults::EXERCISES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service-key"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://project.supabase.co/");
        assert_eq!(config.service_key, "service-key");
        assert_eq!(config.table, "exercises");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_url_is_config_missing() {
        let error =
            StoreConfig::from_lookup(lookup_from(&[("SUPABASE_SERVICE_ROLE_KEY", "k")])).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert!(error.message.contains("SUPABASE_URL"));
    }

    #[test]
    fn test_blank_key_is_config_missing() {
        let error = StoreConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "   "),
        ]))
        .unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert!(error.message.contains("SUPABASE_SERVICE_ROLE_KEY"));
    }

    #[test]
    fn test_vite_url_fallback() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("VITE_SUPABASE_URL", "http://localhost:54321"),
            ("SUPABASE_SERVICE_ROLE_KEY", "k"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:54321/");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_scheme = StoreConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "ftp://project.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "k"),
        ]))
        .unwrap_err();
        assert_eq!(bad_scheme.code, ErrorCode::ConfigInvalid);

        let bad_timeout = StoreConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "k"),
            ("STORE_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert_eq!(bad_timeout.code, ErrorCode::ConfigInvalid);

        let bad_table = StoreConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "k"),
            ("EXERCISES_TABLE", "exercises; drop"),
        ]))
        .unwrap_err();
        assert_eq!(bad_table.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "super-secret"),
        ]))
        .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
