// ABOUTME: Unified error handling for the exercise catalog admin tools
// ABOUTME: Defines error codes, the AppError type, and store-specific errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! # Unified Error Handling System
//!
//! Every failure the loader and activator can observe is classified by an
//! [`ErrorCode`]. The code decides whether a failure aborts the run
//! ([`ErrorCode::is_fatal`]) or is isolated to a single batch or name and
//! folded into the run summary.

/// Structured errors returned by exercise store implementations
pub mod database;

pub use database::DatabaseError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used by both tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Configuration
    /// A required environment variable is not set
    ConfigMissing,
    /// A configuration value is present but unusable
    ConfigInvalid,

    // Input file
    /// The exercise file could not be read
    FileRead,
    /// The exercise file is not a JSON array of exercise objects
    Parse,

    // Remote store
    /// The store could not be reached or rejected the access key at startup
    StoreConnectivity,
    /// A select/count query failed
    StoreQuery,
    /// A batch insert failed
    StoreInsert,
    /// A single-row update failed
    StoreUpdate,

    /// Anything else
    InternalError,
}

impl ErrorCode {
    /// Whether an error of this kind aborts the whole run
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            Self::ConfigMissing
                | Self::ConfigInvalid
                | Self::FileRead
                | Self::Parse
                | Self::StoreConnectivity
                | Self::InternalError
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::FileRead => "Failed to read exercise file",
            Self::Parse => "Failed to parse exercise file",
            Self::StoreConnectivity => "Exercise store is unreachable",
            Self::StoreQuery => "Exercise store query failed",
            Self::StoreInsert => "Exercise batch insert failed",
            Self::StoreUpdate => "Exercise update failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ConfigMissing => "CONFIG_MISSING",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::FileRead => "FILE_READ",
            Self::Parse => "PARSE",
            Self::StoreConnectivity => "STORE_CONNECTIVITY",
            Self::StoreQuery => "STORE_QUERY",
            Self::StoreInsert => "STORE_INSERT",
            Self::StoreUpdate => "STORE_UPDATE",
            Self::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(name)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether this error aborts the run
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Required environment variable is not set
    pub fn config_missing(variable: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("environment variable {} is not set", variable.into()),
        )
    }

    /// Configuration value is present but invalid
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Exercise file could not be read
    pub fn file_read(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::new(ErrorCode::FileRead, format!("{path}: {source}")).with_source(source)
    }

    /// Exercise file is not valid exercise JSON
    pub fn parse(path: impl fmt::Display, source: serde_json::Error) -> Self {
        Self::new(ErrorCode::Parse, format!("{path}: {source}")).with_source(source)
    }

    /// Store unreachable at startup
    pub fn store_connectivity(source: DatabaseError) -> Self {
        Self::new(ErrorCode::StoreConnectivity, source.to_string()).with_source(source)
    }

    /// Select or count query failed
    pub fn store_query(source: DatabaseError) -> Self {
        Self::new(ErrorCode::StoreQuery, source.to_string()).with_source(source)
    }

    /// Batch insert failed
    pub fn store_insert(source: DatabaseError) -> Self {
        Self::new(ErrorCode::StoreInsert, source.to_string()).with_source(source)
    }

    /// Single-row update failed
    pub fn store_update(source: DatabaseError) -> Self {
        Self::new(ErrorCode::StoreUpdate, source.to_string()).with_source(source)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(ErrorCode::ConfigMissing.is_fatal());
        assert!(ErrorCode::FileRead.is_fatal());
        assert!(ErrorCode::Parse.is_fatal());
        assert!(ErrorCode::StoreConnectivity.is_fatal());

        assert!(!ErrorCode::StoreQuery.is_fatal());
        assert!(!ErrorCode::StoreInsert.is_fatal());
        assert!(!ErrorCode::StoreUpdate.is_fatal());
    }

    #[test]
    fn test_app_error_display_and_source() {
        let error = AppError::store_insert(DatabaseError::RequestRejected {
            status: 409,
            body: "duplicate key".into(),
        });

        assert_eq!(error.code, ErrorCode::StoreInsert);
        assert!(!error.is_fatal());
        assert!(error.to_string().starts_with("Exercise batch insert failed"));
        assert!(error.to_string().contains("409"));
        assert!(error.source.is_some());
    }

    #[test]
    fn test_config_missing_names_variable() {
        let error = AppError::config_missing("SUPABASE_URL");
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert!(error.message.contains("SUPABASE_URL"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::StoreConnectivity).unwrap();
        assert_eq!(json, "\"STORE_CONNECTIVITY\"");
        assert_eq!(ErrorCode::StoreConnectivity.to_string(), "STORE_CONNECTIVITY");
    }
}
