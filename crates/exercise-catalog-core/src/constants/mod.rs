// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, loader defaults, and store wire constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Store wire-level constants (paths, headers, columns)
pub mod store;

/// Environment variable names read by both tools
pub mod env_config {
    /// Base URL of the hosted store
    pub const SUPABASE_URL: &str = "SUPABASE_URL";
    /// Base URL fallback used by frontend-oriented `.env` files
    pub const VITE_SUPABASE_URL: &str = "VITE_SUPABASE_URL";
    /// Privileged access key
    pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
    /// Target table name
    pub const EXERCISES_TABLE: &str = "EXERCISES_TABLE";
    /// HTTP request timeout in seconds
    pub const STORE_TIMEOUT_SECS: &str = "STORE_TIMEOUT_SECS";
    /// Input file path for the loader
    pub const EXERCISES_FILE: &str = "EXERCISES_FILE";
}

/// Default values
pub mod defaults {
    /// Default exercise table
    pub const EXERCISES_TABLE: &str = "exercises";
    /// Default input file, relative to the working directory
    pub const EXERCISES_FILE: &str = "data/exercises.json";
    /// Rows per insert call
    pub const BATCH_SIZE: usize = 100;
    /// Pause between consecutive insert calls
    pub const BATCH_DELAY_MS: u64 = 100;
    /// HTTP request timeout
    pub const STORE_TIMEOUT_SECS: u64 = 30;
}

/// Row image path layout
pub mod media {
    /// Directory holding exercise animations
    pub const GIF_DIR: &str = "gifs";
    /// Extension of exercise animations
    pub const GIF_EXTENSION: &str = "gif";
}
