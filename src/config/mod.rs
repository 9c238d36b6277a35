// ABOUTME: Configuration management module for the exercise catalog tools
// ABOUTME: Builds typed store settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors
//! Configuration module
//!
//! All configuration comes from the process environment (plus an optional
//! `.env` file). Values are parsed once into explicit structs that are handed
//! to the store client; nothing reads the environment after startup.

/// Environment-derived store configuration
pub mod environment;

pub use environment::{exercises_file_from_env, load_dotenv, StoreConfig};
