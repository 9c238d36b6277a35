// ABOUTME: Application constants re-exported from exercise-catalog-core
// ABOUTME: Environment variable names, loader defaults, and store wire constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

pub use exercise_catalog_core::constants::*;

/// Service names used in structured logs
pub mod service_names {
    /// Loader binary
    pub const LOAD_EXERCISES: &str = "load-exercises";
    /// Activator binary
    pub const ACTIVATE_EXERCISES: &str = "activate-exercises";
}
