// ABOUTME: Main library entry point for the exercise catalog admin tools
// ABOUTME: Shared by the load-exercises and activate-exercises binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

#![deny(unsafe_code)]

//! # Exercise Catalog
//!
//! Two one-shot admin tools for the fitness app's exercise table:
//!
//! - **`load-exercises`** reads the curated exercise JSON file, reshapes each
//!   record into a table row, skips identifiers already stored, and inserts the
//!   rest in fixed-size batches with a pause between batches.
//! - **`activate-exercises`** walks a curated list of exercise names and flips
//!   the active flag on the first inactive row whose name contains each one.
//!
//! ## Architecture
//!
//! - **Config**: store credentials and loader settings from the environment
//! - **Database**: the `ExerciseRepository` trait with a PostgREST client and
//!   an in-memory store
//! - **Loader** / **Activator**: the two flows, each folding per-item results
//!   into a summary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use exercise_catalog::config::environment::StoreConfig;
//! use exercise_catalog::database::PostgrestExerciseStore;
//! use exercise_catalog::loader::{read_exercise_file, ExerciseLoader, LoaderSettings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PostgrestExerciseStore::new(StoreConfig::from_env()?)?;
//! let records = read_exercise_file("data/exercises.json")?;
//!
//! let summary = ExerciseLoader::new(&store, LoaderSettings::default())
//!     .run(records)
//!     .await;
//! println!("inserted {} rows", summary.inserted);
//! # Ok(())
//! # }
//! ```

/// Curated exercise activation flow
pub mod activator;

/// Configuration management from the process environment
pub mod config;

/// Application constants (re-exported from the core crate)
pub mod constants;

/// Exercise store abstraction and implementations
pub mod database;

/// Unified error handling (re-exported from the core crate)
pub mod errors;

/// Bulk exercise loading flow
pub mod loader;

/// Logging configuration and structured logging setup
pub mod logging;

/// Exercise data models (re-exported from the core crate)
pub mod models;
