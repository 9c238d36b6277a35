// ABOUTME: Core data models for the exercise catalog
// ABOUTME: Re-exports the source record, the persisted row, and the stored-row view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! # Data Models
//!
//! - `SourceExercise`: one record of the curated exercise JSON file
//! - `ExerciseRow`: the row shape written to the exercise table
//! - `StoredExercise`: the columns read back when searching by name
//!
//! `exercise_id` is the join key between all three.

mod exercise;

pub use exercise::{gif_path_for, ExerciseRow, SourceExercise, StoredExercise};
