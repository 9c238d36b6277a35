// ABOUTME: Exercise data models re-exported from exercise-catalog-core
// ABOUTME: Source records, table rows, and stored-row views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

pub use exercise_catalog_core::models::*;
