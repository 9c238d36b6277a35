// ABOUTME: Unified error types re-exported from exercise-catalog-core
// ABOUTME: Keeps crate::errors paths stable for the binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

pub use exercise_catalog_core::errors::*;
