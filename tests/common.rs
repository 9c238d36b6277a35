// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and exercise record/row builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `exercise_catalog`

use exercise_catalog::models::{ExerciseRow, SourceExercise};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Source record with one target muscle and one instruction
pub fn source(id: &str, name: &str) -> SourceExercise {
    SourceExercise {
        exercise_id: id.to_owned(),
        name: name.to_owned(),
        gif_url: Some(format!("https://static.example.com/{id}.gif")),
        target_muscles: Some(vec!["chest".to_owned()]),
        body_parts: Some(vec!["upper arms".to_owned()]),
        equipments: Some(vec!["body weight".to_owned()]),
        secondary_muscles: None,
        instructions: Some(vec!["step 1".to_owned()]),
    }
}

/// `count` source records with identifiers `ex0000`, `ex0001`, ...
pub fn sources(count: usize) -> Vec<SourceExercise> {
    (0..count)
        .map(|i| source(&format!("ex{i:04}"), &format!("exercise {i}")))
        .collect()
}

/// Stored row with the given active flag
pub fn stored_row(id: &str, name: &str, is_active: bool) -> ExerciseRow {
    ExerciseRow {
        is_active,
        ..ExerciseRow::from(source(id, name))
    }
}
