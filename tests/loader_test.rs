// ABOUTME: Integration tests for the exercise loader against the in-memory store
// ABOUTME: Covers dedupe, batching, partial failure, pacing, and dry runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, source, sources, stored_row};
use exercise_catalog::database::{ExerciseRepository, InMemoryExerciseStore};
use exercise_catalog::errors::ErrorCode;
use exercise_catalog::loader::{check_connectivity, ExerciseLoader, LoaderSettings};
use exercise_catalog::models::{ExerciseRow, SourceExercise};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

fn settings(batch_size: usize) -> LoaderSettings {
    LoaderSettings {
        batch_size,
        batch_delay: Duration::ZERO,
        dry_run: false,
    }
}

#[tokio::test]
async fn test_single_record_against_empty_store() {
    init_test_logging();
    let store = InMemoryExerciseStore::new();
    let record: SourceExercise = serde_json::from_value(json!({
        "exerciseId": "e1",
        "name": "Push Up",
        "gifUrl": "https://example.com/e1.gif",
        "targetMuscles": ["chest"],
        "bodyParts": [],
        "equipments": [],
        "secondaryMuscles": [],
        "instructions": ["step1"]
    }))
    .unwrap();

    let summary = ExerciseLoader::new(&store, LoaderSettings::default())
        .run(vec![record])
        .await;

    assert_eq!(store.insert_calls().await, vec![1]);
    assert_eq!(
        store.rows().await,
        vec![ExerciseRow {
            exercise_id: "e1".into(),
            name: "Push Up".into(),
            gif_path: "gifs/e1.gif".into(),
            target_muscles: vec!["chest".into()],
            body_parts: vec![],
            equipments: vec![],
            secondary_muscles: vec![],
            instructions: vec!["step1".into()],
            is_active: false,
        }]
    );
    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.batches, 1);
}

#[tokio::test]
async fn test_batches_are_ceil_of_new_rows() {
    init_test_logging();
    let store = InMemoryExerciseStore::new();

    let summary = ExerciseLoader::new(&store, settings(100)).run(sources(250)).await;

    assert_eq!(store.insert_calls().await, vec![100, 100, 50]);
    assert_eq!(summary.batches, 3);
    assert_eq!(summary.inserted, 250);
    assert_eq!(summary.to_insert, 250);
}

#[tokio::test]
async fn test_exact_multiple_of_batch_size() {
    init_test_logging();
    let store = InMemoryExerciseStore::new();

    let summary = ExerciseLoader::new(&store, settings(5)).run(sources(10)).await;

    assert_eq!(store.insert_calls().await, vec![5, 5]);
    assert_eq!(summary.batches, 2);
}

#[tokio::test]
async fn test_second_run_inserts_nothing() {
    init_test_logging();
    let store = InMemoryExerciseStore::new();
    let loader = ExerciseLoader::new(&store, settings(100));

    let first = loader.run(sources(120)).await;
    let calls_after_first = store.insert_calls().await.len();
    let second = loader.run(sources(120)).await;

    assert_eq!(first.inserted, 120);
    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped_existing, 120);
    assert_eq!(second.batches, 0);
    assert_eq!(store.insert_calls().await.len(), calls_after_first);
    assert_eq!(store.rows().await.len(), 120);
}

#[tokio::test]
async fn test_only_new_identifiers_are_inserted() {
    init_test_logging();
    let store = InMemoryExerciseStore::with_rows(vec![
        stored_row("ex0001", "exercise 1", true),
        stored_row("ex0003", "exercise 3", false),
    ]);

    let summary = ExerciseLoader::new(&store, settings(100)).run(sources(5)).await;

    assert_eq!(summary.skipped_existing, 2);
    assert_eq!(summary.inserted, 3);
    assert_eq!(store.insert_calls().await, vec![3]);

    let rows = store.rows().await;
    let ids: Vec<&str> = rows.iter().map(|r| r.exercise_id.as_str()).collect();
    assert_eq!(ids, vec!["ex0001", "ex0003", "ex0000", "ex0002", "ex0004"]);
    // stored rows keep their flag; new rows start inactive
    assert!(rows[0].is_active);
    assert!(rows[2..].iter().all(|r| !r.is_active));
}

#[tokio::test]
async fn test_failed_batch_does_not_stop_later_batches() {
    init_test_logging();
    let store = InMemoryExerciseStore::new().failing_insert_call(1);

    let summary = ExerciseLoader::new(&store, settings(10)).run(sources(35)).await;

    assert_eq!(store.insert_calls().await, vec![10, 10, 10, 5]);
    assert_eq!(summary.batches, 4);
    assert_eq!(summary.failed_batches, 1);
    assert_eq!(summary.failed, 10);
    assert_eq!(summary.inserted, 25);
    assert_eq!(store.rows().await.len(), 25);
}

#[tokio::test]
async fn test_failed_count_sums_failed_batch_sizes() {
    init_test_logging();
    let store = InMemoryExerciseStore::new()
        .failing_insert_call(0)
        .failing_insert_call(3);

    let summary = ExerciseLoader::new(&store, settings(4)).run(sources(14)).await;

    // batches of 4, 4, 4, 2; the first and last fail
    assert_eq!(summary.failed, 6);
    assert_eq!(summary.failed_batches, 2);
    assert_eq!(summary.inserted, 8);
}

#[tokio::test]
async fn test_listing_failure_assumes_empty_store() {
    init_test_logging();
    let store = InMemoryExerciseStore::new().failing_listing();

    let summary = ExerciseLoader::new(&store, settings(100)).run(sources(3)).await;

    assert_eq!(summary.skipped_existing, 0);
    assert_eq!(summary.inserted, 3);
}

#[tokio::test]
async fn test_listing_failure_with_populated_store_counts_rejected_batch() {
    init_test_logging();
    let store = InMemoryExerciseStore::with_rows(vec![stored_row("ex0000", "exercise 0", false)])
        .failing_listing();

    let summary = ExerciseLoader::new(&store, settings(100)).run(sources(3)).await;

    // the unique constraint rejects the whole batch; the run still completes
    assert_eq!(summary.failed, 3);
    assert_eq!(summary.failed_batches, 1);
    assert_eq!(summary.inserted, 0);
}

#[tokio::test]
async fn test_repeated_identifier_in_file_inserted_once() {
    init_test_logging();
    let store = InMemoryExerciseStore::new();
    let records = vec![
        source("a", "Squat"),
        source("b", "Lunge"),
        source("a", "Squat (copy)"),
    ];

    let summary = ExerciseLoader::new(&store, settings(100)).run(records).await;

    assert_eq!(summary.skipped_duplicates, 1);
    assert_eq!(summary.inserted, 2);
    assert_eq!(store.rows().await[0].name, "Squat");
}

#[tokio::test]
async fn test_dry_run_issues_no_inserts() {
    init_test_logging();
    let store = InMemoryExerciseStore::with_rows(vec![stored_row("ex0000", "exercise 0", false)]);
    let loader = ExerciseLoader::new(
        &store,
        LoaderSettings {
            dry_run: true,
            ..settings(2)
        },
    );

    let summary = loader.run(sources(6)).await;

    assert!(store.insert_calls().await.is_empty());
    assert!(summary.dry_run);
    assert_eq!(summary.to_insert, 5);
    assert_eq!(summary.batches, 3);
    assert_eq!(summary.inserted, 0);
}

#[tokio::test(start_paused = true)]
async fn test_pause_between_batches_only() {
    init_test_logging();
    let store = InMemoryExerciseStore::new();
    let loader = ExerciseLoader::new(
        &store,
        LoaderSettings {
            batch_delay: Duration::from_millis(100),
            ..settings(10)
        },
    );

    let started = tokio::time::Instant::now();
    loader.run(sources(30)).await;
    let elapsed = started.elapsed();

    // three batches → two pauses
    assert!(elapsed >= Duration::from_millis(200), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(300), "elapsed {elapsed:?}");
}

#[tokio::test]
async fn test_connectivity_check() {
    init_test_logging();
    let store = InMemoryExerciseStore::with_rows(vec![stored_row("a", "Squat", false)]);
    assert_eq!(check_connectivity(&store).await.unwrap(), 1);

    let unreachable = InMemoryExerciseStore::new().failing_probe();
    let error = check_connectivity(&unreachable).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StoreConnectivity);
    assert!(error.is_fatal());
}

#[tokio::test]
async fn test_loader_accepts_trait_object() {
    init_test_logging();
    let store = InMemoryExerciseStore::new();
    let repository: &dyn ExerciseRepository = &store;

    let summary = ExerciseLoader::new(repository, settings(100)).run(sources(2)).await;

    assert_eq!(summary.inserted, 2);
}
