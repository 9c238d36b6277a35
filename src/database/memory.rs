// ABOUTME: In-memory exercise store for tests and offline runs
// ABOUTME: Records every call and can be told to fail specific operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

use super::{DatabaseError, ExerciseRepository};
use crate::models::{ExerciseRow, StoredExercise};
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct StoreState {
    rows: Vec<ExerciseRow>,
    insert_calls: Vec<usize>,
    search_calls: Vec<String>,
    update_calls: Vec<String>,
}

#[derive(Debug, Default)]
struct FailurePlan {
    probe: bool,
    listing: bool,
    search: bool,
    count: bool,
    insert_calls: HashSet<usize>,
    updates: HashSet<String>,
}

/// Exercise table kept in process memory.
///
/// Behaves like the hosted table for the operations the tools use: inserts
/// reject duplicate identifiers, name searches are case-insensitive and return
/// rows in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryExerciseStore {
    state: Mutex<StoreState>,
    failures: FailurePlan,
}

impl InMemoryExerciseStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `rows`
    #[must_use]
    pub fn with_rows(rows: Vec<ExerciseRow>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                rows,
                ..StoreState::default()
            }),
            failures: FailurePlan::default(),
        }
    }

    /// Make the connectivity probe fail
    #[must_use]
    pub fn failing_probe(mut self) -> Self {
        self.failures.probe = true;
        self
    }

    /// Make identifier listing fail
    #[must_use]
    pub fn failing_listing(mut self) -> Self {
        self.failures.listing = true;
        self
    }

    /// Make name searches fail
    #[must_use]
    pub fn failing_search(mut self) -> Self {
        self.failures.search = true;
        self
    }

    /// Make the active count fail
    #[must_use]
    pub fn failing_count(mut self) -> Self {
        self.failures.count = true;
        self
    }

    /// Make the insert call with this zero-based index fail
    #[must_use]
    pub fn failing_insert_call(mut self, call_index: usize) -> Self {
        self.failures.insert_calls.insert(call_index);
        self
    }

    /// Make activation of this identifier fail
    #[must_use]
    pub fn failing_update(mut self, exercise_id: &str) -> Self {
        self.failures.updates.insert(exercise_id.to_owned());
        self
    }

    /// Snapshot of all stored rows
    pub async fn rows(&self) -> Vec<ExerciseRow> {
        self.state.lock().await.rows.clone()
    }

    /// Row count of every insert call, in call order (failed calls included)
    pub async fn insert_calls(&self) -> Vec<usize> {
        self.state.lock().await.insert_calls.clone()
    }

    /// Fragments passed to name searches, in call order
    pub async fn search_calls(&self) -> Vec<String> {
        self.state.lock().await.search_calls.clone()
    }

    /// Identifiers passed to activation, in call order (failed calls included)
    pub async fn update_calls(&self) -> Vec<String> {
        self.state.lock().await.update_calls.clone()
    }

    /// Number of inactive rows
    pub async fn inactive_count(&self) -> usize {
        self.state
            .lock()
            .await
            .rows
            .iter()
            .filter(|row| !row.is_active)
            .count()
    }

    fn injected(operation: &str) -> DatabaseError {
        DatabaseError::RequestRejected {
            status: 503,
            body: format!("injected {operation} failure"),
        }
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseStore {
    async fn probe(&self) -> Result<u64, DatabaseError> {
        if self.failures.probe {
            return Err(DatabaseError::ConnectionFailed {
                context: "injected probe failure".to_owned(),
            });
        }
        Ok(self.state.lock().await.rows.len() as u64)
    }

    async fn list_identifiers(&self) -> Result<Vec<String>, DatabaseError> {
        if self.failures.listing {
            return Err(Self::injected("listing"));
        }
        let state = self.state.lock().await;
        Ok(state.rows.iter().map(|row| row.exercise_id.clone()).collect())
    }

    async fn insert_batch(&self, rows: &[ExerciseRow]) -> Result<(), DatabaseError> {
        let mut state = self.state.lock().await;
        let call_index = state.insert_calls.len();
        state.insert_calls.push(rows.len());

        if self.failures.insert_calls.contains(&call_index) {
            return Err(Self::injected("insert"));
        }

        let mut seen: HashSet<&str> = state.rows.iter().map(|r| r.exercise_id.as_str()).collect();
        if let Some(duplicate) = rows.iter().find(|row| !seen.insert(&row.exercise_id)) {
            return Err(DatabaseError::RequestRejected {
                status: 409,
                body: format!(
                    "duplicate key value violates unique constraint: exercise_id={}",
                    duplicate.exercise_id
                ),
            });
        }

        state.rows.extend_from_slice(rows);
        Ok(())
    }

    async fn find_inactive_by_name_substring(
        &self,
        fragment: &str,
    ) -> Result<Vec<StoredExercise>, DatabaseError> {
        let mut state = self.state.lock().await;
        state.search_calls.push(fragment.to_owned());

        if self.failures.search {
            return Err(Self::injected("search"));
        }

        let needle = fragment.to_lowercase();
        Ok(state
            .rows
            .iter()
            .filter(|row| !row.is_active && row.name.to_lowercase().contains(&needle))
            .map(|row| StoredExercise {
                exercise_id: row.exercise_id.clone(),
                name: row.name.clone(),
                is_active: row.is_active,
            })
            .collect())
    }

    async fn activate_by_id(&self, exercise_id: &str) -> Result<(), DatabaseError> {
        let mut state = self.state.lock().await;
        state.update_calls.push(exercise_id.to_owned());

        if self.failures.updates.contains(exercise_id) {
            return Err(Self::injected("update"));
        }

        let row = state
            .rows
            .iter_mut()
            .find(|row| row.exercise_id == exercise_id)
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "exercise",
                id: exercise_id.to_owned(),
            })?;
        row.is_active = true;
        Ok(())
    }

    async fn count_active(&self) -> Result<u64, DatabaseError> {
        if self.failures.count {
            return Err(Self::injected("count"));
        }
        let state = self.state.lock().await;
        Ok(state.rows.iter().filter(|row| row.is_active).count() as u64)
    }
}
