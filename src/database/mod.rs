// ABOUTME: Exercise store abstraction with typed repository operations
// ABOUTME: Defines ExerciseRepository and re-exports the PostgREST and in-memory stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! # Exercise Store
//!
//! The loader and activator only talk to the exercise table through
//! [`ExerciseRepository`]. Every call is a single request against the store;
//! there are no transactions and no retries.

/// In-process store with call recording and failure injection
pub mod memory;
/// PostgREST (Supabase) HTTP client
pub mod postgrest;

pub use memory::InMemoryExerciseStore;
pub use postgrest::PostgrestExerciseStore;

pub use crate::errors::DatabaseError;

use crate::models::{ExerciseRow, StoredExercise};
use async_trait::async_trait;

/// Typed operations on the exercise table
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Count all rows; used to check that the store is reachable and the key is accepted
    async fn probe(&self) -> Result<u64, DatabaseError>;

    /// Identifiers of every stored exercise
    async fn list_identifiers(&self) -> Result<Vec<String>, DatabaseError>;

    /// Insert all rows in one call
    async fn insert_batch(&self, rows: &[ExerciseRow]) -> Result<(), DatabaseError>;

    /// Inactive exercises whose name contains `fragment`, ignoring case.
    ///
    /// Results come back in the store's default order, which is not specified.
    async fn find_inactive_by_name_substring(
        &self,
        fragment: &str,
    ) -> Result<Vec<StoredExercise>, DatabaseError>;

    /// Set the active flag on one exercise
    async fn activate_by_id(&self, exercise_id: &str) -> Result<(), DatabaseError>;

    /// Number of active exercises
    async fn count_active(&self) -> Result<u64, DatabaseError>;
}
