// ABOUTME: Bulk exercise loader: read JSON, reshape, dedupe, insert in paced batches
// ABOUTME: Folds per-batch outcomes into a LoadSummary; batch failures never abort the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! # Exercise Loader
//!
//! 1. Read the exercise file into [`SourceExercise`] records (fatal on failure)
//! 2. Reshape each record into an inactive [`ExerciseRow`]
//! 3. Fetch the identifiers already stored; if that fails, assume none
//! 4. Drop rows whose identifier is already stored
//! 5. Insert the rest in chunks of `batch_size`, pausing `batch_delay` between chunks
//!
//! A failed chunk is counted and skipped. Nothing is retried.

use crate::constants::defaults;
use crate::database::ExerciseRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseRow, SourceExercise};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Batching and pacing settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    /// Rows per insert call
    pub batch_size: usize,
    /// Pause between consecutive insert calls
    pub batch_delay: Duration,
    /// Plan the load without inserting
    pub dry_run: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            batch_size: defaults::BATCH_SIZE,
            batch_delay: Duration::from_millis(defaults::BATCH_DELAY_MS),
            dry_run: false,
        }
    }
}

impl LoaderSettings {
    /// Validate settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the batch size is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.batch_size == 0 {
            return Err(AppError::config_invalid("batch size must be greater than 0"));
        }
        Ok(())
    }
}

/// Read and parse the exercise file
///
/// # Errors
///
/// Returns `FileRead` if the file cannot be read and `Parse` if it is not a
/// JSON array of exercise objects
pub fn read_exercise_file(path: impl AsRef<Path>) -> AppResult<Vec<SourceExercise>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| AppError::file_read(path.display(), e))?;
    let records: Vec<SourceExercise> =
        serde_json::from_str(&contents).map_err(|e| AppError::parse(path.display(), e))?;

    debug!("Parsed {} exercise records from {}", records.len(), path.display());
    Ok(records)
}

/// Reshape source records into rows
#[must_use]
pub fn to_rows(records: Vec<SourceExercise>) -> Vec<ExerciseRow> {
    records.into_iter().map(ExerciseRow::from).collect()
}

/// Rows left after removing stored and repeated identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRows {
    /// Rows to insert, in input order
    pub new_rows: Vec<ExerciseRow>,
    /// Rows whose identifier is already stored
    pub skipped_existing: usize,
    /// Later occurrences of an identifier that appears more than once in the input
    pub skipped_duplicates: usize,
}

/// Drop rows whose identifier is in `existing`, and keep only the first row per identifier
#[must_use]
pub fn filter_new(rows: Vec<ExerciseRow>, existing: &HashSet<String>) -> FilteredRows {
    let mut seen = HashSet::new();
    let mut filtered = FilteredRows {
        new_rows: Vec::with_capacity(rows.len()),
        skipped_existing: 0,
        skipped_duplicates: 0,
    };

    for row in rows {
        if existing.contains(&row.exercise_id) {
            filtered.skipped_existing += 1;
        } else if !seen.insert(row.exercise_id.clone()) {
            filtered.skipped_duplicates += 1;
        } else {
            filtered.new_rows.push(row);
        }
    }

    filtered
}

/// Result of one insert call
#[derive(Debug)]
pub enum BatchOutcome {
    /// All rows of the batch were inserted
    Inserted {
        /// Zero-based batch number
        index: usize,
        /// Rows in the batch
        size: usize,
    },
    /// The insert call failed; none of its rows count as inserted
    Failed {
        /// Zero-based batch number
        index: usize,
        /// Rows in the batch
        size: usize,
        /// Why the call failed
        error: AppError,
    },
}

/// Totals of one loader run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records read from the file
    pub total_records: usize,
    /// Records skipped because their identifier is already stored
    pub skipped_existing: usize,
    /// Records skipped because their identifier repeats within the file
    pub skipped_duplicates: usize,
    /// Rows selected for insertion
    pub to_insert: usize,
    /// Batches submitted (or planned, on a dry run)
    pub batches: usize,
    /// Rows inserted
    pub inserted: usize,
    /// Rows in failed batches
    pub failed: usize,
    /// Batches whose insert call failed
    pub failed_batches: usize,
    /// No insert calls were issued
    pub dry_run: bool,
}

impl LoadSummary {
    /// Fold one batch outcome into the totals
    #[must_use]
    pub fn record(mut self, outcome: &BatchOutcome) -> Self {
        self.batches += 1;
        match outcome {
            BatchOutcome::Inserted { size, .. } => self.inserted += size,
            BatchOutcome::Failed { size, .. } => {
                self.failed += size;
                self.failed_batches += 1;
            }
        }
        self
    }

    /// Write the human-readable summary to the log
    pub fn log(&self) {
        info!("=== Load Complete ===");
        info!("Records in file:        {}", self.total_records);
        info!("Already stored:         {}", self.skipped_existing);
        if self.skipped_duplicates > 0 {
            info!("Repeated in file:       {}", self.skipped_duplicates);
        }
        if self.dry_run {
            info!(
                "Would insert:           {} ({} batches, dry run)",
                self.to_insert, self.batches
            );
            return;
        }
        info!("Inserted:               {}", self.inserted);
        info!(
            "Failed:                 {} ({} of {} batches)",
            self.failed, self.failed_batches, self.batches
        );
    }
}

/// One-line result, printed regardless of log level
impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "load: {} records, {} already stored, {} repeated in file, ",
            self.total_records, self.skipped_existing, self.skipped_duplicates
        )?;
        if self.dry_run {
            write!(
                f,
                "{} would be inserted in {} batches (dry run)",
                self.to_insert, self.batches
            )
        } else {
            write!(
                f,
                "{} inserted, {} failed ({} of {} batches)",
                self.inserted, self.failed, self.failed_batches, self.batches
            )
        }
    }
}

/// Check that the store is reachable before loading
///
/// # Errors
///
/// Returns `StoreConnectivity` if the probe query fails
pub async fn check_connectivity<R>(store: &R) -> AppResult<u64>
where
    R: ExerciseRepository + ?Sized,
{
    let count = store.probe().await.map_err(AppError::store_connectivity)?;
    info!("Connected to exercise store ({count} rows stored)");
    Ok(count)
}

/// Runs the load flow against one store
pub struct ExerciseLoader<'a, R: ExerciseRepository + ?Sized> {
    store: &'a R,
    settings: LoaderSettings,
}

impl<'a, R: ExerciseRepository + ?Sized> ExerciseLoader<'a, R> {
    /// Create a loader over `store`
    pub const fn new(store: &'a R, settings: LoaderSettings) -> Self {
        Self { store, settings }
    }

    /// Load `records`, returning totals. Store failures never abort the run.
    pub async fn run(&self, records: Vec<SourceExercise>) -> LoadSummary {
        let total_records = records.len();
        let rows = to_rows(records);

        let existing = self.existing_identifiers().await;
        let filtered = filter_new(rows, &existing);
        info!(
            "{} new exercises to insert ({} already stored, {} repeated in file)",
            filtered.new_rows.len(),
            filtered.skipped_existing,
            filtered.skipped_duplicates
        );

        let summary = LoadSummary {
            total_records,
            skipped_existing: filtered.skipped_existing,
            skipped_duplicates: filtered.skipped_duplicates,
            to_insert: filtered.new_rows.len(),
            dry_run: self.settings.dry_run,
            ..LoadSummary::default()
        };

        if self.settings.dry_run {
            return LoadSummary {
                batches: filtered.new_rows.len().div_ceil(self.batch_size()),
                ..summary
            };
        }

        self.insert_in_batches(&filtered.new_rows)
            .await
            .iter()
            .fold(summary, LoadSummary::record)
    }

    // chunks() panics on zero; validate() reports it, this keeps run() total
    fn batch_size(&self) -> usize {
        self.settings.batch_size.max(1)
    }

    async fn existing_identifiers(&self) -> HashSet<String> {
        match self.store.list_identifiers().await {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                let error = AppError::store_query(e);
                warn!("Could not list stored exercises, assuming none exist: {error}");
                HashSet::new()
            }
        }
    }

    async fn insert_in_batches(&self, rows: &[ExerciseRow]) -> Vec<BatchOutcome> {
        let batch_count = rows.len().div_ceil(self.batch_size());
        let mut outcomes = Vec::with_capacity(batch_count);

        for (index, chunk) in rows.chunks(self.batch_size()).enumerate() {
            if index > 0 && !self.settings.batch_delay.is_zero() {
                tokio::time::sleep(self.settings.batch_delay).await;
            }
            outcomes.push(self.insert_batch(index, batch_count, chunk).await);
        }

        outcomes
    }

    async fn insert_batch(
        &self,
        index: usize,
        batch_count: usize,
        chunk: &[ExerciseRow],
    ) -> BatchOutcome {
        let size = chunk.len();
        match self.store.insert_batch(chunk).await {
            Ok(()) => {
                info!("  ✓ batch {}/{batch_count}: {size} exercises", index + 1);
                BatchOutcome::Inserted { index, size }
            }
            Err(e) => {
                let error = AppError::store_insert(e);
                error!("  ✗ batch {}/{batch_count}: {size} exercises: {error}", index + 1);
                BatchOutcome::Failed { index, size, error }
            }
        }
    }
}
