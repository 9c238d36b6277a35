// ABOUTME: Curated exercise activator: flips the active flag on the first name match
// ABOUTME: Holds the canonical name list grouped by muscle category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! # Exercise Activator
//!
//! For each canonical name, search the inactive exercises whose name contains
//! it (ignoring case) and activate the first match. The store does not promise
//! an order, so when several rows match, which one gets activated may differ
//! between runs; the candidate count is logged for that reason.

use crate::database::ExerciseRepository;
use crate::errors::AppError;
use std::fmt;
use tracing::{debug, error, info, warn};

/// Canonical exercise names for one muscle category
#[derive(Debug, Clone, Copy)]
pub struct MuscleGroup {
    /// Display label; not used for matching
    pub category: &'static str,
    /// Name fragments, in activation order
    pub names: &'static [&'static str],
}

/// Exercises offered to end users, grouped by muscle category
pub const CANONICAL_EXERCISES: &[MuscleGroup] = &[
    MuscleGroup {
        category: "Chest",
        names: &[
            "barbell bench press",
            "incline bench press",
            "dumbbell fly",
            "push-up",
            "chest dip",
            "cable cross-over",
        ],
    },
    MuscleGroup {
        category: "Back",
        names: &[
            "pull-up",
            "chin-up",
            "lat pulldown",
            "barbell bent over row",
            "seated row",
            "barbell deadlift",
            "dumbbell one arm bent-over row",
        ],
    },
    MuscleGroup {
        category: "Shoulders",
        names: &[
            "barbell seated overhead press",
            "dumbbell lateral raise",
            "dumbbell front raise",
            "face pull",
            "dumbbell arnold press",
            "barbell shrug",
        ],
    },
    MuscleGroup {
        category: "Biceps",
        names: &["barbell curl", "dumbbell hammer curl", "preacher curl", "concentration curl"],
    },
    MuscleGroup {
        category: "Triceps",
        names: &[
            "triceps pushdown",
            "close-grip bench press",
            "lying triceps extension",
            "bench dip",
        ],
    },
    MuscleGroup {
        category: "Legs",
        names: &[
            "barbell full squat",
            "front squat",
            "lunge",
            "leg press",
            "romanian deadlift",
            "lying leg curl",
            "leg extension",
            "standing calf raise",
            "hip thrust",
            "glute bridge",
        ],
    },
    MuscleGroup {
        category: "Core",
        names: &[
            "front plank",
            "crunch",
            "russian twist",
            "hanging leg raise",
            "mountain climber",
            "dead bug",
        ],
    },
    MuscleGroup {
        category: "Cardio",
        names: &["burpee", "jumping jack", "jump rope", "high knee"],
    },
];

/// All canonical names, flattened in list order
#[must_use]
pub fn canonical_names() -> Vec<&'static str> {
    CANONICAL_EXERCISES
        .iter()
        .flat_map(|group| group.names.iter().copied())
        .collect()
}

/// Result of processing one name
#[derive(Debug)]
pub enum ActivationOutcome {
    /// The first inactive match was activated (or would be, on a dry run)
    Activated {
        /// Name fragment searched for
        name: String,
        /// Identifier of the activated exercise
        exercise_id: String,
        /// Full name of the activated exercise
        matched_name: String,
        /// How many inactive exercises matched
        candidates: usize,
    },
    /// No inactive exercise matched; nothing was updated
    NotFound {
        /// Name fragment searched for
        name: String,
    },
    /// The search or the update failed
    Failed {
        /// Name fragment searched for
        name: String,
        /// Why it failed
        error: AppError,
    },
}

/// Totals of one activator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationSummary {
    /// Names processed
    pub requested: usize,
    /// Names whose first match was activated
    pub activated: usize,
    /// Names with no inactive match
    pub not_found: usize,
    /// Names whose search or update failed
    pub failed: usize,
    /// Active exercises after the run, if the count query succeeded
    pub total_active: Option<u64>,
    /// No update calls were issued
    pub dry_run: bool,
}

impl ActivationSummary {
    /// Fold one outcome into the totals
    #[must_use]
    pub fn record(mut self, outcome: &ActivationOutcome) -> Self {
        self.requested += 1;
        match outcome {
            ActivationOutcome::Activated { .. } => self.activated += 1,
            ActivationOutcome::NotFound { .. } => self.not_found += 1,
            ActivationOutcome::Failed { .. } => self.failed += 1,
        }
        self
    }

    /// Write the human-readable summary to the log
    pub fn log(&self) {
        info!("=== Activation Complete ===");
        info!("Names processed:        {}", self.requested);
        if self.dry_run {
            info!("Would activate:         {} (dry run)", self.activated);
        } else {
            info!("Activated:              {}", self.activated);
        }
        info!("Not found:              {}", self.not_found);
        info!("Failed:                 {}", self.failed);
        match self.total_active {
            Some(total) => info!("Total active exercises: {total}"),
            None => info!("Total active exercises: unknown"),
        }
    }
}

/// One-line result, printed regardless of log level
impl fmt::Display for ActivationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "activate: {} names, {} {}, {} not found, {} failed, ",
            self.requested,
            self.activated,
            if self.dry_run { "would be activated (dry run)" } else { "activated" },
            self.not_found,
            self.failed
        )?;
        match self.total_active {
            Some(total) => write!(f, "{total} active in total"),
            None => f.write_str("active total unknown"),
        }
    }
}

/// Runs the activation flow against one store
pub struct ExerciseActivator<'a, R: ExerciseRepository + ?Sized> {
    store: &'a R,
    dry_run: bool,
}

impl<'a, R: ExerciseRepository + ?Sized> ExerciseActivator<'a, R> {
    /// Create an activator over `store`
    pub const fn new(store: &'a R) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Search only; do not issue updates
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process `names` in order, then count active exercises
    pub async fn run<S: AsRef<str> + Sync>(&self, names: &[S]) -> ActivationSummary {
        let mut outcomes = Vec::with_capacity(names.len());
        for name in names {
            outcomes.push(self.activate_one(name.as_ref()).await);
        }

        let summary = outcomes.iter().fold(
            ActivationSummary {
                dry_run: self.dry_run,
                ..ActivationSummary::default()
            },
            ActivationSummary::record,
        );

        let total_active = match self.store.count_active().await {
            Ok(total) => Some(total),
            Err(e) => {
                warn!("Could not count active exercises: {}", AppError::store_query(e));
                None
            }
        };

        ActivationSummary {
            total_active,
            ..summary
        }
    }

    /// Activate the first inactive exercise whose name contains `name`
    pub async fn activate_one(&self, name: &str) -> ActivationOutcome {
        let matches = match self.store.find_inactive_by_name_substring(name).await {
            Ok(matches) => matches,
            Err(e) => {
                let error = AppError::store_query(e);
                error!("  ✗ {name}: search failed: {error}");
                return ActivationOutcome::Failed {
                    name: name.to_owned(),
                    error,
                };
            }
        };

        let candidates = matches.len();
        let Some(first) = matches.into_iter().next() else {
            info!("  - {name}: no inactive match");
            return ActivationOutcome::NotFound {
                name: name.to_owned(),
            };
        };
        if candidates > 1 {
            debug!("{name}: {candidates} inactive matches, taking the first returned");
        }

        if !self.dry_run {
            if let Err(e) = self.store.activate_by_id(&first.exercise_id).await {
                let error = AppError::store_update(e);
                error!("  ✗ {name}: could not activate {}: {error}", first.exercise_id);
                return ActivationOutcome::Failed {
                    name: name.to_owned(),
                    error,
                };
            }
        }

        info!(
            "  ✓ {name} → {} ({}){}",
            first.name,
            first.exercise_id,
            if self.dry_run { " [dry run]" } else { "" }
        );
        ActivationOutcome::Activated {
            name: name.to_owned(),
            exercise_id: first.exercise_id,
            matched_name: first.name,
            candidates,
        }
    }
}
