// ABOUTME: Exercise source record, table row, and the transform between them
// ABOUTME: Derives the gif path from the identifier and defaults missing lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

use crate::constants::media::{GIF_DIR, GIF_EXTENSION};
use serde::{Deserialize, Serialize};

/// One record of the curated exercise file.
///
/// List attributes may be missing or `null` in the file; both read as `None`
/// and become empty lists in the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceExercise {
    /// Stable identifier shared with the row
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Remote animation URL; rows reference a local copy instead
    #[serde(default)]
    pub gif_url: Option<String>,
    /// Primary muscles worked
    #[serde(default)]
    pub target_muscles: Option<Vec<String>>,
    /// Body regions
    #[serde(default)]
    pub body_parts: Option<Vec<String>>,
    /// Equipment needed
    #[serde(default)]
    pub equipments: Option<Vec<String>>,
    /// Supporting muscles
    #[serde(default)]
    pub secondary_muscles: Option<Vec<String>>,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
}

/// Row written to the exercise table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRow {
    /// Unique identifier (enforced by the table)
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// `gifs/<exercise_id>.gif`
    pub gif_path: String,
    /// Primary muscles worked
    pub target_muscles: Vec<String>,
    /// Body regions
    pub body_parts: Vec<String>,
    /// Equipment needed
    pub equipments: Vec<String>,
    /// Supporting muscles
    pub secondary_muscles: Vec<String>,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
    /// Whether end users see the exercise
    pub is_active: bool,
}

/// Columns read back from the table when searching by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredExercise {
    /// Unique identifier
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Whether end users see the exercise
    pub is_active: bool,
}

/// Image path stored for an exercise identifier
#[must_use]
pub fn gif_path_for(exercise_id: &str) -> String {
    format!("{GIF_DIR}/{exercise_id}.{GIF_EXTENSION}")
}

impl From<SourceExercise> for ExerciseRow {
    fn from(source: SourceExercise) -> Self {
        Self {
            gif_path: gif_path_for(&source.exercise_id),
            exercise_id: source.exercise_id,
            name: source.name,
            target_muscles: source.target_muscles.unwrap_or_default(),
            body_parts: source.body_parts.unwrap_or_default(),
            equipments: source.equipments.unwrap_or_default(),
            secondary_muscles: source.secondary_muscles.unwrap_or_default(),
            instructions: source.instructions.unwrap_or_default(),
            is_active: false,
        }
    }
}
