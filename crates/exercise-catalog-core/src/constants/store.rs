// ABOUTME: Wire constants for the PostgREST-compatible exercise store
// ABOUTME: REST path prefix, header names, preference values, and column names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

/// REST path prefix appended to the base URL
pub const REST_PREFIX: &str = "rest/v1";

/// Header carrying the access key
pub const APIKEY_HEADER: &str = "apikey";
/// Header carrying response preferences
pub const PREFER_HEADER: &str = "Prefer";
/// Header carrying the result window and total count
pub const CONTENT_RANGE_HEADER: &str = "Content-Range";

/// Ask the store for an exact row count
pub const PREFER_COUNT_EXACT: &str = "count=exact";
/// Ask the store to skip echoing inserted rows
pub const PREFER_RETURN_MINIMAL: &str = "return=minimal";
/// Ask the store to echo affected rows
pub const PREFER_RETURN_REPRESENTATION: &str = "return=representation";

/// Identifier column
pub const COLUMN_EXERCISE_ID: &str = "exercise_id";
/// Name column
pub const COLUMN_NAME: &str = "name";
/// Active flag column
pub const COLUMN_IS_ACTIVE: &str = "is_active";

/// Columns returned by name searches
pub const SEARCH_COLUMNS: &str = "exercise_id,name,is_active";
