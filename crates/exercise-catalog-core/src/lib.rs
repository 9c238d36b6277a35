// ABOUTME: Core types and constants for the exercise catalog admin tools
// ABOUTME: Foundation crate with error handling, exercise models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

#![deny(unsafe_code)]

//! # Exercise Catalog Core
//!
//! Foundation crate providing shared types and constants for the exercise
//! catalog admin tools. This crate is designed to change infrequently, so the
//! loader and activator binaries rebuild without touching it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **constants**: Defaults, environment variable names, and store wire constants
//! - **models**: Source exercise records and the persisted row shape

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Exercise models (source records, rows, stored rows)
pub mod models;
