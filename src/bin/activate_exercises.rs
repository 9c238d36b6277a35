// ABOUTME: Curated exercise activator
// ABOUTME: Activates the first inactive exercise matching each canonical name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! Exercise catalog activator.
//!
//! Walks the canonical exercise list and activates, for each name, the first
//! inactive exercise whose name contains it (case-insensitive).
//!
//! Usage:
//! ```bash
//! # Activate the built-in list (uses SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY)
//! cargo run --bin activate-exercises
//!
//! # Activate specific names instead
//! cargo run --bin activate-exercises -- --name "push-up" --name "front plank"
//!
//! # Show the matches without updating
//! cargo run --bin activate-exercises -- --dry-run
//! ```

use anyhow::Result;
use clap::Parser;
use exercise_catalog::activator::{canonical_names, ExerciseActivator};
use exercise_catalog::config::{load_dotenv, StoreConfig};
use exercise_catalog::constants::service_names;
use exercise_catalog::database::PostgrestExerciseStore;
use exercise_catalog::logging::LoggingConfig;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "activate-exercises",
    about = "Exercise catalog activator",
    long_about = "Activate the first inactive exercise whose name contains each canonical exercise name"
)]
struct ActivateArgs {
    /// Name fragment to activate instead of the built-in list (repeatable)
    #[arg(long = "name", short = 'n')]
    names: Vec<String>,

    /// Report matches without updating
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ActivateArgs::parse();
    load_dotenv();
    LoggingConfig::for_service(service_names::ACTIVATE_EXERCISES, args.verbose).init()?;

    info!("=== Exercise Catalog Activator ===");

    let config = StoreConfig::from_env().inspect_err(|e| error!("{e}"))?;
    info!("Exercise store: {} (table {})", config.base_url, config.table);
    let store = PostgrestExerciseStore::new(config)?;

    let names: Vec<String> = if args.names.is_empty() {
        canonical_names().into_iter().map(str::to_owned).collect()
    } else {
        args.names
    };
    info!("Activating {} exercises...", names.len());

    let summary = ExerciseActivator::new(&store)
        .dry_run(args.dry_run)
        .run(&names)
        .await;
    summary.log();
    println!("{summary}");

    Ok(())
}
