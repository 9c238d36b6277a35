// ABOUTME: Exercise catalog bulk loader
// ABOUTME: Inserts new exercises from the curated JSON file in paced batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! Exercise catalog loader.
//!
//! Reads the curated exercise JSON file, skips exercises already stored, and
//! inserts the rest as inactive rows.
//!
//! Usage:
//! ```bash
//! # Load data/exercises.json (uses SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY)
//! cargo run --bin load-exercises
//!
//! # Load another file in batches of 50
//! cargo run --bin load-exercises -- --file ./exercises-v2.json --batch-size 50
//!
//! # Show what would be inserted without writing
//! cargo run --bin load-exercises -- --dry-run
//! ```

use anyhow::Result;
use clap::Parser;
use exercise_catalog::config::{exercises_file_from_env, load_dotenv, StoreConfig};
use exercise_catalog::constants::{defaults, service_names};
use exercise_catalog::database::PostgrestExerciseStore;
use exercise_catalog::loader::{
    check_connectivity, read_exercise_file, ExerciseLoader, LoaderSettings,
};
use exercise_catalog::logging::LoggingConfig;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "load-exercises",
    about = "Exercise catalog bulk loader",
    long_about = "Insert exercises from the curated JSON file that are not yet in the exercise table"
)]
struct LoadArgs {
    /// Exercise JSON file (default: $EXERCISES_FILE or data/exercises.json)
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Rows per insert call
    #[arg(long, default_value_t = defaults::BATCH_SIZE)]
    batch_size: usize,

    /// Pause between insert calls, in milliseconds
    #[arg(long, default_value_t = defaults::BATCH_DELAY_MS)]
    batch_delay_ms: u64,

    /// Report what would be inserted without inserting
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = LoadArgs::parse();
    load_dotenv();
    LoggingConfig::for_service(service_names::LOAD_EXERCISES, args.verbose).init()?;

    info!("=== Exercise Catalog Loader ===");

    let settings = LoaderSettings {
        batch_size: args.batch_size,
        batch_delay: Duration::from_millis(args.batch_delay_ms),
        dry_run: args.dry_run,
    };
    settings.validate()?;

    let config = StoreConfig::from_env().inspect_err(|e| error!("{e}"))?;
    info!("Exercise store: {} (table {})", config.base_url, config.table);
    let store = PostgrestExerciseStore::new(config)?;

    check_connectivity(&store)
        .await
        .inspect_err(|e| error!("{e}"))?;

    let path = exercises_file_from_env(args.file);
    info!("Reading exercises from {}", path.display());
    let records = read_exercise_file(&path).inspect_err(|e| error!("{e}"))?;
    info!("Read {} exercises", records.len());

    let summary = ExerciseLoader::new(&store, settings).run(records).await;
    summary.log();
    println!("{summary}");

    Ok(())
}
