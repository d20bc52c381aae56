//! Advent Doors CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use advent_cli::cli::Cli;
use advent_cli::commands;

#[tokio::main]
async fn main() {
    // Load .env.local if it exists (for ARENA_API_URL, ADVENT_STATE_DIR etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();
    advent_core::load_env_in(&cli.state_dir());

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = commands::execute(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
