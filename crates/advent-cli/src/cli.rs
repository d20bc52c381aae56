//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use advent_calendar::{CalendarConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use advent_models::DoorIndex;

/// Advent Doors - an advent calendar over a remote content collection
#[derive(Parser, Debug)]
#[command(name = "advent")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to state directory
    #[arg(short, long, env = "ADVENT_STATE_DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// Seed for a reproducible door layout
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Canvas width
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH, global = true)]
    pub width: f64,

    /// Canvas height
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT, global = true)]
    pub height: f64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a calendar and list its doors
    Show {
        /// Channel (collection) slug
        #[arg(required = true)]
        channel: String,

        /// Calendar title
        #[arg(short, long)]
        title: Option<String>,

        /// Background image URL
        #[arg(short, long)]
        background: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Open a door and print what it reveals
    Open {
        /// Channel (collection) slug
        #[arg(required = true)]
        channel: String,

        /// Door number, starting at 1
        #[arg(required = true)]
        day: DoorIndex,
    },

    /// Show opened doors from local state only
    Status {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Close every door by clearing local state
    Reset,
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Cli {
    /// Returns the state directory path, using default if not specified.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(advent_core::state_dir)
    }

    /// Returns the reveal state file inside the state directory.
    pub fn reveal_file(&self) -> PathBuf {
        advent_core::reveal_state_file_in(&self.state_dir())
    }

    /// Builds a calendar config for `channel` from the global layout flags.
    pub fn calendar_config(&self, channel: &str) -> CalendarConfig {
        let config = CalendarConfig::new(channel).with_canvas(self.width, self.height);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
