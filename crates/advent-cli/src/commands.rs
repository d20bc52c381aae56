//! Command handlers for CLI subcommands.

use std::sync::Arc;

use advent_arena::{ArenaClient, ContentFetcher};
use advent_calendar::{Calendar, CalendarConfig, OpenOutcome};
use advent_models::{Door, DoorIndex};
use advent_persistence::{FileRevealStore, RevealStore};
use tracing::info;

use crate::cli::{Cli, Commands, OutputFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
///
/// The reveal file is read at most once per command, and `reset` never
/// parses it, so a corrupt file can always be cleared.
pub async fn execute(cli: &Cli) -> Result<()> {
    let store = Arc::new(FileRevealStore::new(cli.reveal_file()));

    match &cli.command {
        Commands::Show {
            channel,
            title,
            background,
            format,
        } => {
            let mut config = cli.calendar_config(channel);
            if let Some(title) = title {
                config = config.with_title(title.as_str());
            }
            if let Some(url) = background {
                config = config.with_background_image(url.as_str());
            }
            let calendar = load_calendar(config, store).await?;
            cmd_show(&calendar, *format).await
        }
        Commands::Open { channel, day } => {
            let calendar = load_calendar(cli.calendar_config(channel), store).await?;
            cmd_open(&calendar, *day).await
        }
        Commands::Status { format } => cmd_status(store.as_ref(), *format),
        Commands::Reset => cmd_reset(store.as_ref()),
    }
}

async fn load_calendar(config: CalendarConfig, store: Arc<FileRevealStore>) -> Result<Calendar> {
    let fetcher = ContentFetcher::new(Arc::new(ArenaClient::from_env()?));
    Ok(Calendar::load(config, fetcher, store).await?)
}

async fn cmd_show(calendar: &Calendar, format: OutputFormat) -> Result<()> {
    let doors = calendar.doors().await;

    match format {
        OutputFormat::Table => {
            let summary = calendar.summary();
            if !calendar.title().is_empty() {
                println!("{}", calendar.title());
            }
            println!("Collection: {}", calendar.config().collection);
            if let Some(url) = calendar.background_image() {
                println!("Background: {}", url);
            }
            if summary.aborted {
                println!("  (some pages failed to load; showing what was fetched)");
            }
            println!();

            if doors.is_empty() {
                println!("No doors.");
                return Ok(());
            }

            println!("{:>4}  {:>8}  {:>8}  {:<6}  CONTENT", "DOOR", "X", "Y", "STATE");
            println!("{}", "-".repeat(72));
            for door in &doors {
                println!("{}", door_row(door));
            }
            println!(
                "\n{} door(s), {} open, {} on fallback grid",
                summary.items, summary.opened_doors, summary.fallback_doors
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&doors)?;
            println!("{}", json);
        }
    }

    Ok(())
}

async fn cmd_open(calendar: &Calendar, day: DoorIndex) -> Result<()> {
    match calendar.open_door(day).await? {
        OpenOutcome::Opened(content) => {
            info!(day, "Opened door");
            println!("Door {} opened:\n{}", day, content);
        }
        OpenOutcome::AlreadyOpen(content) => {
            println!("Door {} was already open:\n{}", day, content);
        }
        OpenOutcome::InProgress => {
            println!("Door {} is already being opened", day);
        }
    }
    Ok(())
}

fn cmd_status(store: &dyn RevealStore, format: OutputFormat) -> Result<()> {
    let state = store.load_all()?;

    match format {
        OutputFormat::Table => {
            if state.is_empty() {
                println!("No doors opened.");
                return Ok(());
            }
            for (index, content) in state.iter() {
                println!("{:>4}  {}", index, truncate(&one_line(content), 64));
            }
            println!("\n{} door(s) opened", state.len());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&state)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_reset(store: &dyn RevealStore) -> Result<()> {
    store.clear()?;

    info!("Reveal state cleared");
    println!("All doors closed");
    Ok(())
}

fn door_row(door: &Door) -> String {
    let state = if door.is_open() { "open" } else { "closed" };
    format!(
        "{:>4}  {:>8.1}  {:>8.1}  {:<6}  {}",
        door.index,
        door.position.x,
        door.position.y,
        state,
        truncate(&one_line(door.content_or_empty()), 40)
    )
}

/// Collapses whitespace runs (including newlines) to single spaces.
fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates a string to the given number of characters, adding "..." if truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
