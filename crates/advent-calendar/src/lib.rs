//! Calendar orchestration for Advent Doors.
//!
//! This crate ties the other pieces into a calendar:
//! - `CalendarConfig` - collection, canvas, and layout settings
//! - `Calendar` - loads contents, places doors, and opens them
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use advent_arena::{ArenaClient, ContentFetcher};
//! use advent_calendar::{Calendar, CalendarConfig, OpenOutcome};
//! use advent_persistence::FileRevealStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = ContentFetcher::new(Arc::new(ArenaClient::from_env()?));
//!     let store = Arc::new(FileRevealStore::new(advent_core::reveal_state_file()));
//!
//!     let calendar = Calendar::load(CalendarConfig::new("my-channel"), fetcher, store).await?;
//!
//!     if let OpenOutcome::Opened(html) = calendar.open_door(1).await? {
//!         println!("{}", html);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Key Concepts
//!
//! ## Loading
//!
//! Reveal state is read before anything is fetched. A failed page shortens
//! the calendar instead of failing it, so a calendar may have fewer than 24
//! doors, or none.
//!
//! ## Opening
//!
//! A door counts as open only once its content is persisted. Opens of a door
//! that is already resolving return `OpenOutcome::InProgress`.

pub mod calendar;
pub mod config;
pub mod error;

pub use calendar::{Calendar, LoadSummary, OpenOutcome};
pub use config::{CalendarConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use error::{CalendarError, Result};
