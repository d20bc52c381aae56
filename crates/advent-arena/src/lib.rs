//! Content fetching for Advent Doors.
//!
//! This crate retrieves a bounded prefix of a paginated remote collection:
//! - `PageSource` - one page of a collection (the network seam)
//! - `ArenaClient` - `PageSource` over the Are.na HTTP API
//! - `ContentFetcher` - sequential accumulation up to a cutoff, tolerant of
//!   failed pages
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use advent_arena::{ArenaClient, ContentFetcher};
//! use advent_models::{CollectionId, DOOR_LIMIT};
//!
//! let fetcher = ContentFetcher::new(Arc::new(ArenaClient::from_env()?));
//! let items = fetcher.fetch_up_to(&CollectionId::from("my-channel"), DOOR_LIMIT).await;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod pagination;

pub use client::{ArenaClient, PageSource};
pub use config::ArenaConfig;
pub use error::{FetchError, Result};
pub use pagination::{Accumulation, ContentFetcher, PageState};
