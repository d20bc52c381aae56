//! Core data models for Advent Doors.
//!
//! This crate provides the fundamental data types shared by the placement
//! engine, the content fetcher, the reveal store and the calendar itself.

pub mod content;
pub mod door;
pub mod geometry;
pub mod ids;
pub mod reveal;

// Re-export main types
pub use content::{ContentItem, ContentPage, NO_CONTENT_AVAILABLE};
pub use door::{build_doors, reveal_door, Door, DoorIndex};
pub use geometry::{Canvas, Position};
pub use ids::CollectionId;
pub use reveal::RevealState;

/// Maximum number of doors a calendar ever shows.
///
/// This is also the accumulation cutoff: no more items than this are ever
/// requested from the remote collection.
pub const DOOR_LIMIT: usize = 24;
