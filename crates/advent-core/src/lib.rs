//! Advent Core - shared logic for all Advent Doors interfaces.
//!
//! - **config**: Shared configuration paths and utilities
//! - **placement**: Non-overlapping door placement with a grid fallback

pub mod config;
pub mod placement;

// Re-export commonly used items for convenience
pub use config::{
    env_file_in, load_env_in, reveal_state_file, reveal_state_file_in, runtime_state_dir,
    state_dir,
};
pub use placement::{grid_position, overlaps, place, place_layout, Layout, PlacementConfig};
