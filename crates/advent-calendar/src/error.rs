//! Error types for the calendar crate.

use advent_models::DoorIndex;
use advent_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur in calendar operations.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// No door with this number exists on the calendar.
    #[error("door not found: {0}")]
    DoorNotFound(DoorIndex),

    /// The collection item behind a door could not be retrieved.
    ///
    /// The door stays closed and opening it again is safe.
    #[error("could not resolve content for door {index}")]
    ContentNotFound {
        /// Door that failed to open.
        index: DoorIndex,
    },

    /// Reveal store error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Invalid calendar configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
