//! Persistence layer for Advent Doors.
//!
//! Stores which doors have been opened, and what they revealed, using
//! atomic file operations (write to temp file, then rename).
//!
//! # Example
//!
//! ```no_run
//! use advent_persistence::{FileRevealStore, RevealStore};
//!
//! let store = FileRevealStore::open("/home/user/.advent-doors/state/opened-doors.json").unwrap();
//! store.set(3, "<p>x</p>").unwrap();
//! assert!(store.is_open(3).unwrap());
//! ```

pub mod atomic;
pub mod error;
pub mod reveal_store;

pub use error::{PersistenceError, Result};
pub use reveal_store::{FileRevealStore, MemoryRevealStore, RevealStore};
