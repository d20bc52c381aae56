//! Reveal store: which doors have been opened and what they revealed.

use std::path::PathBuf;
use std::sync::RwLock;

use advent_models::{DoorIndex, RevealState};
use tracing::{debug, info};

use crate::atomic::{atomic_write_json, read_json_optional, remove_if_exists};
use crate::error::{PersistenceError, Result};

/// Durable mapping from door index to revealed content.
///
/// This is the seam for alternative backends: the calendar only talks to
/// doors' open state through this trait.
pub trait RevealStore: Send + Sync {
    /// Returns the content revealed behind a door, if it was opened.
    fn get(&self, index: DoorIndex) -> Result<Option<String>>;

    /// Records revealed content for a door. Persists before returning.
    fn set(&self, index: DoorIndex, content: &str) -> Result<()>;

    /// Reads the full persisted state.
    fn load_all(&self) -> Result<RevealState>;

    /// Removes every entry. The only way a door becomes closed again.
    fn clear(&self) -> Result<()>;

    /// Returns true if the door has been opened.
    fn is_open(&self, index: DoorIndex) -> Result<bool> {
        Ok(self.get(index)?.is_some())
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> PersistenceError {
    PersistenceError::LockPoisoned(e.to_string())
}

/// Reveal store backed by a single JSON file.
///
/// The whole state lives in one file (`{"3": "<p>x</p>"}`), rewritten
/// atomically on every `set`. Reads are served from an in-memory copy that
/// is filled by the first `load_all`, or by the first `get`/`set` if that
/// comes earlier.
pub struct FileRevealStore {
    path: PathBuf,
    state: RwLock<Option<RevealState>>,
}

impl FileRevealStore {
    /// Creates a store at `path` without reading it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: RwLock::new(None),
        }
    }

    /// Opens the store at `path`, loading any persisted state.
    ///
    /// A missing or empty file is an empty state.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.load_all()?;
        Ok(store)
    }

    fn read_file(&self) -> Result<RevealState> {
        Ok(read_json_optional(&self.path)?.unwrap_or_default())
    }
}

impl RevealStore for FileRevealStore {
    fn get(&self, index: DoorIndex) -> Result<Option<String>> {
        if let Some(state) = self.state.read().map_err(poisoned)?.as_ref() {
            return Ok(state.get(index).map(str::to_string));
        }
        Ok(self.load_all()?.get(index).map(str::to_string))
    }

    fn set(&self, index: DoorIndex, content: &str) -> Result<()> {
        let mut state = self.state.write().map_err(poisoned)?;

        // Only publish the new entry once it is on disk
        let mut next = match state.as_ref() {
            Some(current) => current.clone(),
            None => self.read_file()?,
        };
        next.insert(index, content);
        atomic_write_json(&self.path, &next)?;
        *state = Some(next);

        debug!(index, path = %self.path.display(), "Persisted opened door");
        Ok(())
    }

    fn load_all(&self) -> Result<RevealState> {
        let loaded = self.read_file()?;
        *self.state.write().map_err(poisoned)? = Some(loaded.clone());

        info!(count = loaded.len(), path = %self.path.display(), "Loaded reveal state");
        Ok(loaded)
    }

    fn clear(&self) -> Result<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        remove_if_exists(&self.path)?;
        *state = Some(RevealState::new());

        info!(path = %self.path.display(), "Cleared reveal state");
        Ok(())
    }
}

/// Reveal store kept in memory only. Lost when dropped.
#[derive(Default)]
pub struct MemoryRevealStore {
    state: RwLock<RevealState>,
}

impl MemoryRevealStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `state`.
    pub fn with_state(state: RevealState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }
}

impl RevealStore for MemoryRevealStore {
    fn get(&self, index: DoorIndex) -> Result<Option<String>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(index).map(str::to_string))
    }

    fn set(&self, index: DoorIndex, content: &str) -> Result<()> {
        self.state.write().map_err(poisoned)?.insert(index, content);
        Ok(())
    }

    fn load_all(&self) -> Result<RevealState> {
        Ok(self.state.read().map_err(poisoned)?.clone())
    }

    fn clear(&self) -> Result<()> {
        *self.state.write().map_err(poisoned)? = RevealState::new();
        Ok(())
    }
}
