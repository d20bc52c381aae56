//! Shared configuration paths for Advent Doors.
//!
//! # Storage Structure
//!
//! All application data is stored under `~/.advent-doors/`:
//!
//! ```text
//! ~/.advent-doors/
//! ├── .env.local            # Optional environment overrides
//! └── state/
//!     └── opened-doors.json # Reveal state (door index -> content)
//! ```
//!
//! # Environment Variables
//!
//! - `ADVENT_STATE_DIR`: Override the base state directory
//! - `ADVENT_REVEAL_FILE`: Override the reveal state file name

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "ADVENT_STATE_DIR";

/// Environment variable for a custom reveal state file name.
pub const REVEAL_FILE_ENV: &str = "ADVENT_REVEAL_FILE";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".advent-doors";

/// Default name of the single reveal state slot.
pub const DEFAULT_REVEAL_FILE: &str = "opened-doors.json";

const STATE_SUBDIR: &str = "state";

static STATE_DIR_CACHE: OnceLock<PathBuf> = OnceLock::new();

/// Get the Advent Doors state directory.
///
/// The state directory is determined by:
/// 1. `ADVENT_STATE_DIR` environment variable if set
/// 2. `~/.advent-doors` if home directory is available
/// 3. `.advent-doors` in current directory as fallback
pub fn state_dir() -> PathBuf {
    STATE_DIR_CACHE
        .get_or_init(|| {
            std::env::var(STATE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::home_dir()
                        .map(|h| h.join(DEFAULT_STATE_DIR))
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
                })
        })
        .clone()
}

/// Get the runtime state directory under a base directory.
pub fn runtime_state_dir_in(base: &Path) -> PathBuf {
    base.join(STATE_SUBDIR)
}

/// Get the runtime state directory.
pub fn runtime_state_dir() -> PathBuf {
    runtime_state_dir_in(&state_dir())
}

/// Get the reveal state file under a base directory.
///
/// The file name is `opened-doors.json` unless `ADVENT_REVEAL_FILE` is set.
pub fn reveal_state_file_in(base: &Path) -> PathBuf {
    let name = std::env::var(REVEAL_FILE_ENV).unwrap_or_else(|_| DEFAULT_REVEAL_FILE.to_string());
    runtime_state_dir_in(base).join(name)
}

/// Get the reveal state file path.
pub fn reveal_state_file() -> PathBuf {
    reveal_state_file_in(&state_dir())
}

/// Get the .env.local file under a base directory.
pub fn env_file_in(base: &Path) -> PathBuf {
    base.join(".env.local")
}

/// Load `.env.local` from `base`, if present.
///
/// Variables already set in the environment are kept.
pub fn load_env_in(base: &Path) {
    let path = env_file_in(base);
    if path.exists() {
        debug!(path = %path.display(), "Loading environment file");
        let _ = dotenvy::from_path(&path);
    }
}
