//! A loaded calendar and the door-open flow.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use advent_arena::ContentFetcher;
use advent_core::place_layout;
use advent_models::{build_doors, reveal_door, Door, DoorIndex};
use advent_persistence::RevealStore;

use crate::config::CalendarConfig;
use crate::error::{CalendarError, Result};

/// What happened when a door was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The door was closed and is now open with this content.
    Opened(String),
    /// The door was already open; nothing was fetched or written.
    AlreadyOpen(String),
    /// Another open of the same door is still resolving; nothing was done.
    InProgress,
}

/// How the initial load went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Items fetched from the collection (= number of doors).
    pub items: usize,
    /// Whether pagination stopped on a failed page.
    pub aborted: bool,
    /// Doors placed on the fallback grid.
    pub fallback_doors: usize,
    /// Doors already open from persisted state.
    pub opened_doors: usize,
}

/// Marks a door as being resolved until dropped.
struct InFlight<'a> {
    set: &'a Mutex<HashSet<DoorIndex>>,
    index: DoorIndex,
}

impl<'a> InFlight<'a> {
    /// Claims `index`, or returns `None` if it is already claimed.
    fn claim(set: &'a Mutex<HashSet<DoorIndex>>, index: DoorIndex) -> Result<Option<Self>> {
        let mut claimed = set
            .lock()
            .map_err(|e| CalendarError::LockPoisoned(e.to_string()))?;
        if !claimed.insert(index) {
            return Ok(None);
        }
        Ok(Some(Self { set, index }))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        // Also runs when an open is abandoned mid-fetch
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.index);
    }
}

/// A calendar: doors placed on a canvas, each bound to one collection item.
pub struct Calendar {
    config: CalendarConfig,
    fetcher: ContentFetcher,
    store: Arc<dyn RevealStore>,
    doors: RwLock<Vec<Door>>,
    in_flight: Mutex<HashSet<DoorIndex>>,
    summary: LoadSummary,
}

impl Calendar {
    /// Loads a calendar.
    ///
    /// Persisted reveal state is read first, before any network request.
    /// Then up to `door_limit` items are fetched, one door is placed per
    /// item, and doors found in the reveal state start out open.
    ///
    /// Fetch problems only shorten the door list; only configuration and
    /// reveal store errors fail the load.
    pub async fn load(
        config: CalendarConfig,
        fetcher: ContentFetcher,
        store: Arc<dyn RevealStore>,
    ) -> Result<Self> {
        config.validate()?;

        let reveals = store.load_all()?;
        debug!(opened = reveals.len(), "Restored reveal state");

        let acc = fetcher.accumulate(&config.collection, config.door_limit).await;
        let count = acc.items().len();

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let layout = place_layout(count, config.canvas, &config.placement, &mut rng);
        let doors = build_doors(&layout.positions, &reveals);

        let summary = LoadSummary {
            items: count,
            aborted: acc.is_aborted(),
            fallback_doors: layout.fallback_indices.len(),
            opened_doors: doors.iter().filter(|d| d.is_open()).count(),
        };
        if summary.aborted {
            warn!(
                collection = %config.collection,
                doors = count,
                "Calendar loaded with partial contents"
            );
        }
        info!(
            collection = %config.collection,
            doors = summary.items,
            opened = summary.opened_doors,
            fallback = summary.fallback_doors,
            "Calendar loaded"
        );

        Ok(Self {
            config,
            fetcher,
            store,
            doors: RwLock::new(doors),
            in_flight: Mutex::new(HashSet::new()),
            summary,
        })
    }

    /// Calendar configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Calendar title.
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Background image URL, if any.
    pub fn background_image(&self) -> Option<&str> {
        self.config.background_image.as_deref()
    }

    /// How the initial load went.
    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    /// Number of doors.
    pub fn door_count(&self) -> usize {
        self.summary.items
    }

    /// Snapshot of all doors, in door order.
    pub async fn doors(&self) -> Vec<Door> {
        self.doors.read().await.clone()
    }

    /// Snapshot of a single door.
    pub async fn door(&self, index: DoorIndex) -> Option<Door> {
        self.doors
            .read()
            .await
            .iter()
            .find(|d| d.index == index)
            .cloned()
    }

    /// Opens a door.
    ///
    /// An open door returns its stored content without fetching. A closed
    /// door resolves its collection item, persists the content, and only
    /// then counts as open. If the item cannot be resolved the door stays
    /// closed, nothing is written, and the call may simply be repeated.
    ///
    /// While one open of a door is resolving, further opens of the same
    /// door return [`OpenOutcome::InProgress`] without fetching.
    pub async fn open_door(&self, index: DoorIndex) -> Result<OpenOutcome> {
        if index == 0 || index as usize > self.door_count() {
            return Err(CalendarError::DoorNotFound(index));
        }

        if let Some(content) = self.store.get(index)? {
            debug!(index, "Door already open");
            return Ok(OpenOutcome::AlreadyOpen(content));
        }

        let Some(_claim) = InFlight::claim(&self.in_flight, index)? else {
            debug!(index, "Door open already in progress");
            return Ok(OpenOutcome::InProgress);
        };

        let item = self
            .fetcher
            .fetch_one(&self.config.collection, index as usize)
            .await;

        // The store may have changed while the fetch was outstanding
        if let Some(content) = self.store.get(index)? {
            debug!(index, "Door opened elsewhere during fetch");
            reveal_door(&mut self.doors.write().await, index, content.clone());
            return Ok(OpenOutcome::AlreadyOpen(content));
        }

        let Some(item) = item else {
            warn!(index, collection = %self.config.collection, "Could not resolve door content");
            return Err(CalendarError::ContentNotFound { index });
        };

        let content = item.payload().to_string();
        self.store.set(index, &content)?;
        reveal_door(&mut self.doors.write().await, index, content.clone());

        info!(index, "Door opened");
        Ok(OpenOutcome::Opened(content))
    }

    /// Clears all reveal state, closing every door.
    pub async fn reset(&self) -> Result<()> {
        self.store.clear()?;
        let mut doors = self.doors.write().await;
        for door in doors.iter_mut() {
            door.revealed_content = None;
        }

        info!(collection = %self.config.collection, "Calendar reset");
        Ok(())
    }
}
