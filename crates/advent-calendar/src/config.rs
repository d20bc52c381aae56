//! Calendar configuration.

use advent_core::PlacementConfig;
use advent_models::{Canvas, CollectionId, DOOR_LIMIT};

use crate::error::{CalendarError, Result};

/// Default canvas width.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;

/// Default canvas height.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 2000.0;

/// Configuration for one calendar.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Remote collection the doors reveal.
    pub collection: CollectionId,
    /// Title shown above the calendar.
    pub title: String,
    /// Background image URL.
    pub background_image: Option<String>,
    /// Maximum number of doors, at most [`DOOR_LIMIT`].
    pub door_limit: usize,
    /// Area the doors are placed within.
    pub canvas: Canvas,
    /// Door placement tunables.
    pub placement: PlacementConfig,
    /// Seed for a reproducible layout; a fresh layout per load if unset.
    pub seed: Option<u64>,
}

impl CalendarConfig {
    /// Creates a config for a collection with default values.
    pub fn new(collection: impl Into<CollectionId>) -> Self {
        Self {
            collection: collection.into(),
            title: String::new(),
            background_image: None,
            door_limit: DOOR_LIMIT,
            canvas: Canvas::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            placement: PlacementConfig::default(),
            seed: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the background image URL. Blank URLs clear it.
    pub fn with_background_image(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.background_image = if url.trim().is_empty() { None } else { Some(url) };
        self
    }

    /// Sets the maximum number of doors, capped at [`DOOR_LIMIT`].
    pub fn with_door_limit(mut self, limit: usize) -> Self {
        self.door_limit = limit.min(DOOR_LIMIT);
        self
    }

    /// Sets the canvas size.
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Canvas::new(width, height);
        self
    }

    /// Sets the placement tunables.
    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the layout seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the config before a calendar is loaded.
    pub fn validate(&self) -> Result<()> {
        if self.collection.is_blank() {
            return Err(CalendarError::Configuration(
                "collection identifier is empty".to_string(),
            ));
        }
        if !self.canvas.is_valid() {
            return Err(CalendarError::Configuration(format!(
                "canvas must be positive, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if !(self.placement.door_size > 0.0) {
            return Err(CalendarError::Configuration(
                "door size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
