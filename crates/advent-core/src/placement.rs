//! Door placement on a canvas.
//!
//! Each door is placed by drawing random anchors inside the canvas and
//! rejecting any that come too close to an already placed door. When no
//! acceptable anchor turns up within [`PlacementConfig::max_attempts`] draws,
//! the door falls back to a fixed grid slot instead. Grid slots are exempt
//! from the proximity rule, so under extreme density doors may overlap, but
//! placement always finishes after at most `count * max_attempts` draws.
//!
//! # Example
//!
//! ```
//! use advent_core::placement::{place, PlacementConfig};
//! use advent_models::Canvas;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let positions = place(24, Canvas::new(1200.0, 2000.0), &PlacementConfig::default(), &mut rng);
//! assert_eq!(positions.len(), 24);
//! ```

use advent_models::{Canvas, Position};
use rand::Rng;
use tracing::{debug, trace, warn};

/// Tunables for door placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Side length of the square door footprint.
    pub door_size: f64,
    /// Inset from the canvas edges, also the gap between grid slots.
    pub padding: f64,
    /// Extra clearance added to the footprint by the proximity test.
    pub margin: f64,
    /// Random draws per door before falling back to the grid.
    pub max_attempts: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            door_size: 150.0,
            padding: 20.0,
            margin: 50.0,
            max_attempts: 100,
        }
    }
}

impl PlacementConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the door footprint size.
    pub fn with_door_size(mut self, size: f64) -> Self {
        self.door_size = size;
        self
    }

    /// Sets the edge padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the proximity margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the number of random draws per door.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Minimum distance on at least one axis for two anchors to be apart.
    fn clearance(&self) -> f64 {
        self.door_size + self.margin
    }

    /// Distance between neighbouring grid slots.
    fn grid_step(&self) -> f64 {
        self.door_size + self.padding
    }
}

/// Result of a placement run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// One anchor per door, in door order.
    pub positions: Vec<Position>,
    /// 0-based indices of doors placed on the fallback grid.
    pub fallback_indices: Vec<usize>,
}

impl Layout {
    /// Returns true if the door at `index` was grid-placed.
    pub fn is_fallback(&self, index: usize) -> bool {
        self.fallback_indices.contains(&index)
    }
}

/// Returns true if two anchors are too close together.
///
/// Both axes must be within the footprint plus margin at the same time. This
/// is a proximity test rather than a rectangle intersection, so doors that
/// merely sit close to each other also count as overlapping.
pub fn overlaps(a: &Position, b: &Position, config: &PlacementConfig) -> bool {
    let clearance = config.clearance();
    (a.x - b.x).abs() < clearance && (a.y - b.y).abs() < clearance
}

/// Deterministic grid slot for the door at 0-based `index` of `count`.
///
/// Columns are `ceil(sqrt(count))`. The x coordinate wraps at the canvas
/// width; the y coordinate does not.
pub fn grid_position(
    index: usize,
    count: usize,
    canvas: Canvas,
    config: &PlacementConfig,
) -> Position {
    let columns = ((count as f64).sqrt().ceil() as usize).max(1);
    let col = index % columns;
    let row = index / columns;
    let step = config.grid_step();

    let mut x = col as f64 * step;
    if canvas.width > 0.0 {
        x %= canvas.width;
    }

    Position::new(x, row as f64 * step)
}

/// Draws one anchor uniformly inside the padded canvas.
///
/// Returns `None` when the canvas is too small to hold a padded footprint.
fn random_candidate<R: Rng + ?Sized>(
    canvas: Canvas,
    config: &PlacementConfig,
    rng: &mut R,
) -> Option<Position> {
    let min = config.padding;
    let max_x = canvas.width - config.door_size - config.padding;
    let max_y = canvas.height - config.door_size - config.padding;
    if !(max_x >= min && max_y >= min) {
        return None;
    }

    Some(Position::new(
        rng.random_range(min..=max_x),
        rng.random_range(min..=max_y),
    ))
}

/// Places `count` doors and reports which ones used the grid fallback.
pub fn place_layout<R: Rng + ?Sized>(
    count: usize,
    canvas: Canvas,
    config: &PlacementConfig,
    rng: &mut R,
) -> Layout {
    if !canvas.is_valid() {
        warn!(width = canvas.width, height = canvas.height, "Invalid canvas, using grid only");
    }

    let mut layout = Layout {
        positions: Vec::with_capacity(count),
        fallback_indices: Vec::new(),
    };

    for index in 0..count {
        let mut accepted = None;

        for attempt in 0..config.max_attempts {
            let Some(candidate) = random_candidate(canvas, config, rng) else {
                break;
            };
            if !layout
                .positions
                .iter()
                .any(|placed| overlaps(placed, &candidate, config))
            {
                trace!(index, attempt, "Placed door");
                accepted = Some(candidate);
                break;
            }
        }

        let position = accepted.unwrap_or_else(|| {
            layout.fallback_indices.push(index);
            grid_position(index, count, canvas, config)
        });
        layout.positions.push(position);
    }

    if !layout.fallback_indices.is_empty() {
        debug!(
            count,
            fallback = layout.fallback_indices.len(),
            "Grid fallback used for crowded canvas"
        );
    }

    layout
}

/// Places `count` doors on the canvas, one anchor per door.
pub fn place<R: Rng + ?Sized>(
    count: usize,
    canvas: Canvas,
    config: &PlacementConfig,
    rng: &mut R,
) -> Vec<Position> {
    place_layout(count, canvas, config, rng).positions
}
