//! Door types.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::reveal::RevealState;

/// 1-based door number; door `i` reveals the `i`-th collection item.
pub type DoorIndex = u32;

/// One clickable door on the calendar canvas.
///
/// The position is fixed at creation. The revealed content is set once the
/// door is opened and never cleared afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Door number, starting at 1.
    pub index: DoorIndex,

    /// Where the door sits on the canvas.
    pub position: Position,

    /// Content revealed when the door was opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed_content: Option<String>,
}

impl Door {
    /// Creates a closed door.
    pub fn new(index: DoorIndex, position: Position) -> Self {
        Self {
            index,
            position,
            revealed_content: None,
        }
    }

    /// Creates a door whose open state is taken from persisted reveals.
    pub fn restore(index: DoorIndex, position: Position, reveals: &RevealState) -> Self {
        Self {
            index,
            position,
            revealed_content: reveals.get(index).map(str::to_string),
        }
    }

    /// Returns true if the door has been opened.
    pub fn is_open(&self) -> bool {
        self.revealed_content.is_some()
    }

    /// Returns the revealed content, or an empty string for a closed door.
    pub fn content_or_empty(&self) -> &str {
        self.revealed_content.as_deref().unwrap_or("")
    }

    pub(crate) fn reveal(&mut self, content: impl Into<String>) {
        if self.revealed_content.is_none() {
            self.revealed_content = Some(content.into());
        }
    }
}

/// Zips positions with 1-based door numbers, restoring open state.
pub fn build_doors(positions: &[Position], reveals: &RevealState) -> Vec<Door> {
    positions
        .iter()
        .zip(1..)
        .map(|(position, index)| Door::restore(index, *position, reveals))
        .collect()
}

/// Marks a door open in a door list. Does nothing if it is already open.
pub fn reveal_door(doors: &mut [Door], index: DoorIndex, content: impl Into<String>) {
    if let Some(door) = doors.iter_mut().find(|d| d.index == index) {
        door.reveal(content);
    }
}
