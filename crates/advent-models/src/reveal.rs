//! Persisted record of opened doors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::door::DoorIndex;

/// Mapping from door index to the content it revealed.
///
/// Serialized as a JSON object keyed by the decimal door index, e.g.
/// `{"3": "<p>x</p>"}`. An index present here is permanently open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevealState(BTreeMap<DoorIndex, String>);

impl RevealState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the content revealed behind a door, if it was opened.
    pub fn get(&self, index: DoorIndex) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    /// Returns true if the door has been opened.
    pub fn is_open(&self, index: DoorIndex) -> bool {
        self.0.contains_key(&index)
    }

    /// Records revealed content for a door, replacing any earlier value.
    pub fn insert(&mut self, index: DoorIndex, content: impl Into<String>) {
        self.0.insert(index, content.into());
    }

    /// Number of opened doors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no door has been opened.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates opened doors in index order.
    pub fn iter(&self) -> impl Iterator<Item = (DoorIndex, &str)> {
        self.0.iter().map(|(i, c)| (*i, c.as_str()))
    }
}

impl FromIterator<(DoorIndex, String)> for RevealState {
    fn from_iter<I: IntoIterator<Item = (DoorIndex, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
