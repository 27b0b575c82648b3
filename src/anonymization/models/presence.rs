//! Presence map and per-record outcome

use super::pii_entity::{Detection, PiiCategory};
use crate::domain::RecordId;
use serde_json::{Map, Value};

/// Per-record map from category to the first field classified into it
///
/// Each category is a write-once slot: once filled, later detections for the same
/// category are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceMap {
    slots: [Option<Detection>; 9],
}

impl PresenceMap {
    /// Create an empty presence map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a detection unless its category is already populated
    ///
    /// Returns `true` if the slot was empty and is now filled.
    pub fn record(&mut self, detection: Detection) -> bool {
        let slot = &mut self.slots[detection.category.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(detection);
        true
    }

    /// Detection attributed to a category, if any
    pub fn get(&self, category: PiiCategory) -> Option<&Detection> {
        self.slots[category.index()].as_ref()
    }

    /// Whether a category is present
    pub fn contains(&self, category: PiiCategory) -> bool {
        self.get(category).is_some()
    }

    /// Present detections, in category order
    pub fn iter(&self) -> impl Iterator<Item = &Detection> {
        self.slots.iter().flatten()
    }

    /// Present categories, in category order
    pub fn categories(&self) -> impl Iterator<Item = PiiCategory> + '_ {
        self.iter().map(|d| d.category)
    }

    /// Number of present categories
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no category is present
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of processing one record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// Record identifier
    pub record_id: RecordId,
    /// Redacted fields, in input order
    pub redacted: Map<String, Value>,
    /// Categories found in the record
    pub presence: PresenceMap,
    /// Record-level verdict
    pub is_pii: bool,
}

impl RecordOutcome {
    /// Check if any category was detected
    pub fn has_detections(&self) -> bool {
        !self.presence.is_empty()
    }
}
