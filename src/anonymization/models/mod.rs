//! Anonymization data models

pub mod pii_entity;
pub mod presence;

pub use pii_entity::{CategoryKind, Detection, DetectionSource, PiiCategory};
pub use presence::{PresenceMap, RecordOutcome};
