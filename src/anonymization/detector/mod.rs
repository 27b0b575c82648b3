//! PII detection module
//!
//! Provides the trait-based detection interface, the pattern library and the ordered
//! rule detector that assigns at most one category to each field.

pub mod patterns;
pub mod rules;

use crate::anonymization::models::{DetectionSource, PiiCategory};

/// Category assigned to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Assigned category
    pub category: PiiCategory,
    /// Whether a rule or the value rescan assigned it
    pub source: DetectionSource,
}

/// Trait for PII detection implementations
pub trait PiiDetector: Send + Sync {
    /// Classify one field from its name and coerced value
    ///
    /// Returns `None` when the field carries no PII category.
    fn classify_field(&self, field_name: &str, value: &str) -> Option<Classification>;
}
