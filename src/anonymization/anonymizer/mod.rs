//! Anonymization strategy module
//!
//! Masking is lossy, cosmetic obfuscation; there is no reverse mapping.

pub mod masking;

use crate::anonymization::models::PiiCategory;

pub use masking::{MaskingStrategy, REDACTED_SENTINEL};

/// Trait for anonymization strategy implementations
pub trait Anonymizer: Send + Sync {
    /// Anonymize a field value of a known category
    fn anonymize_field(&self, category: PiiCategory, value: &str) -> String;
}
