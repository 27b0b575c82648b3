//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`] that classifies every field of a
//! record, masks the fields it attributes to a PII category and derives the record-level
//! verdict.
//!
//! # Examples
//!
//! ```
//! use scrubber::anonymization::AnonymizationEngine;
//! use scrubber::domain::Record;
//!
//! let engine = AnonymizationEngine::new();
//! let record = Record::from_json("1", r#"{"phone": "9876543210", "name": "Ravi Kumar"}"#)
//!     .unwrap();
//!
//! let outcome = engine.process_record(&record);
//! assert!(outcome.is_pii);
//! assert_eq!(outcome.redacted["phone"], "98XXXXXX10");
//! assert_eq!(outcome.redacted["name"], "RXXX KXXX");
//! ```

use crate::anonymization::{
    anonymizer::{Anonymizer, MaskingStrategy},
    decision,
    detector::{rules::RuleDetector, PiiDetector},
    models::{Detection, PresenceMap, RecordOutcome},
};
use crate::domain::{coerce_value, Record};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Main anonymization engine
///
/// The engine holds no per-record state; one instance can process any number of
/// records, in any order, from any thread.
pub struct AnonymizationEngine {
    detector: Arc<dyn PiiDetector>,
    anonymizer: Arc<dyn Anonymizer>,
}

impl AnonymizationEngine {
    /// Create an engine with the built-in rule detector and masking strategy
    pub fn new() -> Self {
        Self::with_components(Arc::new(RuleDetector::new()), Arc::new(MaskingStrategy::new()))
    }

    /// Create an engine from explicit components
    pub fn with_components(
        detector: Arc<dyn PiiDetector>,
        anonymizer: Arc<dyn Anonymizer>,
    ) -> Self {
        Self {
            detector,
            anonymizer,
        }
    }

    /// Classify and mask every field of a record
    ///
    /// Returns the presence map and the redacted fields in input order. Fields without a
    /// category keep their original JSON value.
    pub fn classify_record(&self, fields: &Map<String, Value>) -> (PresenceMap, Map<String, Value>) {
        let mut presence = PresenceMap::new();
        let mut redacted = Map::with_capacity(fields.len());

        for (field_name, raw) in fields {
            let value = coerce_value(raw);

            let Some(classification) = self.detector.classify_field(field_name, &value) else {
                redacted.insert(field_name.clone(), raw.clone());
                continue;
            };

            let masked = self
                .anonymizer
                .anonymize_field(classification.category, &value);
            redacted.insert(field_name.clone(), Value::String(masked));

            // Blank values are masked but never count as present
            let first = !value.is_empty()
                && presence.record(Detection::new(
                    classification.category,
                    field_name.as_str(),
                    value,
                    classification.source,
                ));

            tracing::trace!(
                field = %field_name,
                category = %classification.category,
                source = ?classification.source,
                first,
                "Field classified"
            );
        }

        (presence, redacted)
    }

    /// Process a single record into its redacted fields and verdict
    pub fn process_record(&self, record: &Record) -> RecordOutcome {
        let (presence, redacted) = self.classify_record(&record.fields);
        let is_pii = decision::is_pii(&presence);

        tracing::debug!(
            record_id = %record.id,
            fields = record.len(),
            categories = presence.len(),
            is_pii,
            "Record processed"
        );

        RecordOutcome {
            record_id: record.id.clone(),
            redacted,
            presence,
            is_pii,
        }
    }
}

impl Default for AnonymizationEngine {
    fn default() -> Self {
        Self::new()
    }
}
