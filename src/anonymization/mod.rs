//! PII detection and masking
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Detection**: an ordered decision list over field names and value patterns that
//!   assigns at most one category per field
//! - **Masking**: a format-preserving transform per category
//! - **Decision**: the standalone/combinatorial rule that turns a presence map into a
//!   record verdict
//! - **Audit**: optional structured log with hashed PII values
//!
//! # Usage
//!
//! ```rust
//! use scrubber::anonymization::AnonymizationEngine;
//! use scrubber::domain::Record;
//!
//! let engine = AnonymizationEngine::new();
//! let record = Record::from_json("7", r#"{"city": "Pune"}"#).unwrap();
//! let outcome = engine.process_record(&record);
//! assert!(!outcome.is_pii);
//! ```

pub mod anonymizer;
pub mod audit;
pub mod decision;
pub mod detector;
pub mod engine;
pub mod models;
pub mod report;

// Re-export main types
pub use engine::AnonymizationEngine;
pub use models::{Detection, PiiCategory, PresenceMap, RecordOutcome};
pub use report::RedactionReport;
