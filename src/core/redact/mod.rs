//! CSV redaction driver
//!
//! Reads `record_id,data_json` rows, classifies and masks each record, and writes
//! `record_id,redacted_data_json,is_pii` rows.

pub mod coordinator;
pub mod format;
pub mod summary;

pub use coordinator::RedactionCoordinator;
pub use format::{render_redacted, render_verdict};
pub use summary::RunSummary;
