//! Run summary and reporting
//!
//! This module defines structures for tracking and reporting redaction run results.

use crate::anonymization::RedactionReport;
use crate::domain::RecordErrorDetail;
use std::time::Duration;

/// Summary of a redaction run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// CSV data rows read (header excluded)
    pub rows_read: usize,

    /// Rows written to the output
    pub rows_written: usize,

    /// Rows that could not be read at all
    pub failed_rows: usize,

    /// Duration of the run
    pub duration: Duration,

    /// Row-level errors encountered during the run
    pub errors: Vec<RecordErrorDetail>,

    /// Detection statistics
    pub report: RedactionReport,
}

impl RunSummary {
    /// Create a new empty run summary
    pub fn new() -> Self {
        Self {
            rows_read: 0,
            rows_written: 0,
            failed_rows: 0,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
            report: RedactionReport::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add a row-level error
    pub fn add_error(&mut self, error: RecordErrorDetail) {
        self.failed_rows += 1;
        self.errors.push(error);
    }

    /// Records flagged as PII
    pub fn pii_records(&self) -> usize {
        self.report.pii_records
    }

    /// Rows written with a `False` verdict, malformed rows included
    pub fn non_pii_records(&self) -> usize {
        self.rows_written.saturating_sub(self.report.pii_records)
    }

    /// Check if every row was read and written
    pub fn is_successful(&self) -> bool {
        self.failed_rows == 0 && self.rows_written == self.rows_read
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            rows_read = self.rows_read,
            rows_written = self.rows_written,
            pii_records = self.report.pii_records,
            malformed_records = self.report.malformed_records,
            failed_rows = self.failed_rows,
            duration_ms = self.duration.as_millis(),
            "Run summary"
        );

        if !self.errors.is_empty() {
            tracing::warn!(error_count = self.errors.len(), "Run completed with errors");
            for error in &self.errors {
                tracing::warn!(
                    line = ?error.line,
                    message = %error.message,
                    "Row error"
                );
            }
        }
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_successful() {
        let summary = RunSummary::new();
        assert!(summary.is_successful());
        assert_eq!(summary.pii_records(), 0);
    }

    #[test]
    fn test_add_error_marks_failure() {
        let mut summary = RunSummary::new();
        summary.rows_read = 2;
        summary.rows_written = 1;
        summary.add_error(RecordErrorDetail::new("bad row").with_line(3));

        assert_eq!(summary.failed_rows, 1);
        assert_eq!(summary.non_pii_records(), 1);
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_with_duration() {
        let summary = RunSummary::new().with_duration(Duration::from_millis(250));
        assert_eq!(summary.duration.as_millis(), 250);
    }
}
