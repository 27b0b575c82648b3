//! Redaction reporting
//!
//! This module provides formatted reports for a redaction run, showing PII detection
//! statistics, sample masked values, and warnings. Original values never appear in a
//! report.

use crate::anonymization::models::{PiiCategory, RecordOutcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of samples kept in a report
const MAX_SAMPLES: usize = 20;

/// Maximum number of warnings kept in a report
const MAX_WARNINGS: usize = 20;

/// Redaction report with PII detection statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionReport {
    /// Total records classified (malformed rows excluded)
    pub total_records: usize,

    /// Records with a PII verdict
    pub pii_records: usize,

    /// Records with detections but no PII verdict
    pub records_below_threshold: usize,

    /// Records without any detection
    pub clean_records: usize,

    /// Rows whose `data_json` could not be parsed
    pub malformed_records: usize,

    /// Presence counts by category
    pub detections_by_category: BTreeMap<PiiCategory, usize>,

    /// Sample masked values
    pub samples: Vec<RedactionSample>,

    /// Warnings raised during the run
    pub warnings: Vec<String>,

    /// Warnings dropped once `warnings` was full
    #[serde(default)]
    pub suppressed_warnings: usize,
}

/// Sample redaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionSample {
    /// Record the sample came from
    pub record_id: String,

    /// PII category
    pub category: PiiCategory,

    /// Field name in the record
    pub field_name: String,

    /// Masked value
    pub masked: String,
}

impl RedactionReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total_records: 0,
            pii_records: 0,
            records_below_threshold: 0,
            clean_records: 0,
            malformed_records: 0,
            detections_by_category: BTreeMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            suppressed_warnings: 0,
        }
    }

    /// Add a processed record
    pub fn add_outcome(&mut self, outcome: &RecordOutcome) {
        self.total_records += 1;

        if outcome.is_pii {
            self.pii_records += 1;
        } else if outcome.has_detections() {
            self.records_below_threshold += 1;
        } else {
            self.clean_records += 1;
        }

        for detection in outcome.presence.iter() {
            *self
                .detections_by_category
                .entry(detection.category)
                .or_insert(0) += 1;

            if self.samples.len() < MAX_SAMPLES {
                if let Some(masked) = outcome
                    .redacted
                    .get(&detection.field_name)
                    .and_then(|v| v.as_str())
                {
                    self.samples.push(RedactionSample {
                        record_id: outcome.record_id.to_string(),
                        category: detection.category,
                        field_name: detection.field_name.clone(),
                        masked: masked.to_string(),
                    });
                }
            }
        }
    }

    /// Count a row that bypassed classification
    pub fn add_malformed(&mut self, record_id: &str) {
        self.malformed_records += 1;
        self.add_warning(format!(
            "Record {record_id}: data_json is not a JSON object, passed through unredacted"
        ));
    }

    /// Add a warning, counting it instead once the report holds `MAX_WARNINGS`
    pub fn add_warning(&mut self, warning: String) {
        if self.warnings.len() < MAX_WARNINGS {
            self.warnings.push(warning);
        } else {
            self.suppressed_warnings += 1;
        }
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                      PII REDACTION REPORT                     \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Total Records Classified:    {}\n",
            self.total_records
        ));
        output.push_str(&format!("  Records Flagged as PII:      {}\n", self.pii_records));
        output.push_str(&format!(
            "  Records Below Threshold:     {}\n",
            self.records_below_threshold
        ));
        output.push_str(&format!("  Records Without Detections:  {}\n", self.clean_records));
        output.push_str(&format!(
            "  Malformed Records:           {}\n",
            self.malformed_records
        ));
        output.push('\n');

        if !self.detections_by_category.is_empty() {
            output.push_str("🔍 DETECTIONS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.detections_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1));

            for (category, count) in categories {
                let kind = if category.is_standalone() {
                    "standalone"
                } else {
                    "combinatorial"
                };
                output.push_str(&format!(
                    "  {:14} {:15} {:>5}\n",
                    category.key_name(),
                    kind,
                    count
                ));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE REDACTIONS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            for sample in self.samples.iter().take(10) {
                output.push_str(&format!(
                    "  [{}] {} ({}): \"{}\"\n",
                    sample.record_id, sample.field_name, sample.category, sample.masked
                ));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            if self.suppressed_warnings > 0 {
                output.push_str(&format!(
                    "  … and {} more\n",
                    self.suppressed_warnings
                ));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

impl Default for RedactionReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::AnonymizationEngine;
    use crate::domain::Record;

    fn outcome(json: &str) -> RecordOutcome {
        let record = Record::from_json("r1", json).unwrap();
        AnonymizationEngine::new().process_record(&record)
    }

    #[test]
    fn test_report_creation() {
        let report = RedactionReport::new();
        assert_eq!(report.total_records, 0);
        assert!(report.detections_by_category.is_empty());
        assert!(report.samples.is_empty());
    }

    #[test]
    fn test_add_outcomes() {
        let mut report = RedactionReport::new();
        report.add_outcome(&outcome(r#"{"phone": "9876543210"}"#));
        report.add_outcome(&outcome(r#"{"name": "Jane Doe"}"#));
        report.add_outcome(&outcome(r#"{"city": "Pune"}"#));

        assert_eq!(report.total_records, 3);
        assert_eq!(report.pii_records, 1);
        assert_eq!(report.records_below_threshold, 1);
        assert_eq!(report.clean_records, 1);
        assert_eq!(report.detections_by_category.get(&PiiCategory::Phone), Some(&1));
        assert_eq!(report.samples.len(), 2);
        assert_eq!(report.samples[0].masked, "98XXXXXX10");
    }

    #[test]
    fn test_malformed_adds_warning() {
        let mut report = RedactionReport::new();
        report.add_malformed("r9");
        assert_eq!(report.malformed_records, 1);
        assert!(report.warnings[0].contains("r9"));
    }

    #[test]
    fn test_warnings_are_capped() {
        let mut report = RedactionReport::new();
        for i in 0..50 {
            report.add_malformed(&format!("r{i}"));
        }

        assert_eq!(report.malformed_records, 50);
        assert_eq!(report.warnings.len(), MAX_WARNINGS);
        assert_eq!(report.suppressed_warnings, 30);
        assert!(report.warnings[0].contains("r0"));
        assert!(report.format_console().contains("… and 30 more"));
    }

    #[test]
    fn test_format_console_hides_originals() {
        let mut report = RedactionReport::new();
        report.add_outcome(&outcome(r#"{"phone": "9876543210", "name": "Jane Doe"}"#));

        let output = report.format_console();
        assert!(output.contains("PII REDACTION REPORT"));
        assert!(output.contains("Total Records Classified:    1"));
        assert!(output.contains("JXXX DXXX"));
        assert!(!output.contains("9876543210"));
    }

    #[test]
    fn test_json_uses_category_keys() {
        let mut report = RedactionReport::new();
        report.add_outcome(&outcome(r#"{"upi_id": "ravi@okaxis"}"#));

        let json = report.format_json().unwrap();
        assert!(json.contains("\"upi_id\": 1"));
    }
}
