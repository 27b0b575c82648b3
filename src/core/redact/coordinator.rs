//! Redaction coordinator - drives a CSV of records through the engine
//!
//! Input rows carry `record_id` and `data_json` columns. Each row is written back
//! as `record_id,redacted_data_json,is_pii` in input order. Rows whose `data_json`
//! is not a JSON object are copied through unchanged with a `False` verdict.

use crate::anonymization::audit::AuditLogger;
use crate::anonymization::{AnonymizationEngine, RecordOutcome};
use crate::config::ScrubberConfig;
use crate::core::redact::format::{render_redacted, render_verdict};
use crate::core::redact::summary::RunSummary;
use crate::domain::{Record, RecordErrorDetail, Result, ScrubError};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Name of the input column holding the record identifier
pub const RECORD_ID_COLUMN: &str = "record_id";

/// Name of the input column holding the record payload
pub const DATA_JSON_COLUMN: &str = "data_json";

/// Header row of the output file
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// Redaction coordinator
pub struct RedactionCoordinator {
    engine: AnonymizationEngine,
    audit: Option<AuditLogger>,
}

impl RedactionCoordinator {
    /// Create a coordinator around an engine, without audit logging
    pub fn new(engine: AnonymizationEngine) -> Self {
        Self {
            engine,
            audit: None,
        }
    }

    /// Create a coordinator from configuration
    pub fn from_config(config: &ScrubberConfig) -> Result<Self> {
        let mut coordinator = Self::new(AnonymizationEngine::new());

        if config.audit.enabled {
            let logger = AuditLogger::new(
                PathBuf::from(&config.audit.log_path),
                config.audit.json_format,
                true,
            )
            .map_err(|e| ScrubError::Configuration(format!("{e:#}")))?;
            coordinator = coordinator.with_audit(logger);
        }

        Ok(coordinator)
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Redact `input` into `output`
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary> {
        crate::log_run_start!(input.display(), output.display());

        let reader = File::open(input).map_err(|e| {
            ScrubError::Input(format!(
                "Failed to open input file {}: {}",
                input.display(),
                e
            ))
        })?;
        // Header problems must surface before an existing output is truncated
        let (csv_reader, columns) = open_input(reader)?;

        let writer = File::create(output).map_err(|e| {
            ScrubError::Output(format!(
                "Failed to create output file {}: {}",
                output.display(),
                e
            ))
        })?;

        let summary = self.redact_rows(csv_reader, columns, writer)?;

        crate::log_run_complete!(
            summary.report.total_records,
            summary.pii_records(),
            summary.duration
        );

        Ok(summary)
    }

    /// Redact CSV rows from `reader` into `writer`
    pub fn process<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<RunSummary> {
        let (csv_reader, columns) = open_input(reader)?;
        self.redact_rows(csv_reader, columns, writer)
    }

    fn redact_rows<R: Read, W: Write>(
        &self,
        mut csv_reader: csv::Reader<R>,
        columns: InputColumns,
        writer: W,
    ) -> Result<RunSummary> {
        let start_time = Instant::now();
        let mut summary = RunSummary::new();

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(OUTPUT_HEADER)
            .map_err(|e| ScrubError::Output(format!("Failed to write CSV header: {e}")))?;

        for row in csv_reader.records() {
            summary.rows_read += 1;

            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    let mut detail = RecordErrorDetail::new(e.to_string());
                    if let Some(position) = e.position() {
                        detail = detail.with_line(position.line());
                    }
                    tracing::warn!(line = ?detail.line, error = %e, "Skipping unreadable row");
                    summary.add_error(detail);
                    continue;
                }
            };

            // Short rows read as empty cells
            let record_id = row.get(columns.record_id).unwrap_or("");
            let data_json = row.get(columns.data_json).unwrap_or("");

            let (redacted, is_pii) = match Record::from_json(record_id, data_json) {
                Some(record) => {
                    let outcome = self.engine.process_record(&record);
                    self.audit_outcome(&outcome, &mut summary);
                    summary.report.add_outcome(&outcome);
                    (render_redacted(&outcome.redacted)?, outcome.is_pii)
                }
                None => {
                    crate::log_record_bypassed!(record_id, "data_json is not a JSON object");
                    summary.report.add_malformed(record_id);
                    (data_json.to_string(), false)
                }
            };

            csv_writer
                .write_record([record_id, redacted.as_str(), render_verdict(is_pii)])
                .map_err(|e| {
                    ScrubError::Output(format!("Failed to write record {record_id}: {e}"))
                })?;
            summary.rows_written += 1;
        }

        csv_writer
            .flush()
            .map_err(|e| ScrubError::Output(format!("Failed to flush output: {e}")))?;

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    fn audit_outcome(&self, outcome: &RecordOutcome, summary: &mut RunSummary) {
        let Some(audit) = &self.audit else {
            return;
        };

        if let Err(e) = audit.log_record(outcome) {
            tracing::warn!(record_id = %outcome.record_id, error = %e, "Failed to write audit entry");
            summary
                .report
                .add_warning(format!("Audit entry for record {} failed: {e}", outcome.record_id));
        }
    }
}

/// Positions of the required input columns
#[derive(Debug, Clone, Copy)]
struct InputColumns {
    record_id: usize,
    data_json: usize,
}

/// Read the header row and locate the required columns
fn open_input<R: Read>(reader: R) -> Result<(csv::Reader<R>, InputColumns)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ScrubError::Input(format!("Failed to read CSV header: {e}")))?;
    let columns = InputColumns {
        record_id: column_index(headers, RECORD_ID_COLUMN)?,
        data_json: column_index(headers, DATA_JSON_COLUMN)?,
    };

    Ok((csv_reader, columns))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        ScrubError::Input(format!("Input CSV is missing required column '{name}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redact(input: &str) -> (String, RunSummary) {
        let coordinator = RedactionCoordinator::new(AnonymizationEngine::new());
        let mut output = Vec::new();
        let summary = coordinator.process(input.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    fn rows(output: &str) -> Vec<Vec<String>> {
        csv::Reader::from_reader(output.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_writes_header_and_rows_in_order() {
        let input = "record_id,data_json\n\
                     1,\"{\"\"phone\"\": \"\"9876543210\"\"}\"\n\
                     2,\"{\"\"city\"\": \"\"Pune\"\"}\"\n";
        let (output, summary) = redact(input);

        assert!(output.starts_with("record_id,redacted_data_json,is_pii"));
        let rows = rows(&output);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1", r#"{"phone": "98XXXXXX10"}"#, "True"]);
        assert_eq!(rows[1], vec!["2", r#"{"city": "Pune"}"#, "False"]);
        assert_eq!(summary.rows_read, 2);
        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.pii_records(), 1);
        assert!(summary.is_successful());
    }

    #[test]
    fn test_malformed_row_passes_through() {
        let input = "record_id,data_json\n7,{not json\n";
        let (output, summary) = redact(input);

        let rows = rows(&output);
        assert_eq!(rows[0], vec!["7", "{not json", "False"]);
        assert_eq!(summary.report.malformed_records, 1);
        assert_eq!(summary.report.total_records, 0);
    }

    #[test]
    fn test_non_object_json_passes_through() {
        let input = "record_id,data_json\n8,\"[1, 2]\"\n";
        let (output, _) = redact(input);
        assert_eq!(rows(&output)[0], vec!["8", "[1, 2]", "False"]);
    }

    #[test]
    fn test_missing_column_is_input_error() {
        let coordinator = RedactionCoordinator::new(AnonymizationEngine::new());
        let mut output = Vec::new();
        let result = coordinator.process("id,payload\n1,{}\n".as_bytes(), &mut output);

        assert!(matches!(result, Err(ScrubError::Input(msg)) if msg.contains("record_id")));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let input = "source,data_json,record_id\nweb,\"{\"\"a\"\": 1}\",r1\n";
        let (output, _) = redact(input);
        assert_eq!(rows(&output)[0], vec!["r1", r#"{"a": 1}"#, "False"]);
    }

    #[test]
    fn test_short_row_reads_as_empty_payload() {
        let input = "record_id,data_json\nlonely\n";
        let (output, summary) = redact(input);
        assert_eq!(rows(&output)[0], vec!["lonely", "", "False"]);
        assert_eq!(summary.report.malformed_records, 1);
    }

    #[test]
    fn test_header_only_input() {
        let (output, summary) = redact("record_id,data_json\n");
        assert!(rows(&output).is_empty());
        assert_eq!(summary.rows_read, 0);
    }
}
