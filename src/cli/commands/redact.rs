//! Redact command implementation
//!
//! This module implements the `redact` command that turns a CSV of
//! `record_id,data_json` rows into a redacted CSV with a PII verdict per row.

use super::{exit_code_for, EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::{load_config_or_default, ScrubberConfig};
use crate::core::redact::{RedactionCoordinator, RunSummary};
use clap::Args;
use std::path::Path;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Input CSV with `record_id` and `data_json` columns
    pub input: String,

    /// Output CSV path (overrides `[output] path`)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print a redaction report after the run
    #[arg(long)]
    pub report: bool,

    /// Write the redaction report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report_file: Option<String>,

    /// Write an audit log of detections (overrides `[audit] enabled`)
    #[arg(long)]
    pub audit: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Starting redact command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let coordinator = match RedactionCoordinator::from_config(&config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize redaction");
                eprintln!("Failed to initialize redaction: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let output = Path::new(&config.output.path);
        let summary = match coordinator.run(Path::new(&self.input), output) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Redaction failed");
                eprintln!("Redaction failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        Self::print_summary(&summary, &config.output.path);

        if config.output.report {
            println!("{}", summary.report.format_console());
        }

        if let Some(report_path) = &config.output.report_path {
            summary.report.write_to_file(Path::new(report_path))?;
            println!("Report written to {report_path}");
        }

        Ok(EXIT_SUCCESS)
    }

    fn apply_overrides(&self, config: &mut ScrubberConfig) {
        if let Some(output) = &self.output {
            tracing::debug!(output = %output, "Overriding output path from CLI");
            config.output.path = output.clone();
        }

        if self.report {
            config.output.report = true;
        }

        if let Some(report_file) = &self.report_file {
            config.output.report_path = Some(report_file.clone());
        }

        if self.audit {
            tracing::debug!("Enabling audit log from CLI");
            config.audit.enabled = true;
        }
    }

    fn print_summary(summary: &RunSummary, output_path: &str) {
        println!();
        println!("Redaction Summary:");
        println!("  Rows Read: {}", summary.rows_read);
        println!("  Rows Written: {}", summary.rows_written);
        println!("  PII Records: {}", summary.pii_records());
        println!("  Non-PII Records: {}", summary.non_pii_records());
        println!("  Malformed Records: {}", summary.report.malformed_records);
        println!("  Unreadable Rows: {}", summary.failed_rows);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Output: {output_path}");
        println!();

        if !summary.errors.is_empty() {
            println!("Errors encountered:");
            for error in &summary.errors {
                match error.line {
                    Some(line) => println!("  - line {line}: {}", error.message),
                    None => println!("  - {}", error.message),
                }
            }
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RedactArgs {
        RedactArgs {
            input: "records.csv".to_string(),
            output: None,
            report: false,
            report_file: None,
            audit: false,
        }
    }

    #[test]
    fn test_overrides_leave_config_untouched_by_default() {
        let mut config = ScrubberConfig::default();
        args().apply_overrides(&mut config);

        assert_eq!(config.output.path, "redacted_output_candidate_full_name.csv");
        assert!(!config.output.report);
        assert!(config.output.report_path.is_none());
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_overrides_apply_cli_flags() {
        let mut config = ScrubberConfig::default();
        let args = RedactArgs {
            output: Some("out.csv".to_string()),
            report: true,
            report_file: Some("report.json".to_string()),
            audit: true,
            ..args()
        };
        args.apply_overrides(&mut config);

        assert_eq!(config.output.path, "out.csv");
        assert!(config.output.report);
        assert_eq!(config.output.report_path.as_deref(), Some("report.json"));
        assert!(config.audit.enabled);
    }
}
