//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "scrubber.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: scrubber validate-config");
                println!("  3. Redact records: scrubber redact <input.csv>");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Starter configuration with every setting at its default
    fn generate_config() -> String {
        r#"# Scrubber Configuration File
# PII detection and redaction for JSON records
#
# Values may reference environment variables as ${VAR_NAME}.
# Any setting can be overridden with SCRUBBER_<SECTION>_<KEY>.

[application]
# trace | debug | info | warn | error
log_level = "info"

[output]
# Redacted CSV (record_id,redacted_data_json,is_pii)
path = "redacted_output_candidate_full_name.csv"

# Print the redaction report after each run
report = false

# Write the redaction report as JSON
# report_path = "redaction_report.json"

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# daily | hourly | never
local_rotation = "daily"

[audit]
# One entry per record with detections; original values are stored as SHA-256 hashes
enabled = false
log_path = "./audit/redaction.log"
json_format = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrubberConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: ScrubberConfig = toml::from_str(&InitArgs::generate_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.output.path, "redacted_output_candidate_full_name.csv");
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scrubber.toml");
        let args = InitArgs {
            output: path.to_str().unwrap().to_string(),
            force: false,
        };

        assert_eq!(args.execute().unwrap(), EXIT_SUCCESS);
        assert!(fs::read_to_string(&path).unwrap().contains("[output]"));
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scrubber.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_str().unwrap().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), EXIT_CONFIG_ERROR);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().unwrap(), EXIT_SUCCESS);
    }
}
