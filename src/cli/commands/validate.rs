//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Scrubber configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Unlike `redact`, a missing file is an error here.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        // Loading already runs validation
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Output Path: {}", config.output.path);
        println!("  Console Report: {}", config.output.report);
        println!(
            "  Report File: {}",
            config.output.report_path.as_deref().unwrap_or("(none)")
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!(
                    "{} ({})",
                    config.logging.local_path, config.logging.local_rotation
                )
            } else {
                "disabled".to_string()
            }
        );
        println!(
            "  Audit Log: {}",
            if config.audit.enabled {
                config.audit.log_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();

        Ok(EXIT_SUCCESS)
    }
}
