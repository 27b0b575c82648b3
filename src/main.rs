// Scrubber - PII detection and redaction for JSON records
// Copyright (c) 2025 Scrubber Contributors
// Licensed under the MIT License

use clap::Parser;
use scrubber::cli::commands::{exit_code_for, EXIT_FATAL};
use scrubber::cli::{Cli, Commands};
use scrubber::config::{load_config_or_default, LoggingConfig};
use scrubber::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Logging comes from the config when it loads; commands report config errors themselves
    let (config_level, logging_config) = match load_config_or_default(&cli.config) {
        Ok(config) => (config.application.log_level, config.logging),
        Err(_) => ("info".to_string(), LoggingConfig::default()),
    };
    let log_level = cli.log_level.as_deref().unwrap_or(&config_level);

    let guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(exit_code_for(&e));
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Scrubber - PII detection and redaction"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Redact(args) => args.execute(&cli.config),
        Commands::Classify(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
