//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Scrubber using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Scrubber - PII detection and redaction for JSON records
#[derive(Parser, Debug)]
#[command(name = "scrubber")]
#[command(version, about, long_about = None)]
#[command(author = "Scrubber Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "scrubber.toml", env = "SCRUBBER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SCRUBBER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redact a CSV of JSON records
    Redact(commands::redact::RedactArgs),

    /// Classify a single JSON object
    Classify(commands::classify::ClassifyArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_redact() {
        let cli = Cli::parse_from(["scrubber", "redact", "records.csv"]);
        assert_eq!(cli.config, "scrubber.toml");
        match cli.command {
            Commands::Redact(args) => {
                assert_eq!(args.input, "records.csv");
                assert!(args.output.is_none());
                assert!(!args.report);
                assert!(!args.audit);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_redact_with_options() {
        let cli = Cli::parse_from([
            "scrubber",
            "redact",
            "records.csv",
            "-o",
            "out.csv",
            "--report",
            "--report-file",
            "report.json",
            "--audit",
        ]);
        match cli.command {
            Commands::Redact(args) => {
                assert_eq!(args.output.as_deref(), Some("out.csv"));
                assert!(args.report);
                assert_eq!(args.report_file.as_deref(), Some("report.json"));
                assert!(args.audit);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["scrubber", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["scrubber", "--log-level", "debug", "redact", "in.csv"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_classify() {
        let cli = Cli::parse_from(["scrubber", "classify", r#"{"phone": "9876543210"}"#]);
        match cli.command {
            Commands::Classify(args) => assert_eq!(args.json, r#"{"phone": "9876543210"}"#),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["scrubber", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["scrubber"]).is_err());
    }
}
