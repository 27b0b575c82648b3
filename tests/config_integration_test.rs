//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interference between tests.

use scrubber::config::{load_config, load_config_or_default};
use std::io::Write;
use std::sync::Mutex;
use tempfile::{NamedTempFile, TempDir};

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("SCRUBBER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("SCRUBBER_OUTPUT_PATH");
    std::env::remove_var("SCRUBBER_OUTPUT_REPORT");
    std::env::remove_var("SCRUBBER_AUDIT_ENABLED");
    std::env::remove_var("TEST_SCRUBBER_AUDIT_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[output]
path = "out/redacted.csv"
report = true
report_path = "out/report.json"

[logging]
local_enabled = true
local_path = "/tmp/scrubber-logs"
local_rotation = "hourly"

[audit]
enabled = true
log_path = "/tmp/scrubber-audit/redaction.log"
json_format = false
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.output.path, "out/redacted.csv");
    assert!(config.output.report);
    assert_eq!(config.output.report_path.as_deref(), Some("out/report.json"));
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
    assert!(config.audit.enabled);
    assert!(!config.audit.json_format);
}

#[test]
fn test_load_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.output.path, "redacted_output_candidate_full_name.csv");
    assert!(!config.output.report);
    assert!(!config.logging.local_enabled);
    assert!(!config.audit.enabled);
    assert!(config.audit.json_format);
}

#[test]
fn test_missing_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scrubber.toml");

    assert!(load_config(&path).is_err());

    let config = load_config_or_default(&path).unwrap();
    assert_eq!(config.output.path, "redacted_output_candidate_full_name.csv");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_SCRUBBER_AUDIT_DIR", "/var/audit");

    let file = write_config(
        r#"
[audit]
enabled = true
# log_path = "${TEST_SCRUBBER_UNSET_IN_COMMENT}"
log_path = "${TEST_SCRUBBER_AUDIT_DIR}/redaction.log"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.audit.log_path, "/var/audit/redaction.log");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[output]
path = "${TEST_SCRUBBER_NEVER_SET}/out.csv"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_SCRUBBER_NEVER_SET"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SCRUBBER_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("SCRUBBER_OUTPUT_PATH", "env.csv");
    std::env::set_var("SCRUBBER_OUTPUT_REPORT", "true");
    std::env::set_var("SCRUBBER_AUDIT_ENABLED", "true");

    let file = write_config(
        r#"
[application]
log_level = "debug"

[output]
path = "file.csv"
"#,
    );

    let config = load_config(file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.output.path, "env.csv");
    assert!(config.output.report);
    assert!(config.audit.enabled);
}

#[test]
fn test_invalid_env_override_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SCRUBBER_OUTPUT_REPORT", "maybe");

    let dir = TempDir::new().unwrap();
    let result = load_config_or_default(dir.path().join("scrubber.toml"));
    cleanup_env_vars();

    assert!(result.is_err());
}

#[test]
fn test_validation_errors() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        "[application]\nlog_level = \"verbose\"\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
        "[output]\npath = \"same.csv\"\nreport_path = \"same.csv\"\n",
        "[output]\npath = \"  \"\n",
    ];

    for contents in cases {
        let file = write_config(contents);
        assert!(
            load_config(file.path()).is_err(),
            "expected validation failure for:\n{contents}"
        );
    }
}

#[test]
fn test_malformed_toml_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[output\npath = ");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TOML"));
}
