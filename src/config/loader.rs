//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ScrubberConfig;
use crate::domain::errors::ScrubError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RE_ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ScrubberConfig
/// 4. Applies environment variable overrides (SCRUBBER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, TOML parsing fails, a
/// referenced environment variable is unset, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<ScrubberConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScrubError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ScrubError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ScrubberConfig = toml::from_str(&contents)
        .map_err(|e| ScrubError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration from a TOML file, falling back to built-in defaults when the
/// file does not exist
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ScrubberConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    let mut config = ScrubberConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut ScrubberConfig) -> Result<()> {
    apply_env_overrides(config)?;
    config.validate().map_err(|e| {
        ScrubError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in RE_ENV_VAR.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ScrubError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .map_err(|_| ScrubError::Configuration(format!("Invalid {name} value: {value}")))
}

/// Applies environment variable overrides using SCRUBBER_* prefix
///
/// Environment variables follow the pattern: SCRUBBER_<SECTION>_<KEY>
fn apply_env_overrides(config: &mut ScrubberConfig) -> Result<()> {
    if let Ok(val) = std::env::var("SCRUBBER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("SCRUBBER_OUTPUT_PATH") {
        config.output.path = val;
    }
    if let Ok(val) = std::env::var("SCRUBBER_OUTPUT_REPORT") {
        config.output.report = parse_bool("SCRUBBER_OUTPUT_REPORT", &val)?;
    }
    if let Ok(val) = std::env::var("SCRUBBER_OUTPUT_REPORT_PATH") {
        config.output.report_path = Some(val);
    }

    if let Ok(val) = std::env::var("SCRUBBER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("SCRUBBER_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("SCRUBBER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SCRUBBER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    if let Ok(val) = std::env::var("SCRUBBER_AUDIT_ENABLED") {
        config.audit.enabled = parse_bool("SCRUBBER_AUDIT_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("SCRUBBER_AUDIT_LOG_PATH") {
        config.audit.log_path = val;
    }
    if let Ok(val) = std::env::var("SCRUBBER_AUDIT_JSON_FORMAT") {
        config.audit.json_format = parse_bool("SCRUBBER_AUDIT_JSON_FORMAT", &val)?;
    }

    Ok(())
}
