//! Logging and observability
//!
//! Structured logging through `tracing`, with console output and optional JSON file
//! output. Field values are never logged; only record ids, field names and categories.
//!
//! # Example
//!
//! ```no_run
//! use scrubber::logging::init_logging;
//! use scrubber::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a redaction run
///
/// # Example
///
/// ```no_run
/// use scrubber::log_run_start;
///
/// log_run_start!("input.csv", "output.csv");
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($input:expr, $output:expr) => {
        tracing::info!(
            input = %$input,
            output = %$output,
            "Starting redaction run"
        );
    };
}

/// Log the completion of a redaction run
///
/// # Example
///
/// ```no_run
/// use scrubber::log_run_complete;
/// use std::time::Duration;
///
/// log_run_complete!(120, 37, Duration::from_millis(85));
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($records:expr, $pii_records:expr, $duration:expr) => {
        tracing::info!(
            records = $records,
            pii_records = $pii_records,
            duration_ms = $duration.as_millis(),
            "Redaction run completed"
        );
    };
}

/// Log a row that was passed through without classification
///
/// # Example
///
/// ```no_run
/// use scrubber::log_record_bypassed;
///
/// log_record_bypassed!("rec-12", "data_json is not a JSON object");
/// ```
#[macro_export]
macro_rules! log_record_bypassed {
    ($record_id:expr, $reason:expr) => {
        tracing::warn!(
            record_id = %$record_id,
            reason = $reason,
            "Record passed through unredacted"
        );
    };
}
