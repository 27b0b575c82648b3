//! Configuration management for Scrubber.
//!
//! Scrubber reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SCRUBBER_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [output]
//! path = "redacted_output.csv"
//! report = true
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//!
//! [audit]
//! enabled = true
//! log_path = "${SCRUBBER_AUDIT_DIR}/redaction.log"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, AuditConfig, LoggingConfig, OutputConfig, ScrubberConfig};
