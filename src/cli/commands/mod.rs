//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod classify;
pub mod init;
pub mod redact;
pub mod validate;

use crate::domain::ScrubError;

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for unreadable or badly shaped input
pub const EXIT_INPUT_ERROR: i32 = 3;

/// Exit code for any other failure
pub const EXIT_FATAL: i32 = 5;

/// Map a library error to a process exit code
pub fn exit_code_for(error: &ScrubError) -> i32 {
    match error {
        ScrubError::Configuration(_) | ScrubError::Validation(_) => EXIT_CONFIG_ERROR,
        ScrubError::Input(_) => EXIT_INPUT_ERROR,
        _ => EXIT_FATAL,
    }
}
