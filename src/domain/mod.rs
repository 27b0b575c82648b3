//! Domain models and types for Scrubber.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`Record`], [`RecordId`]) and value coercion ([`coerce_value`])
//! - **Error types** ([`ScrubError`], [`RecordErrorDetail`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible driver operations return [`Result<T, ScrubError>`]:
//!
//! ```rust
//! use scrubber::domain::{Result, ScrubError};
//!
//! fn example(path: &str) -> Result<()> {
//!     if path.is_empty() {
//!         return Err(ScrubError::Input("no input file".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{RecordErrorDetail, ScrubError};
pub use record::{coerce_value, Record, RecordId};
pub use result::Result;
