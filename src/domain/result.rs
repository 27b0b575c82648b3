//! Result type alias for Scrubber

use super::errors::ScrubError;

/// Result type alias for Scrubber operations
///
/// # Examples
///
/// ```
/// use scrubber::domain::result::Result;
/// use scrubber::domain::errors::ScrubError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ScrubError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ScrubError>;
