//! Core business logic
//!
//! This module contains the redaction workflow that ties CSV input, the
//! anonymization engine and output writing together.

pub mod redact;
