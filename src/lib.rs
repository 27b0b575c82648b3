// Scrubber - PII detection and redaction for JSON records
// Copyright (c) 2025 Scrubber Contributors
// Licensed under the MIT License

//! # Scrubber - PII detection and redaction
//!
//! Scrubber classifies the fields of flat JSON records into personal-data categories,
//! masks every detected value with a format-preserving transform, and decides whether
//! each record as a whole contains PII.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** phone numbers, Aadhaar numbers, passport numbers, UPI ids, names,
//!   emails, addresses, device ids and IP addresses from field names and values
//! - **Masking** each detected value while keeping its shape recognizable
//! - **Deciding** per record: any standalone identifier, or two or more combinatorial
//!   identifiers together, make a record PII
//! - **Driving** a CSV of `record_id,data_json` rows through the pipeline
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - CSV redaction workflow
//! - [`anonymization`] - Detection, masking, decision, report and audit
//! - [`domain`] - Records, errors and the result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use scrubber::anonymization::AnonymizationEngine;
//! use scrubber::domain::Record;
//!
//! let engine = AnonymizationEngine::new();
//! let record = Record::from_json("1", r#"{"name": "Jane Doe", "email": "jane@example.com"}"#)
//!     .expect("object payload");
//!
//! let outcome = engine.process_record(&record);
//! assert!(outcome.is_pii);
//! assert_eq!(outcome.redacted["name"], "JXXX DXXX");
//! ```
//!
//! ## Redacting a CSV
//!
//! ```rust,no_run
//! use scrubber::anonymization::AnonymizationEngine;
//! use scrubber::core::redact::RedactionCoordinator;
//! use std::path::Path;
//!
//! # fn example() -> scrubber::domain::Result<()> {
//! let coordinator = RedactionCoordinator::new(AnonymizationEngine::new());
//! let summary = coordinator.run(Path::new("records.csv"), Path::new("redacted.csv"))?;
//!
//! println!("{} of {} records contain PII", summary.pii_records(), summary.rows_read);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Only the driver side can fail. Errors are reported as [`domain::ScrubError`]; the
//! classification and masking core always returns a value.
//!
//! ## Logging
//!
//! Scrubber uses structured logging with the `tracing` crate. Log events carry record
//! ids, field names and categories, never field values.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
