//! Classify command implementation
//!
//! Runs a single JSON object through the engine and prints the redacted
//! object, the detected categories and the verdict.

use super::{EXIT_INPUT_ERROR, EXIT_SUCCESS};
use crate::anonymization::AnonymizationEngine;
use crate::core::redact::{render_redacted, render_verdict};
use crate::domain::Record;
use clap::Args;

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON object to classify, e.g. '{"phone": "9876543210"}'
    pub json: String,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let Some(record) = Record::from_json("cli", &self.json) else {
            tracing::warn!("Classify input is not a JSON object");
            eprintln!("Input is not a JSON object");
            return Ok(EXIT_INPUT_ERROR);
        };

        let outcome = AnonymizationEngine::new().process_record(&record);

        println!("{}", render_redacted(&outcome.redacted)?);

        let categories: Vec<String> = outcome
            .presence
            .categories()
            .map(|c| c.to_string())
            .collect();
        if categories.is_empty() {
            println!("categories: none");
        } else {
            println!("categories: {}", categories.join(", "));
        }
        println!("is_pii: {}", render_verdict(outcome.is_pii));

        Ok(EXIT_SUCCESS)
    }
}
