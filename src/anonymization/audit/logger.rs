//! Audit logger for redaction runs

use crate::anonymization::models::{Detection, RecordOutcome};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    record_id: String,
    is_pii: bool,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    category: String,
    field_name: String,
    source: String,
    /// SHA-256 hash of original value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for redaction runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log a processed record
    ///
    /// Records without any detected category are skipped.
    pub fn log_record(&self, outcome: &RecordOutcome) -> Result<()> {
        if !self.enabled || !outcome.has_detections() {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            record_id: outcome.record_id.to_string(),
            is_pii: outcome.is_pii,
            detections: outcome
                .presence
                .iter()
                .map(|d| self.create_audit_detection(d))
                .collect(),
        };

        self.write_entry(&entry)
    }

    fn create_audit_detection(&self, detection: &Detection) -> AuditDetection {
        AuditDetection {
            category: detection.category.to_string(),
            field_name: detection.field_name.clone(),
            source: format!("{:?}", detection.source),
            value_hash: self.hash_pii_value(&detection.original_value),
        }
    }

    /// Hash a PII value using SHA-256
    fn hash_pii_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let categories: Vec<&str> = entry
                .detections
                .iter()
                .map(|d| d.category.as_str())
                .collect();
            writeln!(
                file,
                "[{}] Record: {} | PII: {} | Categories: {}",
                entry.timestamp,
                entry.record_id,
                entry.is_pii,
                categories.join(",")
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}
