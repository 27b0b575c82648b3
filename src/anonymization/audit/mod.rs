//! Audit logging module
//!
//! Records which categories each record contained, with original values hashed.

pub mod logger;

pub use logger::AuditLogger;
