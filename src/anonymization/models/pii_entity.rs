//! PII category and detection data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// PII category enumeration
///
/// A closed set. Each category is either standalone (its presence alone flags a record)
/// or combinatorial (it only counts together with another combinatorial category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Ten-digit mobile number
    Phone,
    /// Twelve-digit national identity number
    Aadhar,
    /// Passport number
    Passport,
    /// Payment handle in `user@provider` form
    UpiId,
    /// Person name
    Name,
    /// Email address
    Email,
    /// Postal address
    Address,
    /// Device identifier
    DeviceId,
    /// IPv4-shaped address
    IpAddress,
}

/// Whether a category flags a record on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Presence alone implies PII
    Standalone,
    /// Needs a second combinatorial category
    Combinatorial,
}

impl PiiCategory {
    /// Every category, in presence-map order
    pub const ALL: [PiiCategory; 9] = [
        Self::Phone,
        Self::Aadhar,
        Self::Passport,
        Self::UpiId,
        Self::Name,
        Self::Email,
        Self::Address,
        Self::DeviceId,
        Self::IpAddress,
    ];

    /// Field name that maps directly to this category
    pub fn key_name(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Aadhar => "aadhar",
            Self::Passport => "passport",
            Self::UpiId => "upi_id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::DeviceId => "device_id",
            Self::IpAddress => "ip_address",
        }
    }

    /// Standalone or combinatorial
    pub fn kind(&self) -> CategoryKind {
        match self {
            Self::Phone | Self::Aadhar | Self::Passport | Self::UpiId => CategoryKind::Standalone,
            Self::Name | Self::Email | Self::Address | Self::DeviceId | Self::IpAddress => {
                CategoryKind::Combinatorial
            }
        }
    }

    /// Check if this category flags a record on its own
    pub fn is_standalone(&self) -> bool {
        self.kind() == CategoryKind::Standalone
    }

    /// Position in [`PiiCategory::ALL`]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

/// How a field was attributed to its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    /// A rule in the ordered key/value decision list
    Rule,
    /// The value-only rescan after no rule matched
    ValueScan,
}

/// A field attributed to a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Category of PII
    pub category: PiiCategory,
    /// Field name as it appears in the record
    pub field_name: String,
    /// Coerced field value (never logged in plaintext)
    pub original_value: String,
    /// Detection path
    pub source: DetectionSource,
}

impl Detection {
    /// Create a new detection
    pub fn new(
        category: PiiCategory,
        field_name: impl Into<String>,
        original_value: impl Into<String>,
        source: DetectionSource,
    ) -> Self {
        Self {
            category,
            field_name: field_name.into(),
            original_value: original_value.into(),
            source,
        }
    }
}
