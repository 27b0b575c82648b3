//! Ordered field classification rules
//!
//! A field is matched against [`DECISION_LIST`] top to bottom; the first rule that applies
//! decides its category. Fields no rule claims get a value-only rescan over
//! [`VALUE_SCAN_ORDER`].
//!
//! Known ambiguity: the UPI pattern accepts any `local@letters` value, so a bare
//! `user@domain` value without a dot in the domain is classified as `upi_id` before the
//! email check is ever reached. The order is kept as is.

use super::patterns::value_matcher;
use super::{Classification, PiiDetector};
use crate::anonymization::models::{DetectionSource, PiiCategory};

/// How the field key and value combine for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Key equals the category name, or the value has the category format
    KeyOrValue,
    /// Key equals the category name; the value is not inspected
    KeyOnly,
    /// Key equals the category name and the value has the category format
    KeyAndValue,
}

/// One entry of the decision list
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Category assigned when the rule applies
    pub category: PiiCategory,
    /// Key/value combination
    pub gate: Gate,
}

impl Rule {
    const fn new(category: PiiCategory, gate: Gate) -> Self {
        Self { category, gate }
    }

    /// Whether the rule applies to a lower-cased key and its raw value
    pub fn applies(&self, key: &str, value: &str) -> bool {
        let key_hit = key == self.category.key_name();
        let value_hit = || value_matches(self.category, value);
        match self.gate {
            Gate::KeyOrValue => key_hit || value_hit(),
            Gate::KeyOnly => key_hit,
            Gate::KeyAndValue => key_hit && value_hit(),
        }
    }
}

/// Rule precedence, highest first
pub const DECISION_LIST: [Rule; 9] = [
    Rule::new(PiiCategory::Phone, Gate::KeyOrValue),
    Rule::new(PiiCategory::Aadhar, Gate::KeyOrValue),
    Rule::new(PiiCategory::Passport, Gate::KeyOrValue),
    Rule::new(PiiCategory::UpiId, Gate::KeyOrValue),
    Rule::new(PiiCategory::Name, Gate::KeyOnly),
    Rule::new(PiiCategory::Email, Gate::KeyAndValue),
    Rule::new(PiiCategory::Address, Gate::KeyAndValue),
    Rule::new(PiiCategory::DeviceId, Gate::KeyOnly),
    Rule::new(PiiCategory::IpAddress, Gate::KeyAndValue),
];

/// Categories tried, in order, by the value-only rescan
pub const VALUE_SCAN_ORDER: [PiiCategory; 5] = [
    PiiCategory::Phone,
    PiiCategory::Aadhar,
    PiiCategory::Passport,
    PiiCategory::UpiId,
    PiiCategory::Email,
];

fn value_matches(category: PiiCategory, value: &str) -> bool {
    value_matcher(category).is_some_and(|matches| matches(value))
}

/// Detector driven by the fixed decision list
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleDetector;

impl RuleDetector {
    /// Create a new rule detector
    pub fn new() -> Self {
        Self
    }
}

impl PiiDetector for RuleDetector {
    fn classify_field(&self, field_name: &str, value: &str) -> Option<Classification> {
        let key = field_name.to_lowercase();

        if let Some(rule) = DECISION_LIST.iter().find(|rule| rule.applies(&key, value)) {
            return Some(Classification {
                category: rule.category,
                source: DetectionSource::Rule,
            });
        }

        VALUE_SCAN_ORDER
            .iter()
            .copied()
            .find(|category| value_matches(*category, value))
            .map(|category| Classification {
                category,
                source: DetectionSource::ValueScan,
            })
    }
}
