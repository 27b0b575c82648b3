//! Format-preserving masking transforms
//!
//! Each transform keeps a few leading/trailing characters and replaces the rest with
//! `X`. A value that does not have the shape a transform expects becomes
//! [`REDACTED_SENTINEL`]. Lengths are counted in characters.

use super::Anonymizer;
use crate::anonymization::detector::patterns::digits_only;
use crate::anonymization::models::PiiCategory;
use regex::Regex;
use std::sync::LazyLock;

/// Replacement for values that cannot be masked in place
pub const REDACTED_SENTINEL: &str = "[REDACTED_PII]";

static RE_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

/// First `n` characters
fn head(value: &str, n: usize) -> String {
    value.chars().take(n).collect()
}

/// Last `n` characters
fn tail(value: &str, n: usize) -> String {
    let len = value.chars().count();
    value.chars().skip(len.saturating_sub(n)).collect()
}

/// Keep first 2 and last 2 of a 10-character value
pub fn mask_phone(value: &str) -> String {
    if value.chars().count() == 10 {
        format!("{}XXXXXX{}", head(value, 2), tail(value, 2))
    } else {
        REDACTED_SENTINEL.to_string()
    }
}

/// Keep first 2 and last 4 of the twelve digits
pub fn mask_aadhar(value: &str) -> String {
    let digits = digits_only(value);
    if digits.chars().count() == 12 {
        format!("{}XXXXXX{}", head(&digits, 2), tail(&digits, 4))
    } else {
        REDACTED_SENTINEL.to_string()
    }
}

pub fn mask_passport(value: &str) -> String {
    match value.chars().count() {
        8 => format!("{}XXXX{}", head(value, 1), tail(value, 3)),
        9 => format!("{}XXXXX{}", head(value, 2), tail(value, 2)),
        _ => REDACTED_SENTINEL.to_string(),
    }
}

/// Keep the first local character and the provider
pub fn mask_upi(value: &str) -> String {
    match value.split_once('@') {
        Some((local, provider)) => match local.chars().next() {
            Some(first) => format!("{first}XXX@{provider}"),
            None => REDACTED_SENTINEL.to_string(),
        },
        None => REDACTED_SENTINEL.to_string(),
    }
}

/// Initial of every multi-character token, single characters kept
pub fn mask_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(first), Some(_)) => format!("{first}XXX"),
                _ => token.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the first local character and the domain; local part must exceed one character
pub fn mask_email(value: &str) -> String {
    match value.split_once('@') {
        Some((local, domain)) if local.chars().count() > 1 => {
            format!("{}XXX@{domain}", head(local, 1))
        }
        _ => REDACTED_SENTINEL.to_string(),
    }
}

/// Every digit becomes `X`
pub fn mask_address(value: &str) -> String {
    RE_DIGIT.replace_all(value, "X").into_owned()
}

pub fn mask_device_id(value: &str) -> String {
    if value.chars().count() > 4 {
        format!("{}XXX{}", head(value, 2), tail(value, 2))
    } else {
        REDACTED_SENTINEL.to_string()
    }
}

/// Keep the first three groups, hide the last
pub fn mask_ip(value: &str) -> String {
    let groups: Vec<&str> = value.split('.').collect();
    if groups.len() == 4 {
        format!("{}.XXX", groups[..3].join("."))
    } else {
        REDACTED_SENTINEL.to_string()
    }
}

/// Apply the transform for a category
pub fn mask(category: PiiCategory, value: &str) -> String {
    match category {
        PiiCategory::Phone => mask_phone(value),
        PiiCategory::Aadhar => mask_aadhar(value),
        PiiCategory::Passport => mask_passport(value),
        PiiCategory::UpiId => mask_upi(value),
        PiiCategory::Name => mask_name(value),
        PiiCategory::Email => mask_email(value),
        PiiCategory::Address => mask_address(value),
        PiiCategory::DeviceId => mask_device_id(value),
        PiiCategory::IpAddress => mask_ip(value),
    }
}

/// Masking strategy - per-category partial masking
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskingStrategy;

impl MaskingStrategy {
    /// Create a new masking strategy
    pub fn new() -> Self {
        Self
    }
}

impl Anonymizer for MaskingStrategy {
    fn anonymize_field(&self, category: PiiCategory, value: &str) -> String {
        mask(category, value)
    }
}
