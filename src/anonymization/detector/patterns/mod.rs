//! Pattern library for PII detection
//!
//! Fixed format detectors, compiled once per process. Every regex is anchored so a
//! predicate only fires when the whole trimmed value has the expected shape.

use crate::anonymization::models::PiiCategory;
use regex::Regex;
use std::sync::LazyLock;

static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\b[6-9]\d{9}\b$").unwrap());
static RE_AADHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\b\d{4}\s?\d{4}\s?\d{4}\b$").unwrap());
// Letters A-P, R-W and Y; Q, X and Z never start a passport number.
static RE_PASSPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\b(?:[A-PR-WYa-pr-wy][0-9]{7}|[A-PR-WYa-pr-wy]{2}[0-9]{7})\b$").unwrap()
});
static RE_UPI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\b[\w.\-]{2,}@[a-zA-Z]{2,}\b$").unwrap());
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\b[\w.\-]+@[\w.\-]+\.\w+\b$").unwrap());
static RE_IP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").unwrap());
static RE_PIN_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{6}").unwrap());
static RE_NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());

/// Value with every non-digit character removed
pub fn digits_only(value: &str) -> String {
    RE_NON_DIGIT.replace_all(value, "").into_owned()
}

/// Ten digits, leading digit 6-9
pub fn is_phone(value: &str) -> bool {
    RE_PHONE.is_match(value.trim())
}

/// `dddd[ ]dddd[ ]dddd`, or any value holding exactly twelve digits
pub fn is_aadhar(value: &str) -> bool {
    RE_AADHAR.is_match(value.trim()) || digits_only(value).chars().count() == 12
}

/// One or two letters followed by seven digits
pub fn is_passport(value: &str) -> bool {
    RE_PASSPORT.is_match(value.trim())
}

/// `local@provider` with an alphabetic provider
pub fn is_upi(value: &str) -> bool {
    RE_UPI.is_match(value.trim())
}

/// `local@domain.tld`
pub fn is_email(value: &str) -> bool {
    RE_EMAIL.is_match(value.trim())
}

/// Four dot-separated groups of 1-3 digits; octets are not range checked
pub fn is_ip(value: &str) -> bool {
    RE_IP.is_match(value.trim())
}

/// Contains a comma and a six-digit run (postal code)
pub fn is_address(value: &str) -> bool {
    value.contains(',') && RE_PIN_CODE.is_match(value)
}

/// Value-format predicate for a category
///
/// `name` and `device_id` have no value format and return `None`.
pub fn value_matcher(category: PiiCategory) -> Option<fn(&str) -> bool> {
    match category {
        PiiCategory::Phone => Some(is_phone),
        PiiCategory::Aadhar => Some(is_aadhar),
        PiiCategory::Passport => Some(is_passport),
        PiiCategory::UpiId => Some(is_upi),
        PiiCategory::Email => Some(is_email),
        PiiCategory::Address => Some(is_address),
        PiiCategory::IpAddress => Some(is_ip),
        PiiCategory::Name | PiiCategory::DeviceId => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern() {
        assert!(is_phone("9876543210"));
        assert!(is_phone("  6000000000 "));
        assert!(!is_phone("5876543210"));
        assert!(!is_phone("98765432101"));
        assert!(!is_phone("call 9876543210"));
    }

    #[test]
    fn test_aadhar_pattern() {
        assert!(is_aadhar("1234 5678 9012"));
        assert!(is_aadhar("123456789012"));
        assert!(is_aadhar("1234 56789012"));
        // Digits-only fallback ignores separators entirely
        assert!(is_aadhar("1234-5678-9012"));
        assert!(!is_aadhar("1234 5678 901"));
        assert!(!is_aadhar("12345 678 9012 3"));
    }

    #[test]
    fn test_passport_pattern() {
        assert!(is_passport("A1234567"));
        assert!(is_passport("ab1234567"));
        assert!(!is_passport("X1234567"));
        assert!(!is_passport("Q1234567"));
        assert!(!is_passport("Z1234567"));
        assert!(!is_passport("ABC1234567"));
        assert!(!is_passport("A123456"));
    }

    #[test]
    fn test_upi_pattern() {
        assert!(is_upi("ravi.kumar@okaxis"));
        assert!(is_upi("ab@ybl"));
        assert!(!is_upi("a@ybl"));
        assert!(!is_upi("ravi@ok.axis"));
        assert!(!is_upi(".ravi@ybl"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_email("jane.doe@example.com"));
        assert!(is_email("a@b.co"));
        assert!(!is_email("jane@example"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("mail me at jane@example.com"));
    }

    #[test]
    fn test_ip_pattern() {
        assert!(is_ip("10.20.30.40"));
        assert!(is_ip("999.999.999.999"));
        assert!(!is_ip("10.20.30"));
        assert!(!is_ip("10.20.30.40.50"));
        assert!(!is_ip("10.20.30.4000"));
    }

    #[test]
    fn test_address_heuristic() {
        assert!(is_address("221B Baker Street, Springfield, 560001"));
        assert!(is_address("Flat 2, MG Road, 5600012"));
        assert!(!is_address("221B Baker Street Springfield 560001"));
        assert!(!is_address("Baker Street, 56001"));
    }

    #[test]
    fn test_value_matcher_covers_format_categories() {
        assert!(value_matcher(PiiCategory::Name).is_none());
        assert!(value_matcher(PiiCategory::DeviceId).is_none());
        let ip = value_matcher(PiiCategory::IpAddress).unwrap();
        assert!(ip("192.168.0.1"));
    }
}
