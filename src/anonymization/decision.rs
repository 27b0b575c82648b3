//! Record-level PII decision
//!
//! A record is PII when any standalone category is present, or when at least
//! [`COMBINATION_THRESHOLD`] distinct combinatorial categories are present. Only the
//! presence map is consulted.

use crate::anonymization::models::{CategoryKind, PresenceMap};

/// Distinct combinatorial categories needed to flag a record
pub const COMBINATION_THRESHOLD: usize = 2;

/// Decide whether a record contains PII
pub fn is_pii(presence: &PresenceMap) -> bool {
    let mut combinatorial = 0;
    for category in presence.categories() {
        match category.kind() {
            CategoryKind::Standalone => return true,
            CategoryKind::Combinatorial => combinatorial += 1,
        }
    }
    combinatorial >= COMBINATION_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::models::{Detection, DetectionSource, PiiCategory};

    fn presence_of(categories: &[PiiCategory]) -> PresenceMap {
        let mut presence = PresenceMap::new();
        for category in categories {
            presence.record(Detection::new(
                *category,
                category.key_name(),
                "value",
                DetectionSource::Rule,
            ));
        }
        presence
    }

    #[test]
    fn test_empty_presence_is_not_pii() {
        assert!(!is_pii(&PresenceMap::new()));
    }

    #[test]
    fn test_any_standalone_is_pii() {
        for category in PiiCategory::ALL.iter().filter(|c| c.is_standalone()) {
            assert!(is_pii(&presence_of(&[*category])), "{category}");
        }
    }

    #[test]
    fn test_single_combinatorial_is_not_pii() {
        for category in PiiCategory::ALL.iter().filter(|c| !c.is_standalone()) {
            assert!(!is_pii(&presence_of(&[*category])), "{category}");
        }
    }

    #[test]
    fn test_every_combinatorial_pair_is_pii() {
        let combinatorial: Vec<_> = PiiCategory::ALL
            .iter()
            .copied()
            .filter(|c| !c.is_standalone())
            .collect();
        for (i, a) in combinatorial.iter().enumerate() {
            for b in &combinatorial[i + 1..] {
                assert!(is_pii(&presence_of(&[*a, *b])), "{a} + {b}");
            }
        }
    }
}
