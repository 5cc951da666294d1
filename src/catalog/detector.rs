//! Pattern detection — precedence-ordered, first match wins.

use super::definition::catalog;
use super::types::PatternId;

/// Classifies raw unit numbers against the shared catalog.
///
/// Thin by design: callers that only classify should not see generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternDetector;

impl PatternDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw unit number into exactly one pattern id.
    pub fn detect(&self, raw: &str) -> PatternId {
        catalog().classify(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_canonical_shape() {
        let detector = PatternDetector::new();
        assert_eq!(detector.detect("1"), PatternId::Sequential);
        assert_eq!(detector.detect("A-1001"), PatternId::AlphaNumeric);
        assert_eq!(detector.detect("B1U01"), PatternId::BuildingUnit);
        assert_eq!(detector.detect("A101"), PatternId::WingUnit);
        assert_eq!(detector.detect("Suite-101"), PatternId::Suite);
        assert_eq!(detector.detect("Unit-001"), PatternId::Custom);
        assert_eq!(detector.detect(""), PatternId::Numeric);
    }

    #[test]
    fn test_unrecognized_strings_fall_back_to_custom() {
        let detector = PatternDetector::new();
        assert_eq!(detector.detect("XYZ123ABC"), PatternId::Custom);
        assert_eq!(detector.detect("Unit_123"), PatternId::Custom);
        assert_eq!(detector.detect("A-101"), PatternId::Custom);
        assert_eq!(detector.detect("Unit-1001"), PatternId::Custom);
    }

    #[test]
    fn test_all_digit_strings_stay_sequential() {
        // Precedence: digit-only strings of any length are sequential, never
        // wing or alpha (those require a leading letter).
        let detector = PatternDetector::new();
        assert_eq!(detector.detect("101"), PatternId::Sequential);
        assert_eq!(detector.detect("1001"), PatternId::Sequential);
        assert_eq!(detector.detect("42"), PatternId::Sequential);
    }

    #[test]
    fn test_suite_prefix_is_case_insensitive() {
        let detector = PatternDetector::new();
        assert_eq!(detector.detect("suite-205"), PatternId::Suite);
        assert_eq!(detector.detect("SUITE-205"), PatternId::Suite);
    }

    #[test]
    fn test_structured_shapes_win_over_custom() {
        let detector = PatternDetector::new();
        // "A101" could be read as a prefix-less custom string; the ordered
        // check classifies it as wing_unit.
        assert_eq!(detector.detect("A101"), PatternId::WingUnit);
        assert_eq!(detector.detect("B1U01"), PatternId::BuildingUnit);
    }
}
