//! Floor extraction and declared-floor validation.

use crate::catalog::{catalog, PatternDetector};
use crate::types::ValidationResult;

/// Extracts the floor a unit number implies and compares it against a
/// declared floor. A number without floor semantics can never contradict
/// a declaration.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloorCorrelator {
    detector: PatternDetector,
}

impl FloorCorrelator {
    pub fn new() -> Self {
        Self {
            detector: PatternDetector::new(),
        }
    }

    /// Floor implied by a unit number under its detected pattern, if any.
    /// `None` for floorless patterns and unparseable input.
    pub fn expected_floor(&self, raw: &str) -> Option<i32> {
        let pattern = self.detector.detect(raw);
        catalog().pattern_info(pattern)?.extract_floor(raw)
    }

    /// Validate that a declared floor is consistent with the floor the
    /// number implies. Never an error: the result value carries the verdict.
    pub fn validate(&self, raw: &str, declared_floor: i32) -> ValidationResult {
        match self.expected_floor(raw) {
            None => ValidationResult::valid(format!(
                "Unit number \"{raw}\" carries no floor information"
            )),
            Some(expected) if expected == declared_floor => ValidationResult::valid(format!(
                "Unit number \"{raw}\" is consistent with floor {declared_floor}"
            )),
            Some(expected) => ValidationResult::floor_mismatch(
                format!(
                    "Unit number \"{raw}\" suggests Floor {expected}, not Floor {declared_floor}"
                ),
                expected,
            ),
        }
    }
}
