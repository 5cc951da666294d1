//! Whole-collection pattern consistency scan.

use smallvec::SmallVec;

use crate::catalog::{PatternDetector, PatternId};
use crate::types::{ConsistencyResult, UnitRecord};

/// Scans a unit collection and reports whether all numbers share one
/// pattern. Mixed conventions are a warning for the caller to surface, not
/// an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsistencyValidator {
    detector: PatternDetector,
}

impl ConsistencyValidator {
    pub fn new() -> Self {
        Self {
            detector: PatternDetector::new(),
        }
    }

    pub fn validate(&self, units: &[UnitRecord]) -> ConsistencyResult {
        if units.is_empty() {
            return ConsistencyResult {
                is_consistent: true,
                detected_patterns: Vec::new(),
                recommendation: "No units to validate".to_string(),
            };
        }

        // At most 7 distinct ids exist; first-seen order is kept.
        let mut seen: SmallVec<[PatternId; 7]> = SmallVec::new();
        for unit in units {
            let pattern = self.detector.detect(&unit.unit_number);
            if !seen.contains(&pattern) {
                seen.push(pattern);
            }
        }

        if seen.len() == 1 {
            ConsistencyResult {
                is_consistent: true,
                recommendation: format!("All units follow the {} pattern", seen[0]),
                detected_patterns: seen.into_vec(),
            }
        } else {
            let observed = seen
                .iter()
                .map(|pattern| pattern.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            ConsistencyResult {
                is_consistent: false,
                recommendation: format!(
                    "Mixed patterns detected: {observed}. Standardize on a single numbering convention before adding more units."
                ),
                detected_patterns: seen.into_vec(),
            }
        }
    }
}
