//! Collision detection with alternative-number suggestions.

use rustc_hash::FxHashSet;

use crate::catalog::PatternDetector;
use crate::generator::NumberGenerator;
use crate::types::{ConflictResult, UnitRecord};

/// Checks a candidate number against existing units. A conflict is an exact
/// string collision; the suggestion is the next free number under the
/// candidate's detected pattern.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConflictDetector {
    detector: PatternDetector,
    generator: NumberGenerator,
}

impl ConflictDetector {
    pub fn new() -> Self {
        Self {
            detector: PatternDetector::new(),
            generator: NumberGenerator::new(),
        }
    }

    pub fn detect(&self, candidate: &str, existing: &[UnitRecord]) -> ConflictResult {
        self.detect_excluding(candidate, existing, None)
    }

    /// Same as `detect`, ignoring the record whose id matches
    /// `exclude_unit_id` — a unit being updated never conflicts with itself.
    pub fn detect_excluding(
        &self,
        candidate: &str,
        existing: &[UnitRecord],
        exclude_unit_id: Option<&str>,
    ) -> ConflictResult {
        let excluded = |unit: &UnitRecord| -> bool {
            matches!((&unit.id, exclude_unit_id), (Some(id), Some(excluded)) if id.as_str() == excluded)
        };
        let taken: FxHashSet<&str> = existing
            .iter()
            .filter(|unit| !excluded(unit))
            .map(|unit| unit.unit_number.as_str())
            .collect();
        if !taken.contains(candidate) {
            return ConflictResult::none();
        }

        let pattern = self.detector.detect(candidate);
        let suggestion = if exclude_unit_id.is_some() {
            let scoped: Vec<UnitRecord> = existing
                .iter()
                .filter(|unit| !excluded(unit))
                .cloned()
                .collect();
            self.generator.generate_next(&scoped, pattern, None, None)
        } else {
            self.generator.generate_next(existing, pattern, None, None)
        };
        ConflictResult {
            has_conflict: true,
            conflicting_unit: Some(candidate.to_string()),
            suggestion: Some(suggestion.next_number),
        }
    }
}
