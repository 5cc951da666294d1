//! Engine facade composing the numbering components.

use crate::catalog::{catalog, PatternDefinition, PatternDetector, PatternId};
use crate::conflicts::ConflictDetector;
use crate::consistency::ConsistencyValidator;
use crate::floors::FloorCorrelator;
use crate::generator::NumberGenerator;
use crate::types::{
    ConflictResult, ConsistencyResult, GeneratedNumber, UnitRecord, ValidationResult,
};
use crate::validation::UpdateValidator;

/// The full operation surface of the numbering engine.
///
/// Stateless: every operation is a pure function of its arguments, so a
/// single instance can serve any number of concurrent callers. The service
/// layer typically calls `generate_next`/`suggest_for_floor` to pre-fill
/// numbers, `validate_consistency` to warn about mixed conventions, and
/// `validate_update` as the gate before persisting a create or update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberingEngine {
    detector: PatternDetector,
    floors: FloorCorrelator,
    generator: NumberGenerator,
    conflicts: ConflictDetector,
    consistency: ConsistencyValidator,
    updates: UpdateValidator,
}

impl NumberingEngine {
    pub fn new() -> Self {
        Self {
            detector: PatternDetector::new(),
            floors: FloorCorrelator::new(),
            generator: NumberGenerator::new(),
            conflicts: ConflictDetector::new(),
            consistency: ConsistencyValidator::new(),
            updates: UpdateValidator::new(),
        }
    }

    /// Classify a raw unit number into exactly one pattern id.
    pub fn detect_pattern(&self, raw: &str) -> PatternId {
        let pattern = self.detector.detect(raw);
        tracing::debug!(unit_number = %raw, pattern = %pattern, "classified unit number");
        pattern
    }

    /// Floor implied by a unit number, if its pattern carries one.
    pub fn expected_floor(&self, raw: &str) -> Option<i32> {
        self.floors.expected_floor(raw)
    }

    /// Check a declared floor against the floor the number implies.
    pub fn validate_floor_correlation(&self, raw: &str, declared_floor: i32) -> ValidationResult {
        let result = self.floors.validate(raw, declared_floor);
        if !result.is_valid {
            tracing::debug!(unit_number = %raw, declared_floor, "floor correlation failed");
        }
        result
    }

    /// Next number for `pattern` given the existing units.
    pub fn generate_next(
        &self,
        existing: &[UnitRecord],
        pattern: PatternId,
        floor: Option<i32>,
        prefix: Option<&str>,
    ) -> GeneratedNumber {
        let generated = self.generator.generate_next(existing, pattern, floor, prefix);
        tracing::debug!(pattern = %pattern, next = %generated.next_number, "generated next unit number");
        generated
    }

    /// Next number on a specific floor.
    pub fn suggest_for_floor(
        &self,
        floor: i32,
        existing: &[UnitRecord],
        pattern: PatternId,
    ) -> GeneratedNumber {
        self.generator.suggest_for_floor(floor, existing, pattern)
    }

    /// Exact-collision check with an alternative suggestion on conflict.
    pub fn detect_conflicts(&self, candidate: &str, existing: &[UnitRecord]) -> ConflictResult {
        self.conflicts.detect(candidate, existing)
    }

    /// Whole-collection convention scan.
    pub fn validate_consistency(&self, units: &[UnitRecord]) -> ConsistencyResult {
        let result = self.consistency.validate(units);
        if !result.is_consistent {
            tracing::debug!(
                patterns = ?result.detected_patterns,
                "unit collection mixes numbering patterns"
            );
        }
        result
    }

    /// The pre-write gate: conflicts first, then floor correlation.
    pub fn validate_update(
        &self,
        candidate: &str,
        floor: Option<i32>,
        existing: &[UnitRecord],
        exclude_unit_id: Option<&str>,
    ) -> ValidationResult {
        self.updates
            .validate(candidate, floor, existing, exclude_unit_id)
    }

    /// Catalog lookup by pattern id.
    pub fn pattern_info(&self, id: PatternId) -> Option<&'static PatternDefinition> {
        catalog().pattern_info(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_wires_all_components() {
        let engine = NumberingEngine::new();
        assert_eq!(engine.detect_pattern("Suite-101"), PatternId::Suite);
        assert_eq!(engine.expected_floor("Suite-205"), Some(2));
        assert!(engine.validate_floor_correlation("Suite-205", 2).is_valid);

        let existing = vec![UnitRecord::new("1"), UnitRecord::new("2")];
        let next = engine.generate_next(&existing, PatternId::Sequential, None, None);
        assert_eq!(next.next_number, "3");

        assert!(engine.detect_conflicts("2", &existing).has_conflict);
        assert!(engine.validate_consistency(&existing).is_consistent);
        assert!(engine.validate_update("4", None, &existing, None).is_valid);
        assert!(engine.pattern_info(PatternId::Custom).is_some());
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let engine = NumberingEngine::new();
        let existing = vec![UnitRecord::new("A101"), UnitRecord::new("A102")];
        let first = engine.generate_next(&existing, PatternId::WingUnit, None, None);
        let second = engine.generate_next(&existing, PatternId::WingUnit, None, None);
        assert_eq!(first, second);
    }
}
