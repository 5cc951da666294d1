//! Property tests: the engine is total, idempotent, and its suggestions
//! never collide with the units they were generated from.

use proptest::prelude::*;

use numbering_core::{catalog, NumberingEngine, PatternId, UnitRecord};

proptest! {
    /// Classification accepts any string and has no hidden state.
    #[test]
    fn prop_classification_is_total_and_idempotent(raw in ".*") {
        let engine = NumberingEngine::new();
        let first = engine.detect_pattern(&raw);
        let second = engine.detect_pattern(&raw);
        prop_assert_eq!(first, second);
    }

    /// For whatever pattern a string classifies as, floor extraction and
    /// next-value generation never panic on it. The extra strategy branches
    /// force counters around and beyond the u64 range.
    #[test]
    fn prop_floor_and_next_are_total_on_classified_input(
        raw in ".*|[0-9]{15,25}|Unit-[0-9]{15,25}|Suite-[0-9]{15,25}"
    ) {
        let engine = NumberingEngine::new();
        let pattern = engine.detect_pattern(&raw);
        let def = catalog().pattern_info(pattern).expect("closed id set");
        let _ = def.extract_floor(&raw);
        let _ = def.next_value(&[raw.as_str()], None, None);
        let _ = engine.expected_floor(&raw);
    }

    /// Floor validation is a value, never a panic, for any declared floor.
    #[test]
    fn prop_floor_validation_is_total(raw in ".*", declared in -3i32..50) {
        let engine = NumberingEngine::new();
        let result = engine.validate_floor_correlation(&raw, declared);
        prop_assert!(!result.message.is_empty());
    }

    /// A generated sequential number never collides with its inputs.
    #[test]
    fn prop_sequential_next_is_fresh(numbers in proptest::collection::vec("[1-9][0-9]{0,5}", 1..30)) {
        let engine = NumberingEngine::new();
        let units: Vec<UnitRecord> = numbers.iter().map(|n| UnitRecord::new(n.clone())).collect();
        let next = engine.generate_next(&units, PatternId::Sequential, None, None);
        prop_assert!(!numbers.contains(&next.next_number));
    }

    /// A generated wing number never collides with its inputs: the sequence
    /// block of the result is strictly greater than every existing one.
    #[test]
    fn prop_wing_next_is_fresh(numbers in proptest::collection::vec("[A-D][0-9]{3}", 1..30)) {
        let engine = NumberingEngine::new();
        let units: Vec<UnitRecord> = numbers.iter().map(|n| UnitRecord::new(n.clone())).collect();
        let next = engine.generate_next(&units, PatternId::WingUnit, None, None);
        prop_assert!(!numbers.contains(&next.next_number));
    }

    /// Conflict suggestions are themselves conflict-free.
    #[test]
    fn prop_conflict_suggestion_is_usable(numbers in proptest::collection::vec("[1-9][0-9]{0,4}", 1..20)) {
        let engine = NumberingEngine::new();
        let units: Vec<UnitRecord> = numbers.iter().map(|n| UnitRecord::new(n.clone())).collect();
        let result = engine.detect_conflicts(&numbers[0], &units);
        prop_assert!(result.has_conflict);
        let suggestion = result.suggestion.expect("conflict carries a suggestion");
        prop_assert!(!engine.detect_conflicts(&suggestion, &units).has_conflict);
    }

    /// Consistency scanning is order-insensitive in its verdict.
    #[test]
    fn prop_consistency_verdict_ignores_order(
        mut numbers in proptest::collection::vec("[1-9][0-9]{0,3}|Suite-[1-9][0-9]{2}", 2..20)
    ) {
        let engine = NumberingEngine::new();
        let units: Vec<UnitRecord> = numbers.iter().map(|n| UnitRecord::new(n.clone())).collect();
        let forward = engine.validate_consistency(&units);
        numbers.reverse();
        let reversed_units: Vec<UnitRecord> =
            numbers.iter().map(|n| UnitRecord::new(n.clone())).collect();
        let backward = engine.validate_consistency(&reversed_units);
        prop_assert_eq!(forward.is_consistent, backward.is_consistent);
    }
}
