//! Next-number generation against an existing-units snapshot.

use crate::catalog::{catalog, PatternId};
use crate::types::{GeneratedNumber, UnitRecord};

/// Produces the next unit number for a pattern, given the existing units.
///
/// Purely a function of its arguments; the caller supplies a consistent
/// snapshot of existing units and owns the race between generating a number
/// and persisting it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberGenerator;

impl NumberGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Next number for `pattern`. With no existing units (or none conforming
    /// to the pattern), this is the pattern's canonical first value. A
    /// `floor` narrows the scan to that floor for floor-carrying patterns;
    /// `prefix` selects the counter for custom numbers.
    pub fn generate_next(
        &self,
        existing: &[UnitRecord],
        pattern: PatternId,
        floor: Option<i32>,
        prefix: Option<&str>,
    ) -> GeneratedNumber {
        let def = catalog().definition(pattern);
        if existing.is_empty() {
            return GeneratedNumber {
                next_number: def.default_first(floor, prefix),
            };
        }
        let conforming: Vec<&str> = existing
            .iter()
            .map(|unit| unit.unit_number.as_str())
            .filter(|number| def.recognize(number))
            .collect();
        let next_number = if conforming.is_empty() {
            def.default_first(floor, prefix)
        } else {
            def.next_value(&conforming, floor, prefix)
        };
        GeneratedNumber { next_number }
    }

    /// Next number on a specific floor. The first unit on a brand-new floor
    /// synthesizes the pattern's first value with the floor forced.
    pub fn suggest_for_floor(
        &self,
        floor: i32,
        existing: &[UnitRecord],
        pattern: PatternId,
    ) -> GeneratedNumber {
        self.generate_next(existing, pattern, Some(floor), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(numbers: &[&str]) -> Vec<UnitRecord> {
        numbers.iter().map(|number| UnitRecord::new(*number)).collect()
    }

    #[test]
    fn test_empty_input_yields_default_first() {
        let generator = NumberGenerator::new();
        for (pattern, first) in [
            (PatternId::Suite, "Suite-101"),
            (PatternId::BuildingUnit, "B1U01"),
            (PatternId::AlphaNumeric, "A-1001"),
            (PatternId::WingUnit, "A101"),
            (PatternId::Sequential, "1"),
        ] {
            let next = generator.generate_next(&[], pattern, None, None);
            assert_eq!(next.next_number, first, "pattern {pattern}");
        }
    }

    #[test]
    fn test_sequential_increments_past_the_maximum() {
        let generator = NumberGenerator::new();
        let existing = units(&["1", "2"]);
        let next = generator.generate_next(&existing, PatternId::Sequential, None, None);
        assert_eq!(next.next_number, "3");
    }

    #[test]
    fn test_nonconforming_numbers_are_ignored() {
        let generator = NumberGenerator::new();
        // Only the wing units count toward the wing sequence.
        let existing = units(&["A101", "Suite-205", "garbage"]);
        let next = generator.generate_next(&existing, PatternId::WingUnit, None, None);
        assert_eq!(next.next_number, "A102");
    }

    #[test]
    fn test_no_conforming_units_behaves_as_empty() {
        let generator = NumberGenerator::new();
        let existing = units(&["1", "2", "3"]);
        let next = generator.generate_next(&existing, PatternId::Suite, None, None);
        assert_eq!(next.next_number, "Suite-101");
    }

    #[test]
    fn test_custom_prefix_reaches_the_pattern() {
        let generator = NumberGenerator::new();
        let next = generator.generate_next(&[], PatternId::Custom, None, Some("Shop"));
        assert_eq!(next.next_number, "Shop-001");

        let existing = units(&["Shop-001", "Unit-009"]);
        let next = generator.generate_next(&existing, PatternId::Custom, None, Some("Shop"));
        assert_eq!(next.next_number, "Shop-002");
    }

    #[test]
    fn test_suggest_for_floor_scopes_the_scan() {
        let generator = NumberGenerator::new();
        let existing = units(&["A101", "A102", "A201"]);
        let next = generator.suggest_for_floor(2, &existing, PatternId::WingUnit);
        assert_eq!(next.next_number, "A202");
    }

    #[test]
    fn test_first_unit_on_a_new_floor() {
        let generator = NumberGenerator::new();
        let existing = units(&["A101", "A102"]);
        let next = generator.suggest_for_floor(3, &existing, PatternId::WingUnit);
        assert_eq!(next.next_number, "A301");

        // Brand-new floor with no prior units anywhere.
        let next = generator.suggest_for_floor(9, &[], PatternId::BuildingUnit);
        assert_eq!(next.next_number, "B9U01");
    }
}
