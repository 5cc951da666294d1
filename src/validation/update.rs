//! Conflict-then-floor validation for proposed unit writes.

use crate::conflicts::ConflictDetector;
use crate::floors::FloorCorrelator;
use crate::types::{UnitRecord, ValidationResult};

/// Approves or rejects a proposed unit number before persistence. Conflicts
/// are checked first (an update never conflicts with the unit it edits),
/// then floor correlation when a floor is declared. The service layer
/// surfaces `message`/`suggestion` verbatim and aborts the write on
/// `is_valid == false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateValidator {
    conflicts: ConflictDetector,
    floors: FloorCorrelator,
}

impl UpdateValidator {
    pub fn new() -> Self {
        Self {
            conflicts: ConflictDetector::new(),
            floors: FloorCorrelator::new(),
        }
    }

    pub fn validate(
        &self,
        candidate: &str,
        floor: Option<i32>,
        existing: &[UnitRecord],
        exclude_unit_id: Option<&str>,
    ) -> ValidationResult {
        let conflict = self
            .conflicts
            .detect_excluding(candidate, existing, exclude_unit_id);
        if conflict.has_conflict {
            return ValidationResult::conflict(
                format!("Unit number \"{candidate}\" is already in use"),
                conflict.suggestion,
            );
        }

        if let Some(declared_floor) = floor {
            let result = self.floors.validate(candidate, declared_floor);
            if !result.is_valid {
                return result;
            }
        }

        ValidationResult::valid(format!("Unit number \"{candidate}\" is available"))
    }
}
