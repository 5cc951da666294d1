//! Shared data model: unit records and the result values the engine returns.
//!
//! Field names serialize camelCase because the consumer is a JSON service
//! layer (`unitNumber`, `nextNumber`, `isValid`, ...). All values are created
//! fresh per call; the engine never mutates a caller's record.

use serde::{Deserialize, Serialize};

/// A unit as seen by the engine. Owned by the persistence layer; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRecord {
    /// Persistence id, absent for records that have not been stored yet.
    /// Update validation uses it to exclude the unit being edited.
    #[serde(default)]
    pub id: Option<String>,
    /// Raw unit number string, e.g. "101", "A-1001", "B1U01".
    pub unit_number: String,
    /// Unit type label (apartment, room, suite, ...). Not interpreted.
    #[serde(default)]
    pub unit_type: String,
    /// Declared floor, if the caller tracks one.
    #[serde(default)]
    pub floor: Option<i32>,
}

impl UnitRecord {
    /// Convenience constructor for a bare number.
    pub fn new(unit_number: impl Into<String>) -> Self {
        Self {
            id: None,
            unit_number: unit_number.into(),
            unit_type: String::new(),
            floor: None,
        }
    }

    pub fn with_floor(unit_number: impl Into<String>, floor: i32) -> Self {
        Self {
            floor: Some(floor),
            ..Self::new(unit_number)
        }
    }
}

/// Outcome of a floor-correlation or create/update validation.
///
/// Never raised as an error; invalid inputs produce an inspectable value
/// whose `message`/`suggestion` the service layer surfaces verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    /// Alternative number, populated on conflict.
    pub suggestion: Option<String>,
    /// Floor implied by the unit number, populated on floor mismatch.
    pub suggested_floor: Option<i32>,
    /// True when the rejection is a number collision rather than a floor issue.
    pub conflict: bool,
}

impl ValidationResult {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
            suggestion: None,
            suggested_floor: None,
            conflict: false,
        }
    }

    pub fn floor_mismatch(message: impl Into<String>, suggested_floor: i32) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            suggestion: None,
            suggested_floor: Some(suggested_floor),
            conflict: false,
        }
    }

    pub fn conflict(message: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            suggestion,
            suggested_floor: None,
            conflict: true,
        }
    }
}

/// Outcome of a collision check against existing unit numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResult {
    pub has_conflict: bool,
    /// The existing number that collided, when there is a conflict.
    pub conflicting_unit: Option<String>,
    /// Next free number for the candidate's pattern, when there is a conflict.
    pub suggestion: Option<String>,
}

impl ConflictResult {
    pub fn none() -> Self {
        Self {
            has_conflict: false,
            conflicting_unit: None,
            suggestion: None,
        }
    }
}

/// Outcome of a whole-collection convention scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyResult {
    pub is_consistent: bool,
    /// Distinct patterns observed, in first-seen order.
    pub detected_patterns: Vec<crate::catalog::PatternId>,
    pub recommendation: String,
}

/// A generated unit number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedNumber {
    pub next_number: String,
}
