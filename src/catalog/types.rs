//! Pattern identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// Identifier of a numbering pattern. Closed set; adding a pattern means
/// adding a catalog entry, never a runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternId {
    /// "Suite-" prefix followed by digits, e.g. "Suite-205".
    Suite,
    /// Letter, building/floor digit, literal "U", two digits, e.g. "B1U01".
    BuildingUnit,
    /// Letter, dash, exactly four digits, e.g. "A-1001".
    AlphaNumeric,
    /// Letter followed by exactly three digits, e.g. "A101".
    WingUnit,
    /// Digits only, e.g. "1", "42".
    Sequential,
    /// Prefixed counter ("Unit-001") or anything no structured shape claims.
    Custom,
    /// Fallback classification for an empty string; not used for generation.
    Numeric,
}

impl PatternId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternId::Suite => "suite",
            PatternId::BuildingUnit => "building_unit",
            PatternId::AlphaNumeric => "alpha_numeric",
            PatternId::WingUnit => "wing_unit",
            PatternId::Sequential => "sequential",
            PatternId::Custom => "custom",
            PatternId::Numeric => "numeric",
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suite" => Ok(PatternId::Suite),
            "building_unit" => Ok(PatternId::BuildingUnit),
            "alpha_numeric" => Ok(PatternId::AlphaNumeric),
            "wing_unit" => Ok(PatternId::WingUnit),
            "sequential" => Ok(PatternId::Sequential),
            "custom" => Ok(PatternId::Custom),
            "numeric" => Ok(PatternId::Numeric),
            other => Err(CatalogError::UnknownPattern(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_str() {
        for id in [
            PatternId::Suite,
            PatternId::BuildingUnit,
            PatternId::AlphaNumeric,
            PatternId::WingUnit,
            PatternId::Sequential,
            PatternId::Custom,
            PatternId::Numeric,
        ] {
            assert_eq!(id.as_str().parse::<PatternId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_id_is_an_error_not_a_panic() {
        assert!("penthouse".parse::<PatternId>().is_err());
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&PatternId::AlphaNumeric).unwrap();
        assert_eq!(json, "\"alpha_numeric\"");
    }
}
