//! Pattern definitions and the ordered catalog.

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use super::rules;
use super::types::PatternId;
use crate::errors::CatalogError;

type RecognizeFn = fn(&str) -> bool;
type FloorFn = fn(&str) -> Option<i32>;
type NextFn = fn(&[&str], Option<i32>, Option<&str>) -> String;
type FirstFn = fn(Option<i32>, Option<&str>) -> String;

/// One numbering pattern: recognizer, floor rule, generator, first value.
///
/// For any string the recognizer accepts, `extract_floor` and `next_value`
/// are total; floor is `None` when the pattern carries no floor semantics.
#[derive(Debug, Clone)]
pub struct PatternDefinition {
    pub id: PatternId,
    /// Human-readable shape, e.g. `"A-1001"`.
    pub description: &'static str,
    recognize: RecognizeFn,
    extract_floor: FloorFn,
    next_value: NextFn,
    default_first: FirstFn,
}

impl PatternDefinition {
    /// Does a raw unit number conform to this pattern's shape?
    pub fn recognize(&self, raw: &str) -> bool {
        (self.recognize)(raw)
    }

    /// Floor implied by a number under this pattern, if any.
    pub fn extract_floor(&self, raw: &str) -> Option<i32> {
        (self.extract_floor)(raw)
    }

    /// Next number given existing numbers of this pattern, optionally scoped
    /// to a floor or a custom prefix.
    pub fn next_value(&self, existing: &[&str], floor: Option<i32>, prefix: Option<&str>) -> String {
        (self.next_value)(existing, floor, prefix)
    }

    /// Canonical first number for this pattern.
    pub fn default_first(&self, floor: Option<i32>, prefix: Option<&str>) -> String {
        (self.default_first)(floor, prefix)
    }
}

/// Ordered table of the seven patterns. Precedence matters: structured
/// shapes are checked before the generic fallbacks, and swapping the order
/// changes classification for edge cases like all-digit strings.
#[derive(Debug)]
pub struct NumberingCatalog {
    definitions: Vec<PatternDefinition>,
}

impl NumberingCatalog {
    pub fn new() -> Result<Self, CatalogError> {
        let definitions = vec![
            PatternDefinition {
                id: PatternId::Suite,
                description: "Suite-101",
                recognize: rules::suite_recognize,
                extract_floor: rules::suite_floor,
                next_value: rules::suite_next,
                default_first: rules::suite_first,
            },
            PatternDefinition {
                id: PatternId::BuildingUnit,
                description: "B1U01",
                recognize: rules::building_recognize,
                extract_floor: rules::building_floor,
                next_value: rules::building_next,
                default_first: rules::building_first,
            },
            PatternDefinition {
                id: PatternId::AlphaNumeric,
                description: "A-1001",
                recognize: rules::alpha_recognize,
                extract_floor: rules::alpha_floor,
                next_value: rules::alpha_next,
                default_first: rules::alpha_first,
            },
            PatternDefinition {
                id: PatternId::WingUnit,
                description: "A101",
                recognize: rules::wing_recognize,
                extract_floor: rules::wing_floor,
                next_value: rules::wing_next,
                default_first: rules::wing_first,
            },
            PatternDefinition {
                id: PatternId::Sequential,
                description: "1, 2, 3",
                recognize: rules::sequential_recognize,
                extract_floor: rules::no_floor,
                next_value: rules::sequential_next,
                default_first: rules::sequential_first,
            },
            PatternDefinition {
                id: PatternId::Custom,
                description: "Unit-001",
                recognize: rules::custom_recognize,
                extract_floor: rules::no_floor,
                next_value: rules::custom_next,
                default_first: rules::custom_first,
            },
            PatternDefinition {
                id: PatternId::Numeric,
                description: "(empty)",
                recognize: rules::numeric_recognize,
                extract_floor: rules::no_floor,
                // Never generated from directly, but the ops must stay total;
                // delegate to the sequential rules.
                next_value: rules::sequential_next,
                default_first: rules::sequential_first,
            },
        ];
        Self::validate(&definitions)?;
        Ok(Self { definitions })
    }

    /// Registration invariants, checked once at construction: no duplicate
    /// ids, and every generative pattern's own first value must pass its
    /// recognizer. The fallbacks (`custom`, `numeric`) are exempt from the
    /// second check; `numeric` matches only the empty string.
    fn validate(definitions: &[PatternDefinition]) -> Result<(), CatalogError> {
        let mut seen: SmallVec<[PatternId; 7]> = SmallVec::new();
        for def in definitions {
            if seen.contains(&def.id) {
                return Err(CatalogError::DuplicatePattern(def.id));
            }
            seen.push(def.id);
            if matches!(def.id, PatternId::Custom | PatternId::Numeric) {
                continue;
            }
            let first = def.default_first(None, None);
            if !def.recognize(&first) {
                return Err(CatalogError::InvalidDefaultFirst {
                    id: def.id,
                    value: first,
                });
            }
        }
        Ok(())
    }

    /// Classify a raw unit number into exactly one pattern id, first match
    /// wins. Empty input reaches the `numeric` entry; any other unclaimed
    /// string is `custom`.
    pub fn classify(&self, raw: &str) -> PatternId {
        for def in &self.definitions {
            if def.recognize(raw) {
                return def.id;
            }
        }
        PatternId::Custom
    }

    /// Catalog lookup by id.
    pub fn pattern_info(&self, id: PatternId) -> Option<&PatternDefinition> {
        self.definitions.iter().find(|def| def.id == id)
    }

    pub(crate) fn definition(&self, id: PatternId) -> &PatternDefinition {
        self.pattern_info(id)
            .expect("catalog holds a definition for every PatternId")
    }
}

static CATALOG: Lazy<NumberingCatalog> = Lazy::new(|| {
    NumberingCatalog::new().expect("static pattern catalog must register cleanly")
});

/// Shared immutable catalog. Built once on first use; a registration
/// failure is a programming error and aborts immediately.
pub fn catalog() -> &'static NumberingCatalog {
    &CATALOG
}
