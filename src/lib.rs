//! numbering-core: unit numbering engine for property portfolios
//!
//! This crate provides the numbering-convention logic behind unit management:
//! - Catalog: the fixed table of numbering patterns and their rules
//! - Floors: correlation between a unit number and its declared floor
//! - Generator: next-number generation per pattern, optionally floor-scoped
//! - Conflicts: exact-collision detection with alternative suggestions
//! - Consistency: whole-collection convention checks
//! - Validation: the conflict-then-floor gate run before creates/updates
//! - Engine: a facade composing all of the above
//!
//! Everything is pure and synchronous. Operations take the full
//! existing-units snapshot as an argument and return fresh values; a single
//! engine instance can serve any number of concurrent callers.

pub mod catalog;
pub mod conflicts;
pub mod consistency;
pub mod engine;
pub mod errors;
pub mod floors;
pub mod generator;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use catalog::{catalog, NumberingCatalog, PatternDefinition, PatternDetector, PatternId};
pub use conflicts::ConflictDetector;
pub use consistency::ConsistencyValidator;
pub use engine::NumberingEngine;
pub use errors::CatalogError;
pub use floors::FloorCorrelator;
pub use generator::{parse_custom_unit, CustomUnit, NumberGenerator};
pub use types::{
    ConflictResult, ConsistencyResult, GeneratedNumber, UnitRecord, ValidationResult,
};
pub use validation::UpdateValidator;
