//! Pattern catalog — the fixed table of unit numbering conventions.
//!
//! Seven patterns, matched in a fixed precedence order because shapes
//! overlap (e.g. `A101` would be swallowed by a generic fallback without an
//! ordered check): suite, building_unit, alpha_numeric, wing_unit,
//! sequential, custom, numeric. Each pattern owns a recognizer, a floor
//! extractor, a next-value generator, and a default first value.

mod definition;
mod detector;
pub(crate) mod rules;
mod types;

pub use definition::{catalog, NumberingCatalog, PatternDefinition};
pub use detector::PatternDetector;
pub use types::PatternId;
