//! Next-number generation, per pattern and optionally floor-scoped.

mod custom;
mod generator;

pub use custom::{parse_custom_unit, CustomUnit};
pub use generator::NumberGenerator;
