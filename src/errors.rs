//! Error handling for the numbering engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! Malformed unit numbers are never errors: empty input classifies as
//! `numeric`, anything unrecognized as `custom`. The only hard failure is a
//! catalog registration problem, which is a programming error and surfaces
//! fail-fast when the shared catalog is first built.

use crate::catalog::PatternId;

/// Errors that can occur while building the pattern catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate pattern registered: {0}")]
    DuplicatePattern(PatternId),

    #[error("Pattern {id} default value {value:?} does not match its own recognizer")]
    InvalidDefaultFirst { id: PatternId, value: String },

    #[error("Unknown pattern id: {0}")]
    UnknownPattern(String),
}
