//! Conflict detection — exact collisions between unit numbers.

mod detector;

pub use detector::ConflictDetector;
