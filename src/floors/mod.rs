//! Floor correlation — does a unit number agree with its declared floor?

mod correlator;

pub use correlator::FloorCorrelator;
