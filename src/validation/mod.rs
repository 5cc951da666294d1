//! Create/update validation — the gate run before any unit write.

mod update;

pub use update::UpdateValidator;
