//! Consistency validation — does a whole collection share one convention?

mod validator;

pub use validator::ConsistencyValidator;
