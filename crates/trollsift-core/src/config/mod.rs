//! Pattern configuration
//!
//! Named templates are kept in a TOML file so callers can recognise many
//! product types without hard-coding their layouts.

pub mod model;
pub mod patterns;

pub use model::SiftConfig;
pub use patterns::PatternSet;
