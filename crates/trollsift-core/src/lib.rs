// Core modules
pub mod config;
pub mod error;
pub mod template;

// Re-export commonly used types
pub use config::{PatternSet, SiftConfig};
pub use error::{Result, SiftError};
pub use template::{Parser, ParserOptions, TemplateError, Value};
