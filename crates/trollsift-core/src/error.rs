use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum SiftError {
    // Config errors
    #[error("CONFIG_READ_ERROR: failed to read '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_WRITE_ERROR: {0}")]
    ConfigWriteError(String),

    // Pattern errors
    #[error("PATTERN_NOT_FOUND: pattern '{0}' is not defined")]
    PatternNotFound(String),

    #[error("PATTERN_INVALID: pattern '{name}': {source}")]
    PatternInvalid {
        name: String,
        #[source]
        source: TemplateError,
    },

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] TemplateError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiftError>;
