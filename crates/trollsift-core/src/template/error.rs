//! Template error types

use thiserror::Error;

/// Errors raised while compiling, parsing or composing with a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Malformed template (unbalanced braces, unsupported format spec)
    #[error("Malformed template at position {position}: {message}")]
    Syntax {
        /// Error message
        message: String,
        /// Character offset into the template
        position: usize,
    },

    /// Input does not follow the template layout
    #[error("Input does not match template at position {position}: {message}")]
    NoMatch {
        /// Error message
        message: String,
        /// Character offset into the input
        position: usize,
    },

    /// Matched text could not be converted per the field's format spec
    #[error("Cannot convert field '{field}' value '{value}': {reason}")]
    Conversion {
        /// Field name
        field: String,
        /// Offending raw text or rendered value
        value: String,
        /// Why the conversion failed
        reason: String,
    },

    /// Composition was asked to render a field with no supplied value
    #[error("Missing value for field '{key}'")]
    MissingKey {
        /// The field that has no value
        key: String,
    },

    /// A greedy field is not followed by a literal, so its end is unknown
    #[error("Field '{field}' has no fixed width and is not followed by literal text")]
    AmbiguousField {
        /// The greedy field
        field: String,
    },
}

impl TemplateError {
    /// True for errors that describe the input rather than the template or the caller.
    ///
    /// These are the outcomes `validate` folds into `false`.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            TemplateError::NoMatch { .. }
                | TemplateError::Conversion { .. }
                | TemplateError::AmbiguousField { .. }
        )
    }

    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        TemplateError::Syntax {
            message: message.into(),
            position,
        }
    }

    pub(crate) fn no_match(message: impl Into<String>, position: usize) -> Self {
        TemplateError::NoMatch {
            message: message.into(),
            position,
        }
    }

    pub(crate) fn conversion(
        field: &str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TemplateError::Conversion {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
