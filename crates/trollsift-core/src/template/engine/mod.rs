//! Template engine implementation

mod compile;
mod compose;
mod convert;
mod extract;
mod spec;
mod tokenize;

pub use compile::{CompiledTemplate, Field, Segment};
pub use spec::{Align, DateTimeSpec, FormatSpec, ScalarSpec, ScalarType, SpecKind};

use crate::template::error::TemplateError;
use crate::template::value::Fields;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use convert::to_value;
use extract::extract;

/// Matching behavior shared by every call on a parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Reject input that continues after the last template segment
    #[serde(default)]
    pub strict: bool,
}

/// A compiled template with its parse/compose/validate entry points
///
/// Cloning is cheap and clones share the compiled template, so one parser can
/// serve many threads.
#[derive(Debug, Clone)]
pub struct Parser {
    compiled: Arc<CompiledTemplate>,
    options: ParserOptions,
}

impl Parser {
    /// Compile `template` with default options
    pub fn new(template: &str) -> Result<Self, TemplateError> {
        Self::with_options(template, ParserOptions::default())
    }

    pub fn with_options(template: &str, options: ParserOptions) -> Result<Self, TemplateError> {
        Ok(Self {
            compiled: Arc::new(CompiledTemplate::compile(template)?),
            options,
        })
    }

    /// Same template, strict trailing-input handling switched on or off
    pub fn strict(&self, strict: bool) -> Self {
        Self {
            compiled: Arc::clone(&self.compiled),
            options: ParserOptions { strict },
        }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn compiled(&self) -> &CompiledTemplate {
        &self.compiled
    }

    /// The template text
    pub fn template(&self) -> &str {
        self.compiled.source()
    }

    /// Field names in template order, each once
    pub fn keys(&self) -> Vec<&str> {
        self.compiled.field_names()
    }

    /// Raw matched substrings per field, before type conversion
    pub fn extract(&self, input: &str) -> Result<BTreeMap<String, String>, TemplateError> {
        let matches = extract(&self.compiled, input, self.options.strict)?;
        Ok(matches
            .into_iter()
            .map(|m| (m.field.name.clone(), m.raw.to_string()))
            .collect())
    }

    /// Extract and convert every field of `input`
    ///
    /// A name repeated in the template takes the value of its last occurrence.
    pub fn parse(&self, input: &str) -> Result<Fields, TemplateError> {
        let matches = extract(&self.compiled, input, self.options.strict)?;
        let mut fields = Fields::new();
        for m in matches {
            let value = to_value(&m.field.name, m.raw, m.field.spec.as_ref())?;
            fields.insert(m.field.name.clone(), value);
        }
        Ok(fields)
    }

    /// Render `values` into the template layout
    pub fn compose(&self, values: &Fields) -> Result<String, TemplateError> {
        compose::compose(&self.compiled, values)
    }

    /// Whether `input` parses without error
    pub fn validate(&self, input: &str) -> bool {
        match self.parse(input) {
            Ok(_) => true,
            Err(err) => {
                debug_assert!(err.is_mismatch(), "unexpected parse error: {}", err);
                tracing::debug!(template = self.template(), input, reason = %err, "input rejected");
                false
            }
        }
    }

    /// Glob pattern matching every string the template could produce with `values` fixed
    pub fn globify(&self, values: &Fields) -> Result<String, TemplateError> {
        compose::globify(&self.compiled, values)
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

impl FromStr for Parser {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Convenience function to parse `input` with a one-off template
pub fn parse(template: &str, input: &str) -> Result<Fields, TemplateError> {
    Parser::new(template)?.parse(input)
}

/// Convenience function to compose `values` with a one-off template
pub fn compose(template: &str, values: &Fields) -> Result<String, TemplateError> {
    Parser::new(template)?.compose(values)
}

/// Convenience function to validate `input` against a one-off template
///
/// A malformed template is an error, never `Ok(false)`.
pub fn validate(template: &str, input: &str) -> Result<bool, TemplateError> {
    Ok(Parser::new(template)?.validate(input))
}

/// Convenience function to globify a one-off template
pub fn globify(template: &str, values: &Fields) -> Result<String, TemplateError> {
    Parser::new(template)?.globify(values)
}

#[cfg(test)]
mod tests;
