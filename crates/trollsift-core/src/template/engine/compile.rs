//! Template compilation: tokens → segments + spec table

use super::spec::FormatSpec;
use super::tokenize::{Token, TokenStream};
use crate::template::error::TemplateError;
use std::collections::BTreeMap;

/// A named placeholder in a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub spec: Option<FormatSpec>,
    /// Character offset of the field's `{` in the template
    pub position: usize,
}

impl Field {
    /// Characters this field consumes, `None` when it is greedy
    pub fn width(&self) -> Option<usize> {
        self.spec.as_ref().and_then(FormatSpec::width)
    }
}

/// One piece of a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Field),
}

/// Immutable compiled form of a template string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    source: String,
    segments: Vec<Segment>,
    specs: BTreeMap<String, FormatSpec>,
}

impl CompiledTemplate {
    /// Compile a template string
    ///
    /// Fails with [`TemplateError::Syntax`] on unbalanced braces, nameless fields
    /// and unsupported format specs.
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut specs = BTreeMap::new();

        for token in TokenStream::new(template) {
            match token? {
                Token::Literal(text) => segments.push(Segment::Literal(text)),
                Token::Field {
                    name,
                    spec,
                    position,
                } => {
                    let spec = spec
                        .map(|raw| FormatSpec::parse(&raw, position))
                        .transpose()?;
                    if let Some(spec) = &spec {
                        // Last definition wins for repeated names
                        specs.insert(name.clone(), spec.clone());
                    }
                    segments.push(Segment::Field(Field {
                        name,
                        spec,
                        position,
                    }));
                }
            }
        }

        let compiled = Self {
            source: template.to_string(),
            segments,
            specs,
        };
        tracing::debug!(
            template,
            segments = compiled.segments.len(),
            fields = compiled.fields().count(),
            "compiled template"
        );
        Ok(compiled)
    }

    /// The template text this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Spec declared for `name`, if any
    pub fn spec(&self, name: &str) -> Option<&FormatSpec> {
        self.specs.get(name)
    }

    /// Field name → spec, for fields that carry one
    pub fn specs(&self) -> &BTreeMap<String, FormatSpec> {
        &self.specs
    }

    /// Field occurrences in template order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(field),
            Segment::Literal(_) => None,
        })
    }

    /// Distinct field names in order of first appearance
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for field in self.fields() {
            if !names.contains(&field.name.as_str()) {
                names.push(&field.name);
            }
        }
        names
    }
}
