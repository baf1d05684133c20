//! Composition: render values back into the template layout

use super::compile::{CompiledTemplate, Segment};
use super::convert::to_text;
use crate::template::error::TemplateError;
use crate::template::value::Fields;

/// Render every field from `values`; all referenced names must be present
pub(crate) fn compose(template: &CompiledTemplate, values: &Fields) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(template.source().len());

    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Field(field) => {
                let value = values
                    .get(&field.name)
                    .ok_or_else(|| TemplateError::MissingKey {
                        key: field.name.clone(),
                    })?;
                output.push_str(&to_text(&field.name, value, field.spec.as_ref())?);
            }
        }
    }

    Ok(output)
}

/// Render a glob pattern: supplied fields are composed, missing fixed-width
/// fields become `?` per character, missing greedy fields become `*`
pub(crate) fn globify(template: &CompiledTemplate, values: &Fields) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(template.source().len());

    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Field(field) => match (values.get(&field.name), field.width()) {
                (Some(value), _) => {
                    output.push_str(&to_text(&field.name, value, field.spec.as_ref())?)
                }
                (None, Some(width)) => output.extend(std::iter::repeat('?').take(width)),
                (None, None) => output.push('*'),
            },
        }
    }

    Ok(output)
}
