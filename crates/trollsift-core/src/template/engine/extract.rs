//! Extraction: walk compiled segments against an input string

use super::compile::{CompiledTemplate, Field, Segment};
use crate::template::error::TemplateError;

/// Raw text matched by one field occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawMatch<'t, 's> {
    pub field: &'t Field,
    pub raw: &'s str,
}

/// Split `input` into per-field raw substrings.
///
/// Segments are consumed left to right with a byte cursor. Unconsumed input
/// after the last segment is accepted unless `strict` is set.
pub(crate) fn extract<'t, 's>(
    template: &'t CompiledTemplate,
    input: &'s str,
    strict: bool,
) -> Result<Vec<RawMatch<'t, 's>>, TemplateError> {
    let segments = template.segments();
    let mut matches = Vec::new();
    let mut cursor = 0;

    for (idx, segment) in segments.iter().enumerate() {
        let rest = &input[cursor..];
        match segment {
            Segment::Literal(text) => {
                if !rest.starts_with(text.as_str()) {
                    return Err(TemplateError::no_match(
                        format!("expected '{}'", text),
                        char_offset(input, cursor),
                    ));
                }
                cursor += text.len();
            }
            Segment::Field(field) => {
                let len = match field.width() {
                    Some(width) => fixed_len(rest, width).ok_or_else(|| {
                        TemplateError::no_match(
                            format!(
                                "field '{}' needs {} characters, {} left",
                                field.name,
                                width,
                                rest.chars().count()
                            ),
                            char_offset(input, cursor),
                        )
                    })?,
                    None => greedy_len(field, segments.get(idx + 1), rest)
                        .map_err(|e| locate(e, input, cursor))?,
                };

                let raw = &rest[..len];
                tracing::trace!(field = %field.name, raw, "extracted field");
                matches.push(RawMatch { field, raw });
                cursor += len;
            }
        }
    }

    if strict && cursor < input.len() {
        return Err(TemplateError::no_match(
            format!("unconsumed trailing input '{}'", &input[cursor..]),
            char_offset(input, cursor),
        ));
    }

    Ok(matches)
}

/// Byte length of the first `width` characters, `None` if fewer remain
fn fixed_len(rest: &str, width: usize) -> Option<usize> {
    match rest.char_indices().nth(width) {
        Some((end, _)) => Some(end),
        None if rest.chars().count() == width => Some(rest.len()),
        None => None,
    }
}

/// Byte length of a greedy field: up to the next literal, or everything if last
fn greedy_len(field: &Field, next: Option<&Segment>, rest: &str) -> Result<usize, TemplateError> {
    match next {
        None => Ok(rest.len()),
        Some(Segment::Literal(text)) => rest.find(text.as_str()).ok_or_else(|| {
            TemplateError::no_match(
                format!("literal '{}' after field '{}' not found", text, field.name),
                0,
            )
        }),
        Some(Segment::Field(_)) => Err(TemplateError::AmbiguousField {
            field: field.name.clone(),
        }),
    }
}

/// Rebase a NoMatch position onto the full input
fn locate(err: TemplateError, input: &str, cursor: usize) -> TemplateError {
    match err {
        TemplateError::NoMatch { message, position } => TemplateError::NoMatch {
            message,
            position: position + char_offset(input, cursor),
        },
        other => other,
    }
}

fn char_offset(text: &str, byte_pos: usize) -> usize {
    text[..byte_pos].chars().count()
}
