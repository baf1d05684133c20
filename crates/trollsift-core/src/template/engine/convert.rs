//! Conversion between matched text and typed values

use super::spec::{Align, FormatSpec, ScalarSpec, ScalarType, SpecKind};
use crate::template::error::TemplateError;
use crate::template::value::Value;
use chrono::format::{self, ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Convert a matched substring to a typed value
pub(crate) fn to_value(
    field: &str,
    raw: &str,
    spec: Option<&FormatSpec>,
) -> Result<Value, TemplateError> {
    match spec.map(FormatSpec::kind) {
        None => Ok(Value::Str(raw.to_string())),
        Some(SpecKind::DateTime(dt)) => parse_datetime(field, raw, &dt.pattern).map(Value::DateTime),
        Some(SpecKind::Scalar(scalar)) => match scalar.ty {
            ScalarType::Str => Ok(Value::Str(strip_fill(raw, scalar).to_string())),
            ScalarType::Int => parse_int(field, raw, scalar).map(Value::Int),
        },
    }
}

/// Render a typed value as the text a field occupies
pub(crate) fn to_text(
    field: &str,
    value: &Value,
    spec: Option<&FormatSpec>,
) -> Result<String, TemplateError> {
    let kind = match spec.map(FormatSpec::kind) {
        Some(kind) => kind,
        None => return Ok(value.to_string()),
    };

    match (kind, value) {
        (SpecKind::DateTime(dt), Value::DateTime(instant)) => {
            let mut out = String::new();
            write!(out, "{}", instant.format(&dt.pattern)).map_err(|_| {
                TemplateError::conversion(field, value.to_string(), "cannot render datetime")
            })?;
            Ok(out)
        }
        (SpecKind::Scalar(scalar), Value::Int(i)) if scalar.ty == ScalarType::Int => {
            Ok(render_int(*i, scalar))
        }
        (SpecKind::Scalar(scalar), Value::Int(i)) => Ok(render_str(&i.to_string(), scalar)),
        (SpecKind::Scalar(scalar), Value::Str(text)) if scalar.ty == ScalarType::Str => {
            Ok(render_str(text, scalar))
        }
        (kind, other) => {
            let expected = match kind {
                SpecKind::DateTime(_) => "datetime",
                SpecKind::Scalar(scalar) if scalar.ty == ScalarType::Int => "integer",
                SpecKind::Scalar(_) => "string",
            };
            Err(TemplateError::conversion(
                field,
                other.to_string(),
                format!("expected {}, got {}", expected, other.type_name()),
            ))
        }
    }
}

/// Remove padding on the side(s) the alignment puts it
fn strip_fill<'r>(raw: &'r str, scalar: &ScalarSpec) -> &'r str {
    let fill = scalar.fill_char();
    match scalar.align {
        Some(Align::Left) => raw.trim_end_matches(fill),
        Some(Align::Right) => raw.trim_start_matches(fill),
        Some(Align::Center) => raw.trim_matches(fill),
        None => raw,
    }
}

fn parse_int(field: &str, raw: &str, scalar: &ScalarSpec) -> Result<i64, TemplateError> {
    let body = strip_fill(raw, scalar).trim();

    // A zero value rendered with a `0` fill is all fill
    if body.is_empty() && !raw.is_empty() && scalar.fill_char() == '0' {
        return Ok(0);
    }

    body.parse::<i64>().map_err(|e| {
        TemplateError::conversion(field, raw, format!("not a base-10 integer ({})", e))
    })
}

fn parse_datetime(field: &str, raw: &str, pattern: &str) -> Result<NaiveDateTime, TemplateError> {
    let fail = |reason: String| TemplateError::conversion(field, raw, reason);

    let mut parsed = Parsed::new();
    format::parse(&mut parsed, raw, StrftimeItems::new(pattern))
        .map_err(|e| fail(format!("does not match '{}': {}", pattern, e)))?;

    // Missing parts take strptime defaults: 1900-01-01 00:00:00
    let date = resolve_with_defaults(
        &mut parsed,
        Parsed::to_naive_date,
        &[default_year, default_month_day],
    )
    .map_err(|e| fail(e.to_string()))?;
    let time = resolve_with_defaults(&mut parsed, Parsed::to_naive_time, &[default_hour_minute])
        .map_err(|e| fail(e.to_string()))?;

    Ok(date.and_time(time))
}

/// Apply default stages one at a time while `build` lacks information.
///
/// Stages are separate so a year default cannot contradict a parsed day of year.
fn resolve_with_defaults<T>(
    parsed: &mut Parsed,
    build: fn(&Parsed) -> ParseResult<T>,
    stages: &[fn(&mut Parsed)],
) -> ParseResult<T> {
    let mut result = build(parsed);
    for stage in stages {
        if !matches!(&result, Err(e) if e.kind() == ParseErrorKind::NotEnough) {
            break;
        }
        stage(parsed);
        result = build(parsed);
    }
    result
}

// Setters refuse to overwrite parsed values, so their errors are ignored

fn default_year(parsed: &mut Parsed) {
    let _ = parsed.set_year(1900);
}

fn default_month_day(parsed: &mut Parsed) {
    let _ = parsed.set_month(1);
    let _ = parsed.set_day(1);
}

fn default_hour_minute(parsed: &mut Parsed) {
    let _ = parsed.set_hour(0);
    let _ = parsed.set_minute(0);
}

fn render_int(value: i64, scalar: &ScalarSpec) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let digits = value.unsigned_abs().to_string();
    let width = scalar.width.unwrap_or(0);

    match scalar.align {
        // Sign-aware zero padding: -0042
        None if scalar.zero_pad => {
            let zeros = width.saturating_sub(sign.len() + digits.len());
            format!("{}{}{}", sign, "0".repeat(zeros), digits)
        }
        align => pad(
            &format!("{}{}", sign, digits),
            width,
            scalar.fill_char(),
            align.unwrap_or(Align::Right),
        ),
    }
}

/// Strings longer than the declared width are cut to it
fn render_str(text: &str, scalar: &ScalarSpec) -> String {
    let (text, width) = match scalar.width {
        Some(width) => (text.chars().take(width).collect::<String>(), width),
        None => (text.to_string(), 0),
    };
    pad(
        &text,
        width,
        scalar.fill_char(),
        scalar.align.unwrap_or(Align::Left),
    )
}

fn pad(text: &str, width: usize, fill: char, align: Align) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let total = width - len;
    let (left, right) = match align {
        Align::Left => (0, total),
        Align::Right => (total, 0),
        Align::Center => (total / 2, total - total / 2),
    };

    let mut out = String::with_capacity(text.len() + total * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}
