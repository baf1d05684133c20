//! Format spec classification
//!
//! A spec is the text after `:` inside a field. Two families exist:
//!
//! - datetime specs contain a `%` directive (`%Y%m%d_%H%M`)
//! - scalar specs follow `[[fill]align][0][width][type]` with `align ∈ {<,>,^}` and
//!   `type ∈ {s,d}` (`05d`, `_<6s`, `4s`, `d`)
//!
//! A scalar spec without a width is greedy, exactly like a field without a spec.

use crate::template::error::TemplateError;
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Padding side for fixed-width scalar fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `<`
    Left,
    /// `>`
    Right,
    /// `^`
    Center,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }
}

/// Scalar field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// `s` (also the default when no type letter is given)
    Str,
    /// `d`
    Int,
}

/// `[[fill]align][0][width][type]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarSpec {
    pub fill: Option<char>,
    pub align: Option<Align>,
    /// `0` flag before the width
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub ty: ScalarType,
}

impl ScalarSpec {
    /// Fill character in effect: explicit fill, else `0` for zero-padded specs, else space
    pub fn fill_char(&self) -> char {
        match (self.fill, self.zero_pad) {
            (Some(fill), _) => fill,
            (None, true) => '0',
            (None, false) => ' ',
        }
    }
}

/// strftime-style spec with its precomputed match width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeSpec {
    /// Directive string in chrono syntax
    pub pattern: String,
    /// Character count of the reference instant rendered with `pattern`
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecKind {
    DateTime(DateTimeSpec),
    Scalar(ScalarSpec),
}

/// A classified format spec, keeping the text it was written as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    raw: String,
    kind: SpecKind,
}

impl FormatSpec {
    /// Classify `raw`; `position` is the field's offset in the template, used in errors
    pub fn parse(raw: &str, position: usize) -> Result<Self, TemplateError> {
        let kind = if raw.contains('%') {
            SpecKind::DateTime(parse_datetime(raw, position)?)
        } else {
            SpecKind::Scalar(parse_scalar(raw, position)?)
        };
        Ok(Self {
            raw: raw.to_string(),
            kind,
        })
    }

    /// The spec exactly as written in the template
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &SpecKind {
        &self.kind
    }

    /// Number of characters the field consumes, `None` for greedy fields
    pub fn width(&self) -> Option<usize> {
        match &self.kind {
            SpecKind::DateTime(dt) => Some(dt.width),
            SpecKind::Scalar(scalar) => scalar.width,
        }
    }
}

fn parse_scalar(raw: &str, position: usize) -> Result<ScalarSpec, TemplateError> {
    // Letters only: no width, so the field is greedy; any `d` makes it an integer
    if raw.chars().all(char::is_alphabetic) {
        return Ok(ScalarSpec {
            fill: None,
            align: None,
            zero_pad: false,
            width: None,
            ty: if raw.contains('d') {
                ScalarType::Int
            } else {
                ScalarType::Str
            },
        });
    }

    let chars: Vec<char> = raw.chars().collect();
    let mut idx = 0;

    let (fill, align) = match (chars.first(), chars.get(1).copied().and_then(Align::from_char)) {
        (Some(&fill), Some(align)) => {
            idx = 2;
            (Some(fill), Some(align))
        }
        (Some(&first), None) => match Align::from_char(first) {
            Some(align) => {
                idx = 1;
                (None, Some(align))
            }
            None => (None, None),
        },
        (None, _) => (None, None),
    };

    let zero_pad = chars.get(idx) == Some(&'0');
    if zero_pad {
        idx += 1;
    }

    let digits_start = idx;
    while chars.get(idx).is_some_and(|c| c.is_ascii_digit()) {
        idx += 1;
    }
    let width = if idx > digits_start {
        let digits: String = chars[digits_start..idx].iter().collect();
        let width = digits.parse::<usize>().map_err(|_| {
            TemplateError::syntax(format!("width '{}' is out of range", digits), position)
        })?;
        Some(width)
    } else {
        None
    };

    let ty = match chars.get(idx) {
        None => ScalarType::Str,
        Some('s') => ScalarType::Str,
        Some('d') => ScalarType::Int,
        Some(other) => {
            return Err(TemplateError::syntax(
                format!("unsupported format type '{}' in spec '{}'", other, raw),
                position,
            ))
        }
    };
    if idx < chars.len() {
        idx += 1;
    }
    if idx < chars.len() {
        let rest: String = chars[idx..].iter().collect();
        return Err(TemplateError::syntax(
            format!("unexpected '{}' after type in spec '{}'", rest, raw),
            position,
        ));
    }

    Ok(ScalarSpec {
        fill,
        align,
        zero_pad,
        width,
        ty,
    })
}

fn parse_datetime(raw: &str, position: usize) -> Result<DateTimeSpec, TemplateError> {
    let pattern = to_chrono_pattern(raw);
    if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
        return Err(TemplateError::syntax(
            format!("invalid datetime directive in spec '{}'", raw),
            position,
        ));
    }

    let mut rendered = String::new();
    write!(rendered, "{}", reference_instant().format(&pattern)).map_err(|_| {
        TemplateError::syntax(
            format!("spec '{}' needs information a naive datetime lacks", raw),
            position,
        )
    })?;

    Ok(DateTimeSpec {
        pattern,
        width: rendered.chars().count(),
    })
}

/// Rewrite Python strftime directives chrono spells differently.
///
/// `%f` is six-digit microseconds in Python but nanoseconds in chrono.
fn to_chrono_pattern(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '%' {
            match chars.next() {
                Some('f') => out.push_str("6f"),
                Some(next) => out.push(next),
                None => {}
            }
        }
    }
    out
}

/// Instant used to measure datetime field widths.
///
/// Every numeric component has two significant digits so padded and unpadded
/// directives agree for the common case.
fn reference_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2014, 10, 20)
        .and_then(|date| date.and_hms_micro_opt(12, 34, 56, 789_012))
        .unwrap_or_default()
}
