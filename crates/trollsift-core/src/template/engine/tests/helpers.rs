//! Shared test helpers for template engine tests

use crate::template::engine::Parser;
use crate::template::value::{Fields, Value};
use chrono::{NaiveDate, NaiveDateTime};

pub(super) const HRPT_TEMPLATE: &str =
    "/somedir/{directory}/hrpt_{platform:4s}{platnum:2s}_{time:%Y%m%d_%H%M}_{orbit:05d}.l1b";

pub(super) const HRPT_FILENAME: &str = "/somedir/otherdir/hrpt_noaa16_20140210_1004_69022.l1b";

pub(super) fn hrpt_parser() -> Parser {
    Parser::new(HRPT_TEMPLATE).unwrap()
}

/// Fields of `HRPT_FILENAME`
pub(super) fn hrpt_fields() -> Fields {
    fields(&[
        ("directory", Value::from("otherdir")),
        ("platform", Value::from("noaa")),
        ("platnum", Value::from("16")),
        ("time", Value::DateTime(datetime(2014, 2, 10, 10, 4, 0))),
        ("orbit", Value::Int(69022)),
    ])
}

pub(super) fn fields(pairs: &[(&str, Value)]) -> Fields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

pub(super) fn datetime(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
