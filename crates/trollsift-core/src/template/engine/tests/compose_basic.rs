//! Composition tests

use super::helpers::{datetime, fields, hrpt_fields, hrpt_parser, HRPT_FILENAME};
use super::*;
use crate::template::value::Value;

#[test]
fn test_compose_hrpt_filename() {
    let result = hrpt_parser().compose(&hrpt_fields()).unwrap();
    assert_eq!(result, HRPT_FILENAME);
}

#[test]
fn test_compose_zero_padded_integer() {
    let result = compose("b{orbit:05d}", &fields(&[("orbit", Value::Int(1708))])).unwrap();
    assert_eq!(result, "b01708");
}

#[test]
fn test_compose_fill_and_alignment() {
    let parser = Parser::new("{mission_id:3s}_OL_1_{datatype_id:_<6s}_{duration:4d}").unwrap();
    let values = fields(&[
        ("mission_id", Value::from("S3A")),
        ("datatype_id", Value::from("EFR")),
        ("duration", Value::Int(1)),
    ]);
    assert_eq!(parser.compose(&values).unwrap(), "S3A_OL_1_EFR____   1");
}

#[test]
fn test_compose_center_alignment() {
    let result = compose("[{x:*^7s}]", &fields(&[("x", Value::from("abc"))])).unwrap();
    assert_eq!(result, "[**abc**]");
}

#[test]
fn test_compose_untyped_values_use_natural_form() {
    let values = fields(&[
        ("name", Value::from("x")),
        ("count", Value::Int(-3)),
        ("when", Value::DateTime(datetime(2014, 2, 10, 10, 4, 0))),
    ]);
    let result = compose("{name}|{count}|{when}", &values).unwrap();
    assert_eq!(result, "x|-3|2014-02-10 10:04:00");
}

#[test]
fn test_compose_repeated_field_needs_one_value() {
    let result = compose("{a:3s}/{a}", &fields(&[("a", Value::from("ab"))])).unwrap();
    assert_eq!(result, "ab /ab");
}

#[test]
fn test_compose_ignores_extra_values() {
    let mut values = hrpt_fields();
    values.insert("unused".to_string(), Value::Int(1));
    assert_eq!(hrpt_parser().compose(&values).unwrap(), HRPT_FILENAME);
}

#[test]
fn test_compose_escaped_braces() {
    let result = compose("{{{name}}}", &fields(&[("name", Value::from("v"))])).unwrap();
    assert_eq!(result, "{v}");
}

#[test]
fn test_compose_datetime_directive() {
    let values = fields(&[("t", Value::DateTime(datetime(2018, 9, 16, 9, 5, 39)))]);
    assert_eq!(
        compose("{t:%Y%m%dT%H%M%S}", &values).unwrap(),
        "20180916T090539"
    );
}
