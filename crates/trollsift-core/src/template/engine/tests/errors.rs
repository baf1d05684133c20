//! Error handling tests for template engine

use super::helpers::{fields, hrpt_fields, hrpt_parser};
use super::*;
use crate::template::value::Value;

#[test]
fn test_error_literal_mismatch() {
    let result = hrpt_parser().parse("/otherdir/x/hrpt_noaa16_20140210_1004_69022.l1b");
    match result {
        Err(TemplateError::NoMatch { message, position }) => {
            assert_eq!(position, 0);
            assert!(message.contains("/somedir/"));
        }
        other => panic!("Expected NoMatch error, got {:?}", other),
    }
}

#[test]
fn test_error_next_literal_missing_after_greedy_field() {
    let result = parse("{name}.txt", "file.csv");
    assert!(matches!(result, Err(TemplateError::NoMatch { .. })));
}

#[test]
fn test_error_input_too_short_for_fixed_width() {
    let result = parse("{a:4s}", "abc");
    match result {
        Err(TemplateError::NoMatch { message, position }) => {
            assert_eq!(position, 0);
            assert!(message.contains("needs 4 characters"));
        }
        other => panic!("Expected NoMatch error, got {:?}", other),
    }
}

#[test]
fn test_error_adjacent_greedy_fields() {
    let result = parse("{a}{b}", "xy");
    assert_eq!(
        result.unwrap_err(),
        TemplateError::AmbiguousField {
            field: "a".to_string()
        }
    );
}

#[test]
fn test_greedy_then_fixed_field_is_ambiguous() {
    let result = parse("{a}{b:2s}.x", "xyz.x");
    assert!(matches!(result, Err(TemplateError::AmbiguousField { field }) if field == "a"));
}

#[test]
fn test_fixed_then_greedy_field_is_fine() {
    let result = parse("{a:2s}{b}", "xyz").unwrap();
    assert_eq!(result["b"], Value::from("z"));
}

#[test]
fn test_error_bad_integer() {
    let result = hrpt_parser().parse("/somedir/otherdir/hrpt_noaa16_20140210_1004_6902x.l1b");
    match result {
        Err(TemplateError::Conversion { field, value, .. }) => {
            assert_eq!(field, "orbit");
            assert_eq!(value, "6902x");
        }
        other => panic!("Expected Conversion error, got {:?}", other),
    }
}

#[test]
fn test_error_bad_datetime() {
    let result = hrpt_parser().parse("/somedir/otherdir/hrpt_noaa16_2014021x_1004_69022.l1b");
    assert!(matches!(
        result,
        Err(TemplateError::Conversion { field, .. }) if field == "time"
    ));
}

#[test]
fn test_error_missing_key() {
    let mut values = hrpt_fields();
    values.remove("orbit");
    assert_eq!(
        hrpt_parser().compose(&values).unwrap_err(),
        TemplateError::MissingKey {
            key: "orbit".to_string()
        }
    );
}

#[test]
fn test_error_compose_type_mismatch() {
    let result = compose("{orbit:05d}", &fields(&[("orbit", Value::from("abc"))]));
    assert!(matches!(result, Err(TemplateError::Conversion { .. })));
}

#[test]
fn test_error_malformed_template() {
    assert!(matches!(
        Parser::new("{name:"),
        Err(TemplateError::Syntax { .. })
    ));
    assert!(matches!(
        "{name:".parse::<Parser>(),
        Err(TemplateError::Syntax { .. })
    ));
}

#[test]
fn test_error_display() {
    let err = TemplateError::MissingKey {
        key: "orbit".to_string(),
    };
    assert_eq!(err.to_string(), "Missing value for field 'orbit'");
}

#[test]
fn test_error_mismatch_classification() {
    assert!(TemplateError::no_match("x", 0).is_mismatch());
    assert!(TemplateError::conversion("f", "v", "r").is_mismatch());
    assert!(TemplateError::AmbiguousField {
        field: "a".to_string()
    }
    .is_mismatch());
    assert!(!TemplateError::syntax("x", 0).is_mismatch());
    assert!(!TemplateError::MissingKey {
        key: "a".to_string()
    }
    .is_mismatch());
}
