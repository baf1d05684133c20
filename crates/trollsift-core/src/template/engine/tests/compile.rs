//! Compilation tests

use super::helpers::HRPT_TEMPLATE;
use super::*;

#[test]
fn test_compile_segment_order() {
    let compiled = CompiledTemplate::compile(HRPT_TEMPLATE).unwrap();
    let shape: Vec<String> = compiled
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => format!("'{}'", text),
            Segment::Field(field) => format!("<{}>", field.name),
        })
        .collect();
    assert_eq!(
        shape,
        vec![
            "'/somedir/'",
            "<directory>",
            "'/hrpt_'",
            "<platform>",
            "<platnum>",
            "'_'",
            "<time>",
            "'_'",
            "<orbit>",
            "'.l1b'",
        ]
    );
}

#[test]
fn test_compile_spec_table_only_holds_typed_fields() {
    let compiled = CompiledTemplate::compile(HRPT_TEMPLATE).unwrap();
    let names: Vec<&str> = compiled.specs().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["orbit", "platform", "platnum", "time"]);
    assert_eq!(compiled.spec("orbit").unwrap().raw(), "05d");
    assert!(compiled.spec("directory").is_none());
}

#[test]
fn test_compile_field_widths() {
    let compiled = CompiledTemplate::compile(HRPT_TEMPLATE).unwrap();
    let widths: Vec<(&str, Option<usize>)> = compiled
        .fields()
        .map(|field| (field.name.as_str(), field.width()))
        .collect();
    assert_eq!(
        widths,
        vec![
            ("directory", None),
            ("platform", Some(4)),
            ("platnum", Some(2)),
            ("time", Some(13)),
            ("orbit", Some(5)),
        ]
    );
}

#[test]
fn test_compile_keeps_source() {
    let compiled = CompiledTemplate::compile(HRPT_TEMPLATE).unwrap();
    assert_eq!(compiled.source(), HRPT_TEMPLATE);
}

#[test]
fn test_compile_duplicate_names_listed_once() {
    let compiled = CompiledTemplate::compile("{a}_{b:2s}_{a}").unwrap();
    assert_eq!(compiled.fields().count(), 3);
    assert_eq!(compiled.field_names(), vec!["a", "b"]);
}

#[test]
fn test_compile_bad_spec_reports_field_position() {
    let err = CompiledTemplate::compile("abc_{x:4q}").unwrap_err();
    match err {
        TemplateError::Syntax { position, message } => {
            assert_eq!(position, 4);
            assert!(message.contains("'q'"));
        }
        other => panic!("Expected Syntax error, got {:?}", other),
    }
}

#[test]
fn test_parser_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Parser>();
    assert_send_sync::<CompiledTemplate>();
}
