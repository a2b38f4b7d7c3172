//! End-to-end tests for the bundled JSON grammar
#![cfg(feature = "json")]

use pcomb::json::{list, object, value};
use pcomb::{ErrorKind, Value, parse};

fn pair(key: &str, value: Value) -> Value {
    Value::Tuple(vec![Value::from(key), value])
}

#[test]
fn test_object_of_strings() {
    let parsed = parse(&object(), r#"{"a": "b", "c": "d"}"#).unwrap();

    assert_eq!(
        parsed.value,
        Value::List(vec![pair("a", "b".into()), pair("c", "d".into())])
    );
    assert_eq!(parsed.tag.as_str(), "object");
    assert!(parsed.cursor.eos());
}

#[test]
fn test_object_keeps_source_order() {
    let parsed = parse(&object(), r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = parsed
        .value
        .as_list()
        .unwrap()
        .iter()
        .map(|pair| pair.as_tuple().unwrap()[0].as_str().unwrap())
        .collect();

    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_empty_object() {
    let parsed = parse(&object(), "{}").unwrap();
    assert_eq!(parsed.value, Value::List(vec![]));
}

#[test]
fn test_mixed_values() {
    let input = r#"{"name": "pcomb", "version": 0.1, "stars": 42, "stable": false, "parent": null}"#;
    let parsed = parse(&object(), input).unwrap();

    assert_eq!(
        parsed.value,
        Value::List(vec![
            pair("name", "pcomb".into()),
            pair("version", Value::Float(0.1)),
            pair("stars", Value::Int(42)),
            pair("stable", Value::Bool(false)),
            pair("parent", Value::None),
        ])
    );
}

#[test]
fn test_nested_objects_and_lists() {
    let input = r#"{"outer": {"inner": [1, 2, {"deep": True}]}, "empty": []}"#;
    let parsed = parse(&value(), input).unwrap();

    let deep = Value::List(vec![pair("deep", Value::Bool(true))]);
    let inner = Value::List(vec![Value::Int(1), Value::Int(2), deep]);
    assert_eq!(
        parsed.value,
        Value::List(vec![
            pair("outer", Value::List(vec![pair("inner", inner)])),
            pair("empty", Value::List(vec![])),
        ])
    );
    assert!(parsed.cursor.eos());
}

#[test]
fn test_list_of_lists() {
    let parsed = parse(&list(), "[[1], [], [2.5, \"x\"]]").unwrap();

    assert_eq!(
        parsed.value,
        Value::List(vec![
            Value::List(vec![Value::Int(1)]),
            Value::List(vec![]),
            Value::List(vec![Value::Float(2.5), "x".into()]),
        ])
    );
}

#[test]
fn test_whitespace_inside_brackets() {
    let parsed = parse(&list(), "[  1 ,2 ,  3  ]").unwrap();

    assert_eq!(
        parsed.value,
        Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

#[test]
fn test_missing_colon_reports_location() {
    let error = parse(&object(), r#"{"a" "b"}"#).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::PatternMismatch);
    assert!(error.to_string().contains("expected '}'"));
    assert_eq!(error.position(), 1);
}

#[test]
fn test_unclosed_list() {
    let error = parse(&list(), "[1, 2").unwrap_err();

    assert!(error.to_string().contains("found end of input"));
    assert_eq!(error.position(), 5);
}

#[test]
fn test_error_report_points_at_line() {
    let error = parse(&object(), "{\"a\": \"x\ny\", \"b\" 1}").unwrap_err();
    let report = error.report();

    assert!(report.contains("line 2"));
    assert!(report.contains("  > 2 |"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_parsed_value() {
    let parsed = parse(&object(), r#"{"a": [1, 2.5, true, null]}"#).unwrap();
    let json = serde_json::to_string(&parsed.value).unwrap();

    assert_eq!(json, r#"[["a",[1,2.5,true,null]]]"#);
    assert_eq!(serde_json::to_string(&parsed.tag).unwrap(), r#""object""#);
}
