//! Integration tests for flattening JSON documents.

use flatjson_config::core::DEFAULT_MAX_DEPTH;
use flatjson_config::error::ParseError;
use flatjson_config::prelude::*;
use std::collections::BTreeMap;

fn entries(map: &FlatMap) -> Vec<(&str, &str)> {
    map.iter().collect()
}

#[test]
fn test_nested_objects_without_arrays() {
    let map = parse(
        r#"{
            "server": {"host": "localhost", "port": 8080},
            "database": {"pool": {"min": 1, "max": 10}},
            "debug": false
        }"#,
    )
    .unwrap();

    assert_eq!(
        entries(&map),
        vec![
            ("database:pool:max", "10"),
            ("database:pool:min", "1"),
            ("debug", "false"),
            ("server:host", "localhost"),
            ("server:port", "8080"),
        ]
    );
}

#[test]
fn test_array_of_booleans() {
    let map = parse(r#"{"a":[true,false]}"#).unwrap();
    assert_eq!(entries(&map), vec![("a:0", "true"), ("a:1", "false")]);
}

#[test]
fn test_mixed_object_and_array() {
    let map = parse(r#"{"a":{"b":1,"c":[true,false]}}"#).unwrap();
    assert_eq!(
        entries(&map),
        vec![("a:b", "1"), ("a:c:0", "true"), ("a:c:1", "false")]
    );
}

#[test]
fn test_case_insensitive_collision_at_root() {
    let err = parse(r#"{"a":1,"A":2}"#).unwrap_err();
    assert_eq!(err, ParseError::DuplicateKey { path: "a".to_string() });
}

#[test]
fn test_repeated_property_name_is_a_collision() {
    let err = parse(r#"{"server": {"port": 1, "port": 2}}"#).unwrap_err();
    assert_eq!(err.path(), "server:port");
    assert!(matches!(err, ParseError::DuplicateKey { .. }));
}

#[test]
fn test_nested_collision_across_casing() {
    let err = parse(r#"{"Logging": {"Level": "info"}, "logging": {"level": "debug"}}"#)
        .unwrap_err();
    assert_eq!(err, ParseError::duplicate_key("Logging:Level"));
}

#[test]
fn test_empty_object() {
    let map = parse("{}").unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_bare_scalar_root_is_rejected() {
    for input in ["1", "\"value\"", "false", "null"] {
        let err = parse(input).unwrap_err();
        match err {
            ParseError::Format { path, .. } => assert_eq!(path, ""),
            other => panic!("unexpected error for {input}: {other:?}"),
        }
    }
}

#[test]
fn test_array_root() {
    let map = parse(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
    assert_eq!(entries(&map), vec![("0:id", "1"), ("1:id", "2")]);
}

#[test]
fn test_scalar_rendering() {
    let map = parse(
        r#"{
            "int": -17,
            "big": 18446744073709551615,
            "huge": 123456789012345678901234567890,
            "negzero": -0,
            "one": 1.0,
            "float": 0.5,
            "exp": 1.5e10,
            "yes": true,
            "no": false,
            "nothing": null,
            "text": "a \"quoted\" é value",
            "empty": ""
        }"#,
    )
    .unwrap();

    assert_eq!(map.get("int"), Some("-17"));
    assert_eq!(map.get("big"), Some("18446744073709551615"));
    assert_eq!(map.get("huge"), Some("123456789012345678901234567890"));
    assert_eq!(map.get("negzero"), Some("-0"));
    assert_eq!(map.get("one"), Some("1.0"));
    assert_eq!(map.get("float"), Some("0.5"));
    assert_eq!(map.get("exp"), Some("1.5e10"));
    assert_eq!(map.get("yes"), Some("true"));
    assert_eq!(map.get("no"), Some("false"));
    assert_eq!(map.get("nothing"), Some("null"));
    assert_eq!(map.get("text"), Some("a \"quoted\" \u{e9} value"));
    assert_eq!(map.get("empty"), Some(""));
}

#[test]
fn test_null_rendered_empty() {
    let parser =
        JsonConfigParser::with_options(ParserOptions::default().with_null_value(NullValue::Empty));
    let map = parser.parse(r#"{"a": null, "b": ""}"#).unwrap();
    assert_eq!(map.get("a"), Some(""));
    assert_eq!(map.get("b"), Some(""));
}

#[test]
fn test_syntax_error_reports_position() {
    let err = parse("{\n  \"server\": {\n    \"port\": 80,,\n  }\n}").unwrap_err();
    match err {
        ParseError::Format { line, column, .. } => {
            assert_eq!(line, Some(3));
            assert!(column.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let message = err_message("{\"a\": }");
    assert!(message.starts_with("Invalid JSON: expected value. Line 1 position "));
    assert!(!message.contains("Path"));
}

fn err_message(input: &str) -> String {
    parse(input).unwrap_err().to_string()
}

#[test]
fn test_depth_limit() {
    let parser = JsonConfigParser::with_options(ParserOptions::default().with_max_depth(3));

    assert!(parser.parse(r#"{"a": {"b": {"c": 1}}}"#).is_ok());

    let err = parser.parse(r#"{"a": {"b": {"c": {"d": 1}}}}"#).unwrap_err();
    assert!(matches!(err, ParseError::Format { .. }));
    assert_eq!(err.path(), "a:b:c:d");
}

#[test]
fn test_default_depth_limit_reports_path() {
    let depth = DEFAULT_MAX_DEPTH + 10;
    let mut document = String::from("1");
    for i in (0..depth).rev() {
        document = format!(r#"{{"l{i}": {document}}}"#);
    }

    let err = parse(&document).unwrap_err();
    let ParseError::Format { message, path, .. } = err else {
        panic!("expected a format error");
    };
    assert!(message.contains("maximum nesting depth"));
    assert_eq!(path.split(':').count(), DEFAULT_MAX_DEPTH + 1);
    assert!(path.ends_with(&format!("l{DEFAULT_MAX_DEPTH}")));
}

#[test]
fn test_idempotent() {
    let document = r#"{"z": [1, {"y": null}], "a": {"B": "x", "c": 2.25}}"#;

    let first = parse(document).unwrap().into_btree_map();
    let second = parse(document).unwrap().into_btree_map();
    assert_eq!(first, second);
}

#[test]
fn test_output_order_is_key_sorted_ignoring_case() {
    let map = parse(r#"{"b": 1, "C": 2, "a": 3}"#).unwrap();
    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, vec!["a", "b", "C"]);
}

#[test]
fn test_serializes_as_flat_object() {
    let map = parse(r#"{"a": {"b": [1, "two"]}}"#).unwrap();
    let json: BTreeMap<String, String> =
        serde_json::from_str(&serde_json::to_string(&map).unwrap()).unwrap();

    assert_eq!(json.get("a:b:0").map(String::as_str), Some("1"));
    assert_eq!(json.get("a:b:1").map(String::as_str), Some("two"));
}

#[test]
fn test_parser_is_shared_across_threads() {
    let parser = std::sync::Arc::new(JsonConfigParser::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = parser.clone();
            std::thread::spawn(move || {
                let document = format!(r#"{{"worker": {{"id": {i}, "tags": ["t{i}"]}}}}"#);
                parser.parse(&document).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let map = handle.join().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("worker:id"), Some(i.to_string().as_str()));
    }
}
