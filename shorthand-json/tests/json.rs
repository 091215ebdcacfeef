use insta::assert_debug_snapshot;

use shorthand_json::{parse, Error, Value};
use shorthand_sequence::{Sequence, SequenceQuery};

#[test]
fn parse_scalars() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), Value::Boolean(true));
    assert_eq!(parse("42").unwrap(), Value::Number(42.0));
    assert_eq!(parse(r#""box""#).unwrap(), Value::String("box".to_string()));
}

#[test]
fn parse_nested_document() {
    let value = parse(r#"{"name":"box","sizes":[1,2],"lid":null}"#).unwrap();
    assert_debug_snapshot!(value, @r###"
    Object(
        [
            (
                "name",
                String(
                    "box",
                ),
            ),
            (
                "sizes",
                Array(
                    [
                        Number(
                            1.0,
                        ),
                        Number(
                            2.0,
                        ),
                    ],
                ),
            ),
            (
                "lid",
                Null,
            ),
        ],
    )
    "###);
}

#[test]
fn parse_rejects_malformed_text() {
    let err = parse("{\"open\":").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
}

#[test]
fn round_trip_preserves_entry_order() {
    let text = r#"{"name":"box","sizes":[1,2,3],"open":true,"lid":null}"#;
    assert_eq!(parse(text).unwrap().to_json_string(), text);
}

#[test]
fn json_array_flows_into_sequence_queries() {
    let seq = parse("[1,2,3,4]").unwrap().into_sequence().unwrap();
    let big = seq.filter(|value| matches!(value, Value::Number(n) if *n > 2.0));
    assert_eq!(
        big.to_vec(),
        vec![Value::Number(3.0), Value::Number(4.0)]
    );
    assert!(seq.all(|value| matches!(value, Value::Number(_))));
}

#[test]
fn into_sequence_refuses_non_arrays() {
    let err = parse(r#"{"a":1}"#).unwrap().into_sequence().unwrap_err();
    assert!(matches!(err, Error::NotAnArray("an object")));
}

#[test]
fn sequence_renders_back_to_a_json_array() {
    let seq: Sequence<Value> = vec![
        Value::Number(1.0),
        Value::String("two".to_string()),
        Value::Boolean(false),
    ]
    .into();
    let value: Value = seq.into();
    assert_eq!(value.to_json_string(), r#"[1,"two",false]"#);
}

#[test]
fn query_results_render_back_out() {
    let seq = parse(r#"["a","",
        "b",""]"#)
        .unwrap()
        .into_sequence()
        .unwrap();
    let non_empty = seq.reject(|value| matches!(value, Value::String(s) if s.is_empty()));
    let value: Value = non_empty.into();
    assert_eq!(value.to_json_string(), r#"["a","b"]"#);
}
