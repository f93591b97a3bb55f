//! Serializer conformance tests.
//!
//! Exercises compact and indented output, the string escaping policy, and
//! the parse/serialize round-trip properties.

use jsontree::{indented, parse, serialize, Decimal, Format, Object, Value};

fn dec(text: &str) -> Value {
    Value::Decimal(Decimal::new(text).unwrap())
}

fn object(pairs: &[(&str, Value)]) -> Value {
    let mut map = Object::new();
    for (key, value) in pairs {
        map.insert((*key).to_string(), value.clone());
    }
    Value::Object(map)
}

// ============================================================================
// Compact output
// ============================================================================

#[test]
fn compact_has_no_inter_token_whitespace() {
    let value = object(&[
        ("a", Value::Int(1)),
        ("b", Value::Array(vec![Value::Int(2), Value::Int(3)])),
    ]);
    assert_eq!(serialize(&value), r#"{"a":1,"b":[2,3]}"#);
}

#[test]
fn null_serializes_everywhere() {
    assert_eq!(serialize(&Value::Null), "null");
    assert_eq!(
        serialize(&Value::Array(vec![Value::Null])),
        "[null]"
    );
    assert_eq!(serialize(&object(&[("a", Value::Null)])), r#"{"a":null}"#);
}

#[test]
fn members_emit_in_insertion_order() {
    let text = r#"{"b":1,"a":2}"#;
    assert_eq!(serialize(&parse(text).unwrap()), text);

    let reordered = r#"{"a":2,"b":1}"#;
    assert_eq!(serialize(&parse(reordered).unwrap()), reordered);
}

#[test]
fn decimal_literals_survive_verbatim() {
    for text in ["1.0", "1.500e3", "-0.25", "9223372036854775808", "1E+2"] {
        assert_eq!(serialize(&parse(text).unwrap()), text, "literal {text:?}");
    }
}

// ============================================================================
// Indented output
// ============================================================================

#[test]
fn indented_one_member_per_line() {
    let value = object(&[
        ("a", Value::Int(1)),
        ("b", Value::Array(vec![Value::Int(2)])),
    ]);
    let expected = "{\n  \"a\": 1,\n  \"b\": [\n    2\n  ]\n}";
    assert_eq!(indented(&value, &Format::default()), expected);
}

#[test]
fn indented_respects_custom_options() {
    let value = Value::Array(vec![Value::Int(1), Value::Int(2)]);
    let options = Format {
        indent: 4,
        line_separator: "\r\n".to_string(),
        trailing_newline: true,
    };
    assert_eq!(
        indented(&value, &options),
        "[\r\n    1,\r\n    2\r\n]\r\n"
    );
}

#[test]
fn indented_output_reparses_to_same_tree() {
    let value = parse(r#"{"a":[1,{"b":[true,null]}],"c":"text"}"#).unwrap();
    let pretty = indented(&value, &Format::default());
    assert_eq!(parse(&pretty).unwrap(), value);
}

// ============================================================================
// Escaping policy
// ============================================================================

#[test]
fn output_is_ascii_safe() {
    let value = Value::from("caf\u{E9} \u{2014} \u{1F600}");
    let text = serialize(&value);
    assert!(text.is_ascii(), "expected ASCII-safe output, got {text:?}");
    assert_eq!(text, "\"caf\\u00e9 \\u2014 \\ud83d\\ude00\"");
}

#[test]
fn string_escape_round_trip() {
    let original = Value::from("a\"b\\c\u{2014}");
    let reparsed = parse(&serialize(&original)).unwrap();
    assert_eq!(reparsed, original);
    assert_eq!(reparsed.as_str(), Some("a\"b\\c\u{2014}"));
}

#[test]
fn control_characters_round_trip() {
    let original = Value::from("\u{08}\u{0C}\n\r\t\u{01}\u{1F}");
    assert_eq!(parse(&serialize(&original)).unwrap(), original);
}

#[test]
fn keys_are_escaped_like_values() {
    let value = object(&[("a\"b", Value::Int(1))]);
    assert_eq!(serialize(&value), r#"{"a\"b":1}"#);
    assert_eq!(parse(r#"{"a\"b":1}"#).unwrap(), value);
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn tree_round_trip_compact() {
    let mut inner = Object::new();
    inner.insert("deep".to_string(), Value::Bool(false));
    let value = object(&[
        ("name", Value::from("widget")),
        ("count", Value::Int(3)),
        ("big", Value::Long(1 << 40)),
        ("ratio", dec("0.5")),
        ("tags", Value::Array(vec![Value::from("x"), Value::from("y")])),
        ("nested", Value::Object(inner)),
        ("none", Value::Null),
    ]);
    assert_eq!(parse(&serialize(&value)).unwrap(), value);
}

#[test]
fn parse_serialize_parse_is_stable() {
    let first = parse(r#"{"b":1,"a":[1.5,"x",null,true]}"#).unwrap();
    let text = serialize(&first);
    let second = parse(&text).unwrap();
    assert_eq!(first, second);
    assert_eq!(serialize(&second), text);
}

#[test]
fn float_values_round_trip_through_text() {
    for value in [
        Value::Double(1.5),
        Value::Double(-0.001),
        Value::Float(0.25),
        Value::Double(5e20),
    ] {
        let reparsed = parse(&serialize(&value)).unwrap();
        assert_eq!(reparsed, value, "value {value:?}");
    }
}

#[test]
fn non_finite_floats_serialize_as_null() {
    assert_eq!(serialize(&Value::Double(f64::NAN)), "null");
    assert_eq!(serialize(&Value::Double(f64::NEG_INFINITY)), "null");
    assert_eq!(serialize(&Value::Float(f32::INFINITY)), "null");
}
