use super::*;

#[test]
fn single_and_smart_quotes_normalize() {
    assert_eq!(crate::repair("{'a': 'b'}"), r#"{"a":"b"}"#);
    assert_eq!(
        crate::repair("{\u{201C}a\u{201D}: \u{201C}b\u{201D}}"),
        r#"{"a":"b"}"#
    );
}

#[test]
fn standard_escapes_decode() {
    let v = repaired_value(r#"{a: "x\ty\nz\rw\bq"}"#);
    assert_eq!(v["a"], "x\ty\nz\rw\u{0008}q");
}

#[test]
fn unicode_and_hex_escapes_decode() {
    let v = repaired_value(r#"{a: "A\x42"}"#);
    assert_eq!(v["a"], "AB");
}

#[test]
fn invalid_hex_escape_is_preserved() {
    let v = repaired_value(r#"{a: "\uZZZZ"}"#);
    assert_eq!(v["a"], "\\uZZZZ");
}

#[test]
fn escaped_foreign_quote_is_content() {
    // a backslashed quote of another style never closes the string
    let v = repaired_value(r#"{a: "it\'s"}"#);
    assert_eq!(v["a"], "it's");
}

#[test]
fn unknown_escape_keeps_backslash() {
    let v = repaired_value(r#"{a: "v\qw"}"#);
    assert_eq!(v["a"], "v\\qw");
}

#[test]
fn unterminated_string_collects_rest() {
    assert_eq!(crate::repair(r#"{"a": "broken"#), r#"{"a":"broken"}"#);
}

#[test]
fn doubled_quotes_unwrap() {
    assert_eq!(crate::repair(r#"{"a": ""yes""}"#), r#"{"a":"yes"}"#);
}

#[test]
fn empty_doubled_quotes_before_member_end() {
    assert_eq!(crate::repair(r#"{"a": "", "b": 1,}"#), r#"{"a":"","b":1}"#);
}

#[test]
fn missing_closing_quote_before_next_key() {
    let v = repaired_value(r#"{"a": "value, "b": "x"}"#);
    assert_eq!(v, serde_json::json!({"a": "value", "b": "x"}));
}

#[test]
fn comma_inside_string_is_kept_when_no_key_follows() {
    let v = repaired_value(r#"{"a": "val, ue"}"#);
    assert_eq!(v["a"], "val, ue");
}

#[test]
fn unquoted_value_stops_at_next_key() {
    let v = repaired_value(r#"{"a": lorem "b": 2}"#);
    assert_eq!(v, serde_json::json!({"a": "lorem", "b": 2}));
}

#[test]
fn unquoted_value_keeps_internal_quotes() {
    let v = repaired_value(r#"{"a": lorem "ipsum" sic, "b": 2}"#);
    assert_eq!(v, serde_json::json!({"a": "lorem \"ipsum\" sic", "b": 2}));
}

#[test]
fn key_with_missing_closing_quote() {
    let v = repaired_value(r#"{"key: 1}"#);
    assert_eq!(v, serde_json::json!({"key": 1}));
}

#[test]
fn whitespace_trim_on_unquoted_strings() {
    let v = repaired_value("{a: hello  ,b: 1}");
    assert_eq!(v["a"], "hello");
}

#[test]
fn control_characters_escape_on_output() {
    let out = crate::repair("{a: 'line\none'}");
    assert_eq!(out, r#"{"a":"line\none"}"#);
}

#[test]
fn ensure_ascii_escapes_non_ascii() {
    let mut o = opts();
    o.ensure_ascii = true;
    let out = crate::repair_with_options("{a: '你好', b: '😀'}", &o);
    assert!(out.is_ascii());
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["a"], "你好");
    assert_eq!(v["b"], "😀");
}
