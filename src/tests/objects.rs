use super::*;

#[test]
fn unquoted_keys_and_single_quotes() {
    let v = repaired_value("{'a':2, b: 'x'}");
    assert_eq!(v, serde_json::json!({"a":2, "b":"x"}));
}

#[test]
fn missing_colon_and_comma() {
    let v = repaired_value("{\n  'a' 2  'b' 3\n}");
    assert_eq!(v["a"], 2);
    assert_eq!(v["b"], 3);
}

#[test]
fn bare_key_becomes_true() {
    let v = repaired_value("{foo}");
    assert_eq!(v, serde_json::json!({"foo": true}));
}

#[test]
fn bare_key_with_sibling_members() {
    let v = repaired_value(r#"{"a": 1, flag}"#);
    assert_eq!(v, serde_json::json!({"a": 1, "flag": true}));
}

#[test]
fn bare_literal_key_closes_the_object() {
    assert_eq!(crate::repair("{true}"), "{}");
}

#[test]
fn stray_colon_and_value_are_dropped() {
    let v = repaired_value(r#"{@: 1, "a": 2}"#);
    assert_eq!(v, serde_json::json!({"a": 2}));
}

#[test]
fn value_reparsed_as_key_when_colon_follows() {
    let v = repaired_value(r#"{"a" "b": 2}"#);
    assert_eq!(v, serde_json::json!({"b": 2}));
}

#[test]
fn duplicate_key_splits_into_siblings_at_top_level() {
    // the later sibling wins through the same-kind collapse
    assert_eq!(crate::repair("{a: 1, a: 2}"), r#"{"a":2}"#);
}

#[test]
fn duplicate_key_splits_inside_array() {
    let v = repaired_value(r#"[{"a": 1, "a": 2}]"#);
    assert_eq!(v, serde_json::json!([{"a": 1}, {"a": 2}]));
}

#[test]
fn nested_duplicate_key_overwrites() {
    let v = repaired_value(r#"{"x": {a: 1, a: 2},}"#);
    assert_eq!(v, serde_json::json!({"x": {"a": 2}}));
}

#[test]
fn dangling_array_merges_into_previous_value() {
    let v = repaired_value(r#"{"a": [1] [2]}"#);
    assert_eq!(v, serde_json::json!({"a": [1, 2]}));
}

#[test]
fn dangling_array_unwraps_single_nested_array() {
    let v = repaired_value(r#"{"a": [1] [[2, 3]]}"#);
    assert_eq!(v, serde_json::json!({"a": [1, 2, 3]}));
}

#[test]
fn dangling_array_merge_fires_after_comment() {
    let v = repaired_value(r#"{"a": [1] /* noise */ [2]}"#);
    assert_eq!(v, serde_json::json!({"a": [1, 2]}));
}

#[test]
fn bracketed_key_uses_first_element() {
    let v = repaired_value(r#"{["k"]: 1}"#);
    assert_eq!(v, serde_json::json!({"k": 1}));
}

#[test]
fn trailing_commas_and_stray_separators() {
    let v = repaired_value("{,, 'a': 1, 'b': 2,}");
    assert_eq!(v, serde_json::json!({"a": 1, "b": 2}));
}

#[test]
fn doubled_comma_after_number_reads_as_decimal() {
    // the first comma extends the number, the second is a separator
    let v = repaired_value("{'a': 1,, 'b': 2}");
    assert_eq!(v["a"], serde_json::json!(1.0));
    assert_eq!(v["b"], 2);
}

#[test]
fn truncated_object_closes_at_eof() {
    let v = repaired_value(r#"{"a": 1, "b""#);
    assert_eq!(v["a"], 1);
}

#[test]
fn empty_value_with_colon_is_empty_string() {
    let v = repaired_value(r#"{"a":}"#);
    assert_eq!(v, serde_json::json!({"a": ""}));
}

#[test]
fn unicode_keys_and_values() {
    let v = repaired_value("{ 名: '值' }");
    assert_eq!(v, serde_json::json!({"名": "值"}));
}

#[test]
fn object_key_number_stays_string() {
    let v = repaired_value("{123: 'x',}");
    assert_eq!(v, serde_json::json!({"123": "x"}));
}
