use super::*;

#[test]
fn all_comment_styles_are_stripped() {
    let v = repaired_value("{/* block */\n // line\n # hash\n 'a': 1}");
    assert_eq!(v, serde_json::json!({"a": 1}));
}

#[test]
fn comment_before_document() {
    assert_eq!(crate::repair("# heading\n[1]"), "[1]");
}

#[test]
fn line_comment_terminated_by_array_close() {
    // no newline: the closing bracket of the enclosing array ends the comment
    assert_eq!(crate::repair("[1, 2 // trailing]"), "[1,2]");
}

#[test]
fn comment_between_key_and_colon() {
    let v = repaired_value("{'a' /*c*/: 1}");
    assert_eq!(v, serde_json::json!({"a": 1}));
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    assert_eq!(crate::repair("{\"a\": 1} /* dangling"), r#"{"a":1}"#);
}

#[test]
fn stray_slash_does_not_hang() {
    let v = repaired_value("[1, / 2]");
    assert_eq!(v, serde_json::json!([1, 2]));
}

#[test]
fn comment_between_value_and_comma() {
    let v = repaired_value("[1 /* a */, 2 /* b */]");
    assert_eq!(v, serde_json::json!([1, 2]));
}
