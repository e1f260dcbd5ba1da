use super::*;

#[test]
fn big_integers_are_not_truncated() {
    let big = "12345678901234567890";
    assert_eq!(crate::repair(big), big);
    let huge = "123456789012345678901234567890";
    assert_eq!(crate::repair(&format!("{{n: {}}}", huge)), format!("{{\"n\":{}}}", huge));
}

#[test]
fn decimal_comma_in_object_value() {
    assert_eq!(crate::repair("{n: 3,14}"), r#"{"n":3.14}"#);
}

#[test]
fn comma_separates_elements_in_arrays() {
    assert_eq!(crate::repair("[1,234]"), "[1,234]");
}

#[test]
fn trailing_dot_becomes_float() {
    assert_eq!(crate::repair("{n: 1.}"), r#"{"n":1.0}"#);
}

#[test]
fn leading_dot_becomes_float() {
    assert_eq!(crate::repair("{n: .25}"), r#"{"n":0.25}"#);
}

#[test]
fn incomplete_exponent_falls_back_to_base() {
    assert_eq!(crate::repair("{n: 1e}"), r#"{"n":1}"#);
}

#[test]
fn exponents_parse_as_floats() {
    let v = repaired_value("{n: 2e3,}");
    assert_eq!(v["n"], serde_json::json!(2000.0));
}

#[test]
fn suspicious_tokens_become_strings() {
    assert_eq!(crate::repair("{n: 1/3}"), r#"{"n":"1/3"}"#);
    assert_eq!(crate::repair("{n: 10-20}"), r#"{"n":"10-20"}"#);
    assert_eq!(crate::repair("{n: 1.1.1}"), r#"{"n":"1.1.1"}"#);
}

#[test]
fn number_followed_by_letters_is_a_string() {
    assert_eq!(crate::repair("{n: 2notanumber}"), r#"{"n":"2notanumber"}"#);
}

#[test]
fn exponent_glued_to_letters_is_one_string() {
    // the trailing `e` must not be split off as an incomplete exponent
    assert_eq!(crate::repair("{n: 10efoo}"), r#"{"n":"10efoo"}"#);
    assert_eq!(crate::repair("[10efoo]"), r#"["10efoo"]"#);
}

#[test]
fn stray_quote_after_number_is_dropped() {
    let v = repaired_value(r#"{"n": 123"}"#);
    assert_eq!(v["n"], 123);
}

#[test]
fn negative_numbers() {
    assert_eq!(crate::repair("[-1, -2.5,]"), "[-1,-2.5]");
}
