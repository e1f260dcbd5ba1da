use super::*;

mod comments;
mod numbers;
mod objects;
mod strings_escapes;

fn opts() -> Options {
    Options::default()
}

/// Repair and parse back through a strict parser; panics on unsound output.
fn repaired_value(input: &str) -> serde_json::Value {
    let out = crate::repair(input);
    serde_json::from_str(&out)
        .unwrap_or_else(|e| panic!("unsound repair output {:?} for {:?}: {}", out, input, e))
}
