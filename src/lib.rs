//! Repair malformed JSON-like text into well-formed JSON.
//!
//! Large language models and careless hands produce almost-JSON: missing
//! quotes, stray commas and colons, smart quotation marks, comments,
//! truncated structures, several documents glued together, prose around the
//! payload. This crate parses such input leniently and returns a best-effort
//! value — it never raises a parse error. Truly unrecognizable input yields
//! an empty result.
//!
//! ```
//! let fixed = jsonmend::repair("{name: 'Alice', age: 30,}");
//! assert_eq!(fixed, r#"{"name":"Alice","age":30}"#);
//! ```

mod classify;
mod emit;
pub mod error;
pub mod options;
mod parser;
mod repair;
pub mod value;

pub use error::{RepairError, RepairErrorKind};
pub use options::Options;
pub use repair::RepairLogEntry;
pub use value::{Map, Value};

use std::io::Write;

/// Repair `input` and return canonical JSON text. An empty string means the
/// parser found no value at all.
pub fn repair(input: &str) -> String {
    repair::repair_to_string(input, &Options::default())
}

/// Like [`repair`], with explicit options.
pub fn repair_with_options(input: &str, opts: &Options) -> String {
    repair::repair_to_string(input, opts)
}

/// Repair `input` and return the value tree instead of text. `None` means
/// the parser found no value at all.
pub fn repair_to_value(input: &str) -> Option<Value> {
    repair::repair_to_value(input, &Options::default()).0
}

/// Like [`repair_to_value`], with explicit options.
pub fn repair_to_value_with_options(input: &str, opts: &Options) -> Option<Value> {
    repair::repair_to_value(input, opts).0
}

/// Repair `input` and write the serialized result into `writer`. Nothing is
/// written when the parser found no value. The parse itself cannot fail;
/// the only error source is the sink.
pub fn repair_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), RepairError> {
    repair::repair_to_writer(input, opts, writer)
}

/// Repair `input` and also return the list of heuristic repairs applied.
pub fn repair_with_log(input: &str, opts: &Options) -> (String, Vec<RepairLogEntry>) {
    repair::repair_to_string_with_log(input, opts)
}

#[cfg(test)]
mod tests;
