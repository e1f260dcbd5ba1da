use crate::emit::{to_string_value, write_value, WriterEmitter};
use crate::error::RepairError;
use crate::options::Options;
use crate::parser::Parser;
use crate::value::{Map, Value};
use num_bigint::BigInt;
use std::io::Write;

/// One heuristic repair applied while parsing, with a snippet of the
/// surrounding input for orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
}

pub(crate) fn repair_to_value(input: &str, opts: &Options) -> (Option<Value>, Vec<RepairLogEntry>) {
    // Fast path: input that is already strict JSON needs no heuristics, and
    // taking it keeps repairs of valid documents exactly faithful.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(input) {
        return (Some(from_strict(v)), Vec::new());
    }
    Parser::new(input, opts).parse()
}

pub(crate) fn repair_to_string(input: &str, opts: &Options) -> String {
    let (value, _log) = repair_to_value(input, opts);
    match value {
        Some(v) => to_string_value(&v, opts.ensure_ascii),
        None => String::new(),
    }
}

pub(crate) fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> (String, Vec<RepairLogEntry>) {
    let mut opts = opts.clone();
    opts.logging = true;
    let (value, log) = repair_to_value(input, &opts);
    let out = match value {
        Some(v) => to_string_value(&v, opts.ensure_ascii),
        None => String::new(),
    };
    (out, log)
}

pub(crate) fn repair_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), RepairError> {
    let (value, _log) = repair_to_value(input, opts);
    if let Some(v) = value {
        let mut emitter = WriterEmitter::with_capacity(writer, input.len().saturating_add(8));
        write_value(&v, opts.ensure_ascii, &mut emitter)?;
        emitter.flush_all()?;
    }
    Ok(())
}

/// Convert a strict `serde_json` value into ours. `arbitrary_precision`
/// keeps the raw number text around, so integers of any width survive.
fn from_strict(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Value::Int(BigInt::from(i));
            }
            if let Some(u) = n.as_u64() {
                return Value::Int(BigInt::from(u));
            }
            let raw = n.to_string();
            if !raw.contains(['.', 'e', 'E']) {
                if let Ok(i) = raw.parse::<BigInt>() {
                    return Value::Int(i);
                }
            }
            Value::Float(n.as_f64().unwrap_or(f64::NAN))
        }
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => Value::Arr(items.into_iter().map(from_strict).collect()),
        serde_json::Value::Object(members) => {
            let mut obj = Map::with_capacity(members.len());
            for (k, v) in members {
                obj.insert(k, from_strict(v));
            }
            Value::Obj(obj)
        }
    }
}
