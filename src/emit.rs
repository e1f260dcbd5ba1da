use crate::error::RepairError;
use crate::value::Value;
use std::io::Write;

pub type MendResult<T> = Result<T, RepairError>;

pub trait Emitter {
    fn emit_str(&mut self, s: &str) -> MendResult<()>;
    fn emit_char(&mut self, c: char) -> MendResult<()> {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.emit_str(s)
    }
}

pub struct StringEmitter<'a> {
    out: &'a mut String,
}

impl<'a> StringEmitter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self { out }
    }
}

impl<'a> Emitter for StringEmitter<'a> {
    fn emit_str(&mut self, s: &str) -> MendResult<()> {
        self.out.push_str(s);
        Ok(())
    }
}

pub struct WriterEmitter<'a, W: Write> {
    w: &'a mut W,
    buf: Vec<u8>,
}

impl<'a, W: Write> WriterEmitter<'a, W> {
    pub fn with_capacity(w: &'a mut W, cap: usize) -> Self {
        Self {
            w,
            buf: Vec::with_capacity(cap),
        }
    }
    pub fn flush_all(&mut self) -> MendResult<()> {
        if !self.buf.is_empty() {
            self.w.write_all(&self.buf).map_err(RepairError::io)?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl<'a, W: Write> Emitter for WriterEmitter<'a, W> {
    fn emit_str(&mut self, s: &str) -> MendResult<()> {
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Serialize a value as canonical minified JSON.
pub(crate) fn write_value<E: Emitter>(value: &Value, ensure_ascii: bool, out: &mut E) -> MendResult<()> {
    match value {
        Value::Null => out.emit_str("null"),
        Value::Bool(b) => out.emit_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.emit_str(&i.to_string()),
        Value::Float(f) => match serde_json::Number::from_f64(*f) {
            // from_f64 refuses NaN and infinities; strict JSON has no spelling
            // for them, so they degrade to null.
            Some(n) => out.emit_str(&n.to_string()),
            None => out.emit_str("null"),
        },
        Value::Str(s) => write_json_string(out, s, ensure_ascii),
        Value::Arr(items) => {
            out.emit_char('[')?;
            let mut first = true;
            for item in items {
                if !first {
                    out.emit_char(',')?;
                }
                first = false;
                write_value(item, ensure_ascii, out)?;
            }
            out.emit_char(']')
        }
        Value::Obj(members) => {
            out.emit_char('{')?;
            let mut first = true;
            for (key, val) in members {
                if !first {
                    out.emit_char(',')?;
                }
                first = false;
                write_json_string(out, key, ensure_ascii)?;
                out.emit_char(':')?;
                write_value(val, ensure_ascii, out)?;
            }
            out.emit_char('}')
        }
    }
}

pub(crate) fn to_string_value(value: &Value, ensure_ascii: bool) -> String {
    let mut out = String::new();
    let mut se = StringEmitter::new(&mut out);
    write_value(value, ensure_ascii, &mut se).expect("string emitter cannot fail");
    out
}

/// Emit a JSON string literal with standard escapes.
pub(crate) fn write_json_string<E: Emitter>(out: &mut E, s: &str, ensure_ascii: bool) -> MendResult<()> {
    // Fast path: ASCII-only with nothing requiring escapes goes out as one slice.
    if s.is_ascii() {
        let bytes = s.as_bytes();
        let mut needs_escape = false;
        for &b in bytes {
            if b == b'"' || b == b'\\' || b <= 0x1F {
                needs_escape = true;
                break;
            }
        }
        if !needs_escape {
            out.emit_char('"')?;
            out.emit_str(s)?;
            return out.emit_char('"');
        }
    }

    // General path: stream out safe runs and emit escapes only when needed.
    out.emit_char('"')?;
    let mut start = 0usize;
    for (i, ch) in s.char_indices() {
        let code = ch as u32;
        let needs_escape = ch == '"' || ch == '\\' || code <= 0x1F || (ensure_ascii && code > 0x7F);
        if !needs_escape {
            continue;
        }
        if i > start {
            out.emit_str(&s[start..i])?;
        }
        match ch {
            '"' => out.emit_str("\\\"")?,
            '\\' => out.emit_str("\\\\")?,
            '\u{08}' => out.emit_str("\\b")?,
            '\u{0C}' => out.emit_str("\\f")?,
            '\n' => out.emit_str("\\n")?,
            '\r' => out.emit_str("\\r")?,
            '\t' => out.emit_str("\\t")?,
            _ if code <= 0x1F => {
                let esc = format!("\\u{:04X}", code);
                out.emit_str(&esc)?;
            }
            _ => {
                // ensure_ascii && non-ASCII
                debug_assert!(ensure_ascii && code > 0x7F);
                if code <= 0xFFFF {
                    let esc = format!("\\u{:04X}", code);
                    out.emit_str(&esc)?;
                } else {
                    let u = code - 0x1_0000;
                    let hi = 0xD800 + ((u >> 10) & 0x3FF);
                    let lo = 0xDC00 + (u & 0x3FF);
                    let esc = format!("\\u{:04X}\\u{:04X}", hi, lo);
                    out.emit_str(&esc)?;
                }
            }
        }
        start = i + ch.len_utf8();
    }
    if start < s.len() {
        out.emit_str(&s[start..])?;
    }
    out.emit_char('"')
}
