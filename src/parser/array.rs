use super::context::Context;
use super::{Parsed, Parser};
use crate::classify::{is_string_delimiter, matching_quote};
use crate::value::Value;

impl<'i> Parser<'i> {
    /// Collect elements until `]`, `}` or end of input. The opening `[` has
    /// already been consumed. Loose separators and garbage are skipped, a
    /// trailing `...` is dropped, and a quoted token followed by a colon is
    /// promoted to an object that forgot its braces.
    pub(crate) fn parse_array(&mut self) -> Vec<Value> {
        let mut arr = Vec::new();
        self.context.push(Context::Array);
        loop {
            self.scanner.skip_whitespaces();
            match self.scanner.peek(0) {
                None | Some(']') | Some('}') => break,
                Some('#') | Some('/') => {
                    self.parse_comment();
                    continue;
                }
                _ => {}
            }

            let parsed = match self.scanner.peek(0) {
                _ if self.restart_object => self.parse_json(),
                Some(q) if is_string_delimiter(q) => {
                    // `"key": ...` without braces is an object in disguise
                    let i = self.scanner.skip_to_character(&[matching_quote(q)], 1);
                    let j = self.scanner.skip_whitespaces_at(i + 1);
                    if self.scanner.peek(j) == Some(':') {
                        self.log("array element looks like a braceless object");
                        Parsed::Val(Value::Obj(self.parse_object()))
                    } else {
                        self.parse_string()
                    }
                }
                _ => self.parse_json(),
            };

            match parsed {
                Parsed::Stop => {}
                Parsed::Val(v) => {
                    let strictly_empty = match &v {
                        Value::Str(s) => s.is_empty(),
                        Value::Arr(a) => a.is_empty(),
                        Value::Obj(o) => o.is_empty(),
                        _ => false,
                    };
                    if strictly_empty {
                        // nothing useful parsed; nudge forward unless the
                        // container is about to close
                        if !matches!(self.scanner.peek(0), Some('}') | Some(']')) {
                            self.scanner.getch();
                        }
                    } else if matches!(&v, Value::Str(s) if s == "...")
                        && self.scanner.prev_byte() == Some(b'.')
                    {
                        self.log("dropping truncation ellipsis");
                    } else {
                        arr.push(v);
                    }
                }
            }

            while matches!(self.scanner.peek(0), Some(c) if c == ',' || c.is_whitespace()) {
                self.scanner.getch();
            }
        }
        if self.scanner.peek(0) == Some(']') {
            self.scanner.getch();
        } else if self.scanner.peek(0) == Some('}') {
            // tolerant closer for bracket/brace mixups
            self.log("array closed by brace");
            self.scanner.getch();
        }
        self.context.pop();
        arr
    }
}
