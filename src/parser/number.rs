use super::context::Context;
use super::{Parsed, Parser};
use crate::classify::is_number_char;
use crate::value::Value;
use num_bigint::BigInt;

impl<'i> Parser<'i> {
    /// Greedy numeric scan with post-hoc classification. The character class
    /// is deliberately loose (it includes `/` and, outside arrays, `,`);
    /// whatever fails to convert afterwards is kept verbatim as a string.
    /// An empty string result means no number was found at all.
    pub(crate) fn parse_number(&mut self) -> Parsed {
        let start = self.scanner.save();
        let in_array = self.context.top() == Some(Context::Array);
        let mut raw = String::new();
        while let Some(ch) = self.scanner.peek(0) {
            if !is_number_char(ch, in_array) {
                break;
            }
            raw.push(ch);
            self.scanner.getch();
        }

        if matches!(self.scanner.peek(0), Some(c) if c.is_alphabetic()) {
            // something like 1notanumber or 10efoo: this was never a number,
            // so the whole run degrades to one string
            self.scanner.restore(start);
            return self.parse_string();
        }
        if raw.ends_with(['-', 'e', 'E', ',']) {
            // trailing garbage; it stays consumed but leaves the token
            raw.pop();
            self.log("dropped trailing character after number");
        }
        if self.scanner.peek(0) == Some('"') {
            self.log("dropped stray quote after number");
            self.scanner.getch();
        }

        if raw.is_empty() {
            return Parsed::Val(Value::Str(String::new()));
        }
        Parsed::Val(classify_number(raw))
    }
}

fn classify_number(raw: String) -> Value {
    if let Some(stripped) = raw.strip_suffix('.') {
        return match stripped.parse::<f64>() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::Str(raw),
        };
    }
    if raw.contains(',') {
        // decimal comma, e.g. "1,234" -> 1.234
        return match raw.replace(',', ".").parse::<f64>() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::Str(raw),
        };
    }
    if raw.contains(['.', 'e', 'E']) {
        return match raw.parse::<f64>() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::Str(raw),
        };
    }
    match raw.parse::<BigInt>() {
        Ok(i) => Value::Int(i),
        Err(_) => Value::Str(raw),
    }
}
