#![allow(clippy::collapsible_if)]

use super::context::Context;
use super::{Parsed, Parser};
use crate::classify::{is_string_delimiter, is_structural};
use crate::value::Value;

impl<'i> Parser<'i> {
    /// Recover a string in any of its broken forms: quoted, unquoted,
    /// doubled-quoted, missing one or both delimiters, or littered with
    /// internal quotes. Branches are selected by the delimiter style, whether
    /// quotes were missing, and the enclosing context.
    ///
    /// May also return a boolean or null: an unquoted token starting with
    /// t/f/n outside key position is tried as a literal first.
    pub(crate) fn parse_string(&mut self) -> Parsed {
        if matches!(self.scanner.peek(0), Some('#') | Some('/')) {
            self.parse_comment();
            return Parsed::Val(Value::Str(String::new()));
        }

        let mut missing_quotes = false;
        let mut doubled_quotes = false;
        let mut lstring = '"';
        let mut rstring = '"';

        // Garbage before the string proper is dropped. A structural character
        // first means there is no string here at all.
        let first = loop {
            match self.scanner.peek(0) {
                None => return Parsed::Val(Value::Str(String::new())),
                Some(c) if is_string_delimiter(c) || c.is_alphanumeric() => break c,
                Some(c) if is_structural(c) => return Parsed::Val(Value::Str(String::new())),
                Some(_) => {
                    self.scanner.getch();
                }
            }
        };

        if first == '\'' {
            lstring = '\'';
            rstring = '\'';
        } else if first == '\u{201C}' {
            lstring = '\u{201C}';
            rstring = '\u{201D}';
        } else if first.is_alphanumeric() {
            // unquoted; a leading t/f/n may still be a literal, but never in
            // key position where `true` is a perfectly fine name
            if matches!(first.to_ascii_lowercase(), 't' | 'f' | 'n')
                && self.context.top() != Some(Context::ObjectKey)
            {
                if let Some(v) = self.parse_literal() {
                    return Parsed::Val(v);
                }
            }
            self.log("missing opening quote");
            missing_quotes = true;
        }
        if !missing_quotes {
            self.scanner.getch();
        }

        // A second identical quote directly after the opener: either an empty
        // string, a ""doubled"" one, or plain garbage.
        if !missing_quotes && self.scanner.peek(0) == Some(lstring) {
            let at_member_boundary = match self.context.top() {
                Some(Context::ObjectKey) => self.scanner.peek(1) == Some(':'),
                Some(Context::ObjectValue) => matches!(self.scanner.peek(1), Some(',') | Some('}')),
                _ => false,
            };
            if at_member_boundary {
                self.scanner.getch();
                return Parsed::Val(Value::Str(String::new()));
            }
            let i = self.scanner.skip_to_character(&[rstring], 1);
            if self.scanner.peek(i).is_some() && self.scanner.peek(i + 1) == Some(rstring) {
                self.log("string wrapped in doubled quotes");
                doubled_quotes = true;
                self.scanner.getch();
            } else {
                let j = self.scanner.skip_whitespaces_at(1);
                match self.scanner.peek(j) {
                    Some(c) if is_string_delimiter(c) || c == '{' || c == '[' => {
                        // an empty string with a fresh value right behind it
                        self.log("empty string before next value");
                        self.scanner.getch();
                        return Parsed::Val(Value::Str(String::new()));
                    }
                    Some(c) if !matches!(c, ',' | ']' | '}') => {
                        self.log("ignoring stray doubled quote");
                        self.scanner.getch();
                    }
                    _ => {}
                }
            }
        }

        let mut acc = String::new();
        let mut unmatched_delimiter = false;
        let mut ended_on_new_key = false;

        loop {
            let c = match self.scanner.peek(0) {
                Some(c) => c,
                None => break,
            };
            if c == rstring {
                break;
            }

            if missing_quotes {
                match self.context.top() {
                    Some(Context::ObjectKey)
                        if c == ':' || c == ']' || c == '}' || c.is_whitespace() =>
                    {
                        break;
                    }
                    Some(Context::Array) if c == ']' || c == ',' => break,
                    _ => {}
                }
            }
            if (c == ',' || c == '}') && self.context.top() == Some(Context::ObjectValue) {
                if self.value_terminator_is_real(rstring) {
                    if !missing_quotes {
                        self.log("missing closing quote before member end");
                    }
                    break;
                }
            }
            if c == ':' && !missing_quotes && self.context.top() == Some(Context::ObjectKey) {
                // a colon inside a quoted key usually means the closing quote
                // went missing
                let i = self.scanner.skip_to_character(&[rstring], 1);
                if self.scanner.peek(i).is_none() {
                    self.log("missing closing quote before colon");
                    break;
                }
            }

            if c == '\\' {
                self.consume_escape(rstring, &mut acc);
                continue;
            }

            acc.push(c);
            self.scanner.getch();

            // A candidate closing quote right after the character we just
            // took: decide whether it really closes the string.
            if self.scanner.peek(0) == Some(rstring) {
                if doubled_quotes && self.scanner.peek(1) == Some(rstring) {
                    self.scanner.getch();
                    continue;
                }
                if unmatched_delimiter {
                    acc.push(rstring);
                    self.scanner.getch();
                    unmatched_delimiter = false;
                    continue;
                }
                if missing_quotes && self.context.top() == Some(Context::ObjectValue) {
                    // a quote inside an unquoted value either opens the next
                    // key or is plain content
                    let i = self.scanner.skip_to_character(&[rstring], 1);
                    if self.scanner.peek(i).is_some() {
                        let m = self.scanner.skip_whitespaces_at(i + 1);
                        if self.scanner.peek(m) == Some(':') {
                            ended_on_new_key = true;
                            break;
                        }
                    }
                    acc.push(rstring);
                    self.scanner.getch();
                    continue;
                }
                if !self.quote_is_real_closer(rstring) {
                    self.log("keeping quote as string content");
                    acc.push(rstring);
                    self.scanner.getch();
                    unmatched_delimiter = true;
                    continue;
                }
            }
        }

        // An unquoted key that stopped at whitespace only survives when the
        // member actually continues; otherwise it was free-standing garbage.
        if missing_quotes
            && self.context.top() == Some(Context::ObjectKey)
            && matches!(self.scanner.peek(0), Some(c) if c.is_whitespace())
        {
            self.scanner.skip_whitespaces();
            if !matches!(self.scanner.peek(0), Some(':') | Some(',')) {
                return Parsed::Val(Value::Str(String::new()));
            }
        }

        if missing_quotes || acc.ends_with('\n') {
            let trimmed = acc.trim_end().len();
            acc.truncate(trimmed);
        }
        if !ended_on_new_key && self.scanner.peek(0) == Some(rstring) {
            self.scanner.getch();
        } else if !missing_quotes {
            self.log("unterminated string closed at boundary");
        }
        Parsed::Val(Value::Str(acc))
    }

    /// Decode one backslash escape into `acc`. Unknown escapes keep the
    /// backslash verbatim so nothing is lost.
    fn consume_escape(&mut self, rstring: char, acc: &mut String) {
        let next = self.scanner.peek(1);
        match next {
            Some(n) if n == rstring || matches!(n, 't' | 'n' | 'r' | 'b' | '\\') => {
                self.scanner.getch();
                self.scanner.getch();
                acc.push(match n {
                    't' => '\t',
                    'n' => '\n',
                    'r' => '\r',
                    'b' => '\u{0008}',
                    other => other,
                });
            }
            Some(n @ ('u' | 'x')) => {
                let digits = if n == 'u' { 4 } else { 2 };
                let mut code = 0u32;
                let mut valid = 0usize;
                for k in 0..digits {
                    match self.scanner.peek(2 + k).and_then(|c| c.to_digit(16)) {
                        Some(d) => {
                            code = code * 16 + d;
                            valid += 1;
                        }
                        None => break,
                    }
                }
                if valid == digits {
                    if let Some(decoded) = char::from_u32(code) {
                        for _ in 0..digits + 2 {
                            self.scanner.getch();
                        }
                        acc.push(decoded);
                        return;
                    }
                }
                // bad hex or a lone surrogate: keep the backslash as-is
                self.log("invalid escape kept verbatim");
                acc.push('\\');
                self.scanner.getch();
            }
            Some(n) if is_string_delimiter(n) => {
                // escaped quote of a different style: content, never a closer
                self.scanner.getch();
                self.scanner.getch();
                acc.push(n);
            }
            _ => {
                acc.push('\\');
                self.scanner.getch();
            }
        }
    }

    /// For a `,` or `}` met inside an object value with no closing quote yet:
    /// is it really the end of the member? True when a later quote is only
    /// whitespace away (the next key begins) or when a full `"key":` pattern
    /// follows; otherwise the separator is string content.
    fn value_terminator_is_real(&self, rstring: char) -> bool {
        let i = self.scanner.skip_to_character(&[rstring], 1);
        if self.scanner.peek(i).is_none() {
            return true;
        }
        if self.scanner.skip_whitespaces_at(1) == i {
            return true;
        }
        // an unquoted key between here and the next quote
        if self.scanner.skip_to_character(&[':'], 1) < i {
            return true;
        }
        // or a quoted key right at it
        let k = self.scanner.skip_to_character(&[rstring], i + 1);
        if self.scanner.peek(k).is_none() {
            return false;
        }
        let m = self.scanner.skip_whitespaces_at(k + 1);
        self.scanner.peek(m) == Some(':')
    }

    /// A quote while scanning a quoted string: real closer or content?
    fn quote_is_real_closer(&self, rstring: char) -> bool {
        let j = self.scanner.skip_whitespaces_at(1);
        let follower = self.scanner.peek(j);
        let structural_follower = match self.context.top() {
            Some(Context::ObjectKey) => matches!(follower, Some(':' | ',' | '}')),
            Some(Context::ObjectValue) => matches!(follower, Some(',' | '}')),
            Some(Context::Array) => matches!(follower, Some(',' | ']' | '}')),
            None => matches!(follower, Some(',' | ']' | '}')),
        };
        if structural_follower || follower.is_none() {
            return true;
        }
        let i = self.scanner.skip_to_character(&[rstring], 1);
        if self.scanner.peek(i).is_none() {
            // nothing else could close this string
            return true;
        }
        match self.context.top() {
            Some(Context::Array) => {
                // closer iff only whitespace separates it from the next quote,
                // or that next quote directly precedes the end of an element
                if self.scanner.skip_whitespaces_at(1) == i {
                    return true;
                }
                let m = self.scanner.skip_whitespaces_at(i + 1);
                matches!(self.scanner.peek(m), Some(',' | ']' | '}'))
            }
            Some(Context::ObjectKey) => false,
            _ => {
                // real iff the next member begins: an unquoted key before the
                // next quote, or a complete `"key":` at it; otherwise the
                // later quote is the one that closes
                if self.scanner.skip_to_character(&[':'], 1) < i {
                    return true;
                }
                let k = self.scanner.skip_to_character(&[rstring], i + 1);
                if self.scanner.peek(k).is_none() {
                    return false;
                }
                let m = self.scanner.skip_whitespaces_at(k + 1);
                self.scanner.peek(m) == Some(':')
            }
        }
    }
}
