#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

use crate::classify::{is_number_start, is_string_delimiter, is_string_start};
use crate::options::Options;
use crate::repair::RepairLogEntry;
use crate::value::Value;

pub(crate) mod context;
pub(crate) mod scanner;

mod array;
mod comment;
mod number;
mod object;
mod strings;

use context::{Context, ContextStack};
use scanner::Scanner;

/// Result channel between the dispatcher and the composite parsers. `Stop`
/// means the dispatcher scanned to end of input or refused to consume a
/// terminator belonging to an enclosing container; it never ends up inside a
/// value tree.
pub(crate) enum Parsed {
    Val(Value),
    Stop,
}

impl Parsed {
    fn into_value(self) -> Value {
        match self {
            Parsed::Val(v) => v,
            Parsed::Stop => Value::Str(String::new()),
        }
    }
}

#[derive(Default)]
pub(crate) struct Logger {
    enable: bool,
    window: usize,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    pub(crate) fn new(enable: bool, window: usize) -> Self {
        Self {
            enable,
            window,
            entries: Vec::new(),
        }
    }

    fn log(&mut self, scanner: &Scanner, message: &'static str) {
        if !self.enable {
            return;
        }
        self.entries.push(RepairLogEntry {
            position: scanner.position(),
            message,
            context: scanner.context_window(self.window),
        });
    }

    pub(crate) fn into_entries(self) -> Vec<RepairLogEntry> {
        self.entries
    }
}

/// Lenient recursive-descent parser over a single input buffer.
///
/// The scanner position and the context stack are shared by every
/// sub-parser; `restart_object` carries the duplicate-key split decision
/// from the object parser to the next dispatch (see `object.rs`).
pub(crate) struct Parser<'i> {
    pub(crate) scanner: Scanner<'i>,
    pub(crate) context: ContextStack,
    logger: Logger,
    restart_object: bool,
}

impl<'i> Parser<'i> {
    pub(crate) fn new(input: &'i str, opts: &Options) -> Self {
        Self {
            scanner: Scanner::new(input),
            context: ContextStack::default(),
            logger: Logger::new(opts.logging, opts.log_context_window),
            restart_object: false,
        }
    }

    pub(crate) fn log(&mut self, message: &'static str) {
        self.logger.log(&self.scanner, message);
    }

    /// Top-level driver: one value, or a concatenation of values collapsed
    /// by kind.
    pub(crate) fn parse(mut self) -> (Option<Value>, Vec<RepairLogEntry>) {
        let first = match self.parse_json() {
            Parsed::Val(v) => v,
            Parsed::Stop => return (None, self.logger.into_entries()),
        };
        if self.scanner.eos() {
            return (Some(first), self.logger.into_entries());
        }
        self.log("content after the first value, collecting the rest");
        let mut acc = vec![first];
        loop {
            match self.parse_json() {
                Parsed::Stop => break,
                Parsed::Val(Value::Str(s)) if s.is_empty() => {
                    // no value here; move on by one so the scan makes progress
                    self.scanner.getch();
                }
                Parsed::Val(Value::Str(s))
                    if !s.trim().is_empty() && s.trim().chars().all(|c| c == '}' || c == ']') =>
                {
                    self.log("dropping stray closing brackets");
                }
                Parsed::Val(v) => {
                    let collapse = matches!(
                        (acc.last(), &v),
                        (Some(Value::Arr(_)), Value::Arr(_)) | (Some(Value::Obj(_)), Value::Obj(_))
                    );
                    if collapse {
                        self.log("two documents of the same kind, keeping the later one");
                        acc.pop();
                    }
                    acc.push(v);
                }
            }
        }
        let result = if acc.len() == 1 { acc.pop() } else { Some(Value::Arr(acc)) };
        (result, self.logger.into_entries())
    }

    /// Value dispatcher. Decides which parser to run from the character under
    /// the cursor; loops over garbage and comments until it produces a value
    /// or runs out of input.
    pub(crate) fn parse_json(&mut self) -> Parsed {
        loop {
            if self.restart_object {
                // a duplicate key ended the previous object right before this
                // position; resume collecting members as a fresh sibling
                self.restart_object = false;
                let obj = self.parse_object();
                return Parsed::Val(Value::Obj(obj));
            }
            let ch = match self.scanner.peek(0) {
                Some(c) => c,
                None => return Parsed::Stop,
            };
            match ch {
                '{' => {
                    self.scanner.getch();
                    let obj = self.parse_object();
                    return Parsed::Val(Value::Obj(obj));
                }
                '[' => {
                    self.scanner.getch();
                    let arr = self.parse_array();
                    return Parsed::Val(Value::Arr(arr));
                }
                '#' | '/' => {
                    self.parse_comment();
                }
                ']' if self.context.contains(Context::Array) => return Parsed::Stop,
                '}' if matches!(
                    self.context.top(),
                    Some(Context::ObjectKey | Context::ObjectValue)
                ) =>
                {
                    return Parsed::Stop;
                }
                c if is_string_start(c) => {
                    if self.context.is_empty() && !is_string_delimiter(c) {
                        // a bare word at the top level can only be a literal
                        match self.parse_literal() {
                            Some(v) => return Parsed::Val(v),
                            None => {
                                self.scanner.getch();
                            }
                        }
                    } else {
                        return self.parse_string();
                    }
                }
                c if is_number_start(c) => match self.parse_number() {
                    Parsed::Val(Value::Str(s)) if s.is_empty() => {
                        self.scanner.getch();
                    }
                    out => return out,
                },
                _ => {
                    self.scanner.getch();
                }
            }
        }
    }

    /// Case-insensitive `true`/`false`/`null`. Does not move the cursor when
    /// nothing matches.
    pub(crate) fn parse_literal(&mut self) -> Option<Value> {
        if self.scanner.scan_keyword_ci("true") {
            return Some(Value::Bool(true));
        }
        if self.scanner.scan_keyword_ci("false") {
            return Some(Value::Bool(false));
        }
        if self.scanner.scan_keyword_ci("null") {
            return Some(Value::Null);
        }
        None
    }
}
