use super::context::Context;
use super::{Parsed, Parser};
use crate::value::{Map, Value};

impl<'i> Parser<'i> {
    /// Collect key/value members until `}`, `]` or end of input. The opening
    /// `{` (when there was one) has already been consumed. Tolerates missing
    /// quotes, colons and commas, merges dangling arrays into the previous
    /// member, and splits on duplicate keys so the caller sees two sibling
    /// objects.
    pub(crate) fn parse_object(&mut self) -> Map {
        // entering an object is the restart when a split armed one
        self.restart_object = false;
        let mut obj = Map::new();
        'members: loop {
            self.scanner.skip_whitespaces();
            match self.scanner.peek(0) {
                None | Some(']') => break,
                Some('}') => {
                    self.scanner.getch();
                    break;
                }
                _ => {}
            }

            // stray separators before a key
            loop {
                match self.scanner.peek(0) {
                    Some(',') | Some(':') => {
                        self.scanner.getch();
                    }
                    Some(c) if c.is_whitespace() => self.scanner.skip_whitespaces(),
                    _ => break,
                }
            }

            let mut key;
            let mut pre_key;
            loop {
                self.scanner.skip_whitespaces();
                pre_key = self.scanner.save();

                if self.scanner.peek(0) == Some('[') {
                    if matches!(obj.values().next_back(), Some(Value::Arr(_))) {
                        // an array where a key belongs continues the previous one
                        self.merge_dangling_array(&mut obj);
                        continue 'members;
                    }
                    // a bracketed key: take the first element's text
                    self.scanner.getch();
                    let arr = self.parse_array();
                    self.log("array in key position");
                    key = arr.first().map(Value::key_string).unwrap_or_default();
                    break;
                }

                let before = self.scanner.save();
                self.context.push(Context::ObjectKey);
                let parsed = self.parse_string();
                self.context.pop();
                key = parsed.into_value().key_string();
                if !key.is_empty() {
                    break;
                }
                let moved = self.scanner.save() != before;
                match self.scanner.peek(0) {
                    Some(':') if !moved => {
                        // a colon with no key in front: drop it and its value
                        self.log("dropping stray colon and its value");
                        self.scanner.getch();
                        self.context.push(Context::ObjectValue);
                        let _ = self.parse_json();
                        self.context.pop();
                    }
                    Some(':') => break, // an honestly empty key
                    None | Some('}') | Some(']') => continue 'members,
                    _ if !moved => break, // nothing key-like here at all
                    _ => {}               // consumed garbage; try again
                }
            }

            if key.is_empty() && matches!(self.scanner.peek(0), None | Some('}') | Some(']')) {
                continue 'members;
            }

            if obj.contains_key(&key)
                && (self.context.is_empty() || self.context.top() == Some(Context::Array))
            {
                // close this object here; the dispatcher restarts a sibling at
                // the rolled-back position, so the enclosing array (or the
                // driver's same-kind collapse) sees two objects instead of one
                self.log("duplicate key, splitting the object");
                self.scanner.restore(pre_key);
                self.restart_object = true;
                break;
            }

            self.scanner.skip_whitespaces();
            let colon_found = if self.scanner.peek(0) == Some(':') {
                self.scanner.getch();
                true
            } else {
                self.log("missing colon after key");
                false
            };

            self.context.push(Context::ObjectValue);
            let parsed = self.parse_json();
            self.context.pop();
            let mut value = match parsed {
                Parsed::Val(v) => v,
                Parsed::Stop => {
                    if !colon_found {
                        // a bare word before the closing brace means "flag set"
                        if matches!(key.to_ascii_lowercase().as_str(), "true" | "false" | "null") {
                            break;
                        }
                        self.log("bare key taken as true");
                        Value::Bool(true)
                    } else {
                        Value::Str(String::new())
                    }
                }
            };

            if !colon_found {
                self.scanner.skip_whitespaces();
                if self.scanner.peek(0) == Some(':') {
                    // what we read as a value was really the next key
                    self.log("reparsing value as the member key");
                    self.scanner.getch();
                    key = value.key_string();
                    self.context.push(Context::ObjectValue);
                    value = self.parse_json().into_value();
                    self.context.pop();
                }
            }

            obj.insert(key, value);
        }
        obj
    }

    /// `{"a": [1] [2]}` style: the bracket after an array value extends that
    /// array instead of opening a key. Fires after intervening comments too.
    fn merge_dangling_array(&mut self, obj: &mut Map) {
        self.log("merging dangling array into previous value");
        self.scanner.getch();
        let mut items = self.parse_array();
        if let Some(Value::Arr(dest)) = obj.values_mut().next_back() {
            if items.len() == 1 && matches!(items[0], Value::Arr(_)) {
                if let Some(Value::Arr(inner)) = items.pop() {
                    dest.extend(inner);
                }
            } else {
                dest.extend(items);
            }
        }
        self.scanner.skip_whitespaces();
        if self.scanner.peek(0) == Some(',') {
            self.scanner.getch();
        }
        self.scanner.skip_whitespaces();
    }
}
