use super::context::Context;
use super::Parser;
use memchr::memchr;

impl<'i> Parser<'i> {
    /// Consume a `#`, `//` or `/* ... */` comment. Line comments end at a
    /// newline, but also at the closing character of any enclosing container
    /// so that a missing newline cannot swallow the rest of the structure.
    /// The terminator itself is not consumed. A lone `/` that starts no
    /// comment is consumed as garbage.
    pub(crate) fn parse_comment(&mut self) {
        match self.scanner.peek(0) {
            Some('#') => {
                self.scanner.getch();
                self.skip_line_comment();
            }
            Some('/') => match self.scanner.peek(1) {
                Some('/') => {
                    self.scanner.getch();
                    self.scanner.getch();
                    self.skip_line_comment();
                }
                Some('*') => {
                    self.scanner.getch();
                    self.scanner.getch();
                    self.skip_block_comment();
                }
                _ => {
                    self.scanner.getch();
                    return;
                }
            },
            _ => return,
        }
        self.log("removed comment");
        self.scanner.skip_whitespaces();
    }

    fn skip_line_comment(&mut self) {
        let in_array = self.context.contains(Context::Array);
        let in_object_value = self.context.contains(Context::ObjectValue);
        let in_object_key = self.context.contains(Context::ObjectKey);
        while let Some(ch) = self.scanner.peek(0) {
            let terminates = ch == '\n'
                || ch == '\r'
                || (in_array && ch == ']')
                || (in_object_value && ch == '}')
                || (in_object_key && ch == ':');
            if terminates {
                break;
            }
            self.scanner.getch();
        }
    }

    fn skip_block_comment(&mut self) {
        let pos = self.scanner.save();
        let advance = {
            let rest = self.scanner.remaining_bytes();
            let mut off = 0usize;
            let mut adv = rest.len(); // unterminated comments run to EOF
            while let Some(p) = memchr(b'*', &rest[off..]) {
                let idx = off + p;
                if rest.get(idx + 1) == Some(&b'/') {
                    adv = idx + 2;
                    break;
                }
                off = idx + 1;
            }
            adv
        };
        self.scanner.restore(pos + advance);
    }
}
