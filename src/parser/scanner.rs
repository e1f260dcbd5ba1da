/// Position-tracked cursor over the input buffer.
///
/// `pos` is a byte offset that always lies on a code-point boundary; every
/// advance steps by whole code points. Offsets taken by the lookahead
/// helpers are code-point offsets relative to `pos`, matched by `peek`.
pub(crate) struct Scanner<'i> {
    input: &'i str,
    pos: usize,
}

impl<'i> Scanner<'i> {
    pub(crate) fn new(input: &'i str) -> Self {
        Self { input, pos: 0 }
    }

    #[inline]
    pub(crate) fn eos(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Character `k` code points past the cursor, without consuming anything.
    #[inline]
    pub(crate) fn peek(&self, k: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(k)
    }

    /// Consume one code point.
    #[inline]
    pub(crate) fn getch(&mut self) -> Option<char> {
        let ch = self.input[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    #[inline]
    pub(crate) fn save(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn restore(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos;
    }

    /// Unconsumed input as raw bytes, for byte-level delimiter scans.
    #[inline]
    pub(crate) fn remaining_bytes(&self) -> &'i [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    /// The byte just before the cursor, if any.
    #[inline]
    pub(crate) fn prev_byte(&self) -> Option<u8> {
        if self.pos == 0 {
            None
        } else {
            Some(self.input.as_bytes()[self.pos - 1])
        }
    }

    /// Case-insensitive literal match: consumes and returns true only when the
    /// whole keyword is present at the cursor.
    pub(crate) fn scan_keyword_ci(&mut self, keyword: &str) -> bool {
        let mut len = 0usize;
        let mut expected = keyword.chars();
        for ch in self.input[self.pos..].chars() {
            match expected.next() {
                Some(k) => {
                    if ch.to_ascii_lowercase() != k {
                        return false;
                    }
                    len += ch.len_utf8();
                }
                None => break,
            }
        }
        if expected.next().is_some() {
            return false;
        }
        self.pos += len;
        true
    }

    /// Consume the maximal run of whitespace. ASCII whitespace is handled on
    /// the byte level; anything beyond falls back to char decoding.
    pub(crate) fn skip_whitespaces(&mut self) {
        let bytes = self.input.as_bytes();
        let mut i = self.pos;
        while i < bytes.len() {
            match bytes[i] {
                b' ' | b'\t' | b'\n' | b'\r' => i += 1,
                b if b < 0x80 => break,
                _ => {
                    let ch = self.input[i..].chars().next().unwrap();
                    if ch.is_whitespace() {
                        i += ch.len_utf8();
                    } else {
                        break;
                    }
                }
            }
        }
        self.pos = i;
    }

    /// Code-point distance from the cursor to the first occurrence of any of
    /// `targets` at or after `start`. A target preceded by an odd number of
    /// backslashes counts as escaped and is skipped. Returns the distance to
    /// end of input when no occurrence exists. Never moves the cursor.
    pub(crate) fn skip_to_character(&self, targets: &[char], start: usize) -> usize {
        let mut backslashes = 0usize;
        let mut i = 0usize;
        for ch in self.input[self.pos..].chars() {
            if i >= start && targets.contains(&ch) && backslashes % 2 == 0 {
                return i;
            }
            if ch == '\\' {
                backslashes += 1;
            } else {
                backslashes = 0;
            }
            i += 1;
        }
        i
    }

    /// Smallest code-point offset >= `start` pointing at a non-whitespace
    /// character, or the distance to end of input. Never moves the cursor.
    pub(crate) fn skip_whitespaces_at(&self, start: usize) -> usize {
        let mut i = 0usize;
        for ch in self.input[self.pos..].chars() {
            if i >= start && !ch.is_whitespace() {
                return i;
            }
            i += 1;
        }
        i
    }

    /// Up to `window` characters on each side of the cursor, for log entries.
    pub(crate) fn context_window(&self, window: usize) -> String {
        let mut start = self.pos;
        let mut taken = 0usize;
        while start > 0 && taken < window {
            start -= 1;
            while start > 0 && !self.input.is_char_boundary(start) {
                start -= 1;
            }
            taken += 1;
        }
        let mut end = self.pos;
        for ch in self.input[self.pos..].chars().take(window) {
            end += ch.len_utf8();
        }
        self.input[start..end].to_string()
    }
}
