use super::Scanner;
use crate::classify::{is_special_whitespace, is_whitespace};
use memchr::{memchr, memchr2};

impl<'i> Scanner<'i> {
    /// Copy standard whitespace to the output verbatim; normalize each
    /// extended Unicode whitespace code point to one ASCII space. Stops at
    /// the boundary without error.
    pub(crate) fn parse_whitespace(&mut self) -> bool {
        let start = self.position();
        while let Some(c) = self.peek(0) {
            if is_whitespace(c) {
                self.out().push(c);
                self.advance();
            } else if is_special_whitespace(c) {
                self.log("normalized unicode whitespace");
                self.out().push(' ');
                self.advance();
            } else {
                break;
            }
        }
        self.position() > start
    }

    /// Consume one `//` or `/* */` comment, discarding it from the output.
    /// A line comment ends before the newline (the newline itself is
    /// whitespace and is copied by the next whitespace pass); an
    /// unterminated block comment consumes the rest of the input.
    pub(crate) fn parse_comment(&mut self) -> bool {
        if self.peek(0) != Some('/') {
            return false;
        }
        match self.peek(1) {
            Some('*') => {
                self.log("removed block comment");
                let body_start = self.char_to_byte[self.pos + 2];
                let bytes = self.orig_bytes();
                let mut off = body_start;
                while let Some(p) = memchr(b'*', &bytes[off..]) {
                    let idx = off + p;
                    if bytes.get(idx + 1) == Some(&b'/') {
                        self.advance_over_bytes(self.byte_pos(), idx + 2);
                        return true;
                    }
                    off = idx + 1;
                }
                self.set_position(self.len());
                true
            }
            Some('/') => {
                self.log("removed line comment");
                let body_start = self.char_to_byte[self.pos + 2];
                let bytes = self.orig_bytes();
                if let Some(p) = memchr2(b'\n', b'\r', &bytes[body_start..]) {
                    // Leave the newline for the whitespace pass.
                    self.advance_over_bytes(self.byte_pos(), body_start + p);
                } else {
                    self.set_position(self.len());
                }
                true
            }
            _ => false,
        }
    }

    /// Combined skipper used before and after every value: alternate
    /// whitespace and comment consumption until a pass removes no comment,
    /// so interleavings like `/*a*/  //b\n  value` are fully consumed.
    pub(crate) fn skip_insignificant(&mut self) -> bool {
        let start = self.position();
        self.parse_whitespace();
        while self.parse_comment() {
            self.parse_whitespace();
        }
        self.position() > start
    }
}
