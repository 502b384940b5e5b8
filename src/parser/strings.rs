use super::Scanner;
use crate::classify::{
    is_control, is_quote, is_special_whitespace, is_structural, is_whitespace, quote_matches,
};

fn control_escape(c: char) -> String {
    match c {
        '\u{8}' => "\\b".to_string(),
        '\u{C}' => "\\f".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        _ => format!("\\u{:04X}", c as u32),
    }
}

impl<'i> Scanner<'i> {
    /// Parse a string opened by any recognized quote character. Output is
    /// always delimited by ASCII double quotes. Escape sequences are copied
    /// verbatim, raw control characters are re-escaped, invalid escapes are
    /// repaired by dropping the backslash, and end of input acts as an
    /// implicit closer. With `stop_at` set, consumption additionally stops
    /// at the given character without consuming it.
    pub(crate) fn parse_string(&mut self, stop_at: Option<char>) -> bool {
        let open = match self.peek(0) {
            Some(c) if is_quote(c) => c,
            _ => return false,
        };
        if open != '"' {
            self.log("normalized quote style");
        }
        self.advance();
        self.out().push('"');

        loop {
            let Some(c) = self.peek(0) else {
                self.log("closed unterminated string");
                break;
            };
            if stop_at == Some(c) {
                self.log("closed string at delimiter");
                break;
            }
            if quote_matches(open, c) {
                self.advance();
                break;
            }
            if c == '\\' {
                self.parse_escape();
                continue;
            }
            if is_control(c) {
                self.log("escaped control character");
                let esc = control_escape(c);
                self.out().push_str(&esc);
                self.advance();
                continue;
            }
            self.out().push(c);
            self.advance();
        }

        self.out().push('"');
        true
    }

    /// One backslash escape inside a string. Valid JSON escapes are copied
    /// verbatim; an escaped quote character that is not a valid JSON escape
    /// keeps the character and drops the backslash; anything else drops the
    /// backslash and lets the next character flow through normally.
    fn parse_escape(&mut self) {
        match self.peek(1) {
            Some(e @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')) => {
                self.out().push('\\');
                self.out().push(e);
                self.advance();
                self.advance();
            }
            Some('u') => {
                let mut hex_ok = true;
                for k in 2..6 {
                    match self.peek(k) {
                        Some(h) if h.is_ascii_hexdigit() => {}
                        _ => {
                            hex_ok = false;
                            break;
                        }
                    }
                }
                if hex_ok {
                    self.out().push_str("\\u");
                    for k in 2..6 {
                        // Checked just above.
                        if let Some(h) = self.peek(k) {
                            self.out().push(h);
                        }
                    }
                    self.set_position(self.position() + 6);
                } else {
                    self.log("removed invalid escape");
                    self.advance();
                }
            }
            Some(q) if is_quote(q) => {
                // `\'`, `\``, smart quotes: not JSON escapes, and after
                // quote normalization the character no longer needs one.
                self.log("removed invalid escape");
                self.out().push(q);
                self.advance();
                self.advance();
            }
            Some(_) => {
                self.log("removed invalid escape");
                self.advance();
            }
            None => {
                // Dangling backslash at end of input.
                self.log("removed invalid escape");
                self.advance();
            }
        }
    }

    /// Catch-all leaf parser: capture a run up to the next structural
    /// character, quote, comment start, or end of input; trim trailing
    /// whitespace; emit re-quoted with ASCII double quotes. An empty span
    /// means nothing was parsed, which is how callers detect a missing key
    /// or value.
    pub(crate) fn parse_unquoted_string(&mut self) -> bool {
        let start = self.position();
        let mut end = start;
        while let Some(c) = self.char_at(end) {
            if is_structural(c) || is_quote(c) {
                break;
            }
            if c == '/' && matches!(self.char_at(end + 1), Some('/') | Some('*')) {
                break;
            }
            end += 1;
        }
        while end > start {
            // Trailing insignificant whitespace belongs outside the token.
            let c = self.char_at(end - 1).unwrap_or(' ');
            if is_whitespace(c) || is_special_whitespace(c) {
                end -= 1;
            } else {
                break;
            }
        }
        if end == start {
            return false;
        }

        self.log("quoted unquoted token");
        self.out().push('"');
        for i in start..end {
            let Some(c) = self.char_at(i) else { break };
            match c {
                '"' => self.out().push_str("\\\""),
                '\\' => self.out().push_str("\\\\"),
                c if is_control(c) => {
                    let esc = control_escape(c);
                    self.out().push_str(&esc);
                }
                c => self.out().push(c),
            }
        }
        self.out().push('"');
        self.set_position(end);
        true
    }
}
