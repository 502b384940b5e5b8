use super::Scanner;

impl<'i> Scanner<'i> {
    /// Greedy number match: optional sign, integer digits, optional
    /// fraction, optional exponent. Matched characters are emitted verbatim;
    /// the repairs are dropping a leading `+` and a lone trailing `.`. Zero
    /// matched characters means no number here and nothing consumed, so
    /// numeric-looking garbage falls through to the string fallback.
    pub(crate) fn parse_number(&mut self) -> bool {
        let mut k = 0usize; // lookahead offset; cursor moves only on success
        let mut token = String::new();

        let mut dropped_plus = false;
        match self.peek(0) {
            Some('-') => {
                token.push('-');
                k = 1;
            }
            Some('+') => {
                dropped_plus = true;
                k = 1;
            }
            _ => {}
        }

        let mut int_digits = 0usize;
        while let Some(c) = self.peek(k) {
            if c.is_ascii_digit() {
                token.push(c);
                k += 1;
                int_digits += 1;
            } else {
                break;
            }
        }
        if int_digits == 0 {
            // A bare sign is not a number; leave the cursor untouched.
            return false;
        }

        if self.peek(k) == Some('.') {
            if self.peek(k + 1).is_some_and(|c| c.is_ascii_digit()) {
                token.push('.');
                k += 1;
                while let Some(c) = self.peek(k) {
                    if c.is_ascii_digit() {
                        token.push(c);
                        k += 1;
                    } else {
                        break;
                    }
                }
            } else {
                // Lone trailing dot: consume it, drop it from the output.
                self.log("removed trailing dot");
                k += 1;
            }
        }

        if let Some(e @ ('e' | 'E')) = self.peek(k) {
            let mut j = k + 1;
            let sign = match self.peek(j) {
                Some(s @ ('+' | '-')) => {
                    j += 1;
                    Some(s)
                }
                _ => None,
            };
            let digits_at = j;
            while self.peek(j).is_some_and(|c| c.is_ascii_digit()) {
                j += 1;
            }
            if j > digits_at {
                token.push(e);
                if let Some(s) = sign {
                    token.push(s);
                }
                for off in digits_at..j {
                    if let Some(c) = self.peek(off) {
                        token.push(c);
                    }
                }
                k = j;
            }
            // No exponent digits: the `e` cannot extend the token and is
            // left for the next parser.
        }

        if dropped_plus {
            self.log("removed leading plus");
        }
        self.set_position(self.position() + k);
        self.out().push_str(&token);
        true
    }
}
