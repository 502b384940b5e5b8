use super::{PResult, Scanner};
use crate::classify::is_start_of_value;
use crate::error::{RepairError, RepairErrorKind};

impl<'i> Scanner<'i> {
    /// Parse an object, repairing missing commas, missing colons, missing
    /// values, trailing commas, and a missing closing brace. Once entered,
    /// this always completes by clean closure or synthesis; only the two
    /// structural errors (unparsable key, ambiguous missing colon) abort.
    pub(crate) fn parse_object(&mut self) -> PResult<bool> {
        if self.peek(0) != Some('{') {
            return Ok(false);
        }
        self.enter_container()?;
        self.out().push('{');
        self.advance();
        self.skip_insignificant();

        let mut initial = true;
        loop {
            match self.peek(0) {
                None | Some('}') => break,
                _ => {}
            }

            let separated = !initial;
            if initial {
                initial = false;
            } else {
                if !self.parse_character(',') {
                    self.log("inserted missing comma");
                    self.out().insert_before_trailing_ws(",");
                }
                self.skip_insignificant();
            }

            let processed_key = self.parse_string(None) || self.parse_unquoted_string();
            if !processed_key {
                match self.peek(0) {
                    // A comma directly before closure (or truncation): retract
                    // it. On the first iteration no comma of ours was emitted,
                    // so there is nothing to retract; stripping anyway would
                    // reach into the enclosing container's output.
                    None | Some('{' | '[' | ']' | '}') => {
                        if separated {
                            self.log("removed trailing comma");
                            self.out().strip_last_occurrence(",");
                        }
                    }
                    Some(_) => {
                        return Err(RepairError::new(
                            RepairErrorKind::ObjectKeyExpected,
                            self.position(),
                        ));
                    }
                }
                break;
            }
            self.skip_insignificant();

            if !self.parse_character(':') {
                // A key with nothing after it is a hard stop; a key followed
                // by something that can start a value gets a colon spliced in.
                let c = self.expect_char(0)?;
                if is_start_of_value(c) {
                    self.log("inserted missing colon");
                    self.out().insert_before_trailing_ws(":");
                } else {
                    return Err(RepairError::new(
                        RepairErrorKind::ColonExpected,
                        self.position(),
                    ));
                }
            }

            if !self.parse_value()? {
                // Key and colon but no value, as in `{"a":}` or `{"a":,`.
                self.log("inserted missing value null");
                self.out().push_str("null");
            }
        }

        if !self.parse_character('}') {
            self.log("closed unclosed object");
            self.out().insert_before_trailing_ws("}");
        }
        self.leave_container();
        Ok(true)
    }
}
