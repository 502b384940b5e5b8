use super::{PResult, Scanner};
use crate::error::{RepairError, RepairErrorKind};

impl<'i> Scanner<'i> {
    /// Parse an array: the object parser without the key/colon phase. Same
    /// missing-comma and trailing-comma repairs, same closer synthesis on
    /// exhaustion. A separator with no parsable value before the closer is a
    /// hard stop, mirroring the object parser's key handling.
    pub(crate) fn parse_array(&mut self) -> PResult<bool> {
        if self.peek(0) != Some('[') {
            return Ok(false);
        }
        self.enter_container()?;
        self.out().push('[');
        self.advance();
        self.skip_insignificant();

        let mut initial = true;
        loop {
            match self.peek(0) {
                None | Some(']') => break,
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

            if !self.parse_value()? {
                match self.peek(0) {
                    // A comma directly before closure (or truncation): retract
                    // it. Nothing to retract on the first iteration; this
                    // container has emitted no comma yet.
                    None | Some(']' | '}') => {
                        if separated {
                            self.log("removed trailing comma");
                            self.out().strip_last_occurrence(",");
                        }
                    }
                    Some(c) => {
                        return Err(RepairError::new(
                            RepairErrorKind::UnexpectedChar(c),
                            self.position(),
                        ));
                    }
                }
                break;
            }
        }

        if !self.parse_character(']') {
            self.log("closed unclosed array");
            self.out().insert_before_trailing_ws("]");
        }
        self.leave_container();
        Ok(true)
    }
}
