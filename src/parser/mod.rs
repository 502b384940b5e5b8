use crate::classify::is_ident_char;
use crate::emit::OutBuf;
use crate::error::{RepairError, RepairErrorKind};
use crate::options::Options;

pub(crate) mod lex;
mod array;
mod number;
mod object;
mod strings;

pub(crate) type PResult<T> = Result<T, RepairError>;

/// One repair performed during a parse. `position` is the code-point offset
/// into the original input where the repair was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
}

#[derive(Default)]
pub(crate) struct Logger {
    enable: bool,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    fn new(enable: bool) -> Self {
        Self {
            enable,
            entries: Vec::new(),
        }
    }

    #[inline]
    fn log(&mut self, position: usize, message: &'static str) {
        if self.enable {
            self.entries.push(RepairLogEntry { position, message });
        }
    }
}

/// One parse session: the input as indexable code points, a forward-only
/// cursor, and the append-mostly output buffer. Sessions are created per
/// top-level call and never shared or reused; independent parses need no
/// synchronization.
pub(crate) struct Scanner<'i> {
    orig: &'i str,
    input: Vec<char>,
    /// Byte offset of each code point in `orig`, plus a final `orig.len()`.
    /// Lets the comment skipper run memchr over the original bytes.
    char_to_byte: Vec<usize>,
    pos: usize,
    out: OutBuf,
    depth: usize,
    max_depth: usize,
    logger: Logger,
}

impl<'i> Scanner<'i> {
    pub(crate) fn new(input: &'i str, opts: &Options) -> Self {
        let mut char_to_byte: Vec<usize> = input.char_indices().map(|(i, _)| i).collect();
        char_to_byte.push(input.len());
        Self {
            orig: input,
            input: input.chars().collect(),
            char_to_byte,
            pos: 0,
            out: OutBuf::with_capacity(input.len().saturating_add(8)),
            depth: 0,
            max_depth: opts.max_depth,
            logger: Logger::new(opts.logging),
        }
    }

    /// The character at `cursor + offset`, or `None` at the input boundary.
    #[inline]
    pub(crate) fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    /// Like [`Self::peek`], but raises `UnexpectedEnd` at the boundary,
    /// carrying the offset it was asked for.
    #[inline]
    pub(crate) fn expect_char(&self, offset: usize) -> PResult<char> {
        self.peek(offset).ok_or_else(|| {
            RepairError::new(RepairErrorKind::UnexpectedEnd, self.pos + offset)
        })
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn set_position(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos);
        self.pos = pos;
    }

    #[inline]
    pub(crate) fn char_at(&self, index: usize) -> Option<char> {
        self.input.get(index).copied()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.input.len()
    }

    /// Byte offset in `orig` corresponding to the current cursor.
    #[inline]
    pub(crate) fn byte_pos(&self) -> usize {
        self.char_to_byte[self.pos]
    }

    /// Bytes of the original input. The returned slice borrows the input
    /// text, not the scanner, so it stays usable across cursor moves.
    #[inline]
    pub(crate) fn orig_bytes(&self) -> &'i [u8] {
        self.orig.as_bytes()
    }

    /// Advance the cursor over the code points spanned by
    /// `orig[byte_start..byte_end]`.
    pub(crate) fn advance_over_bytes(&mut self, byte_start: usize, byte_end: usize) {
        self.pos += self.orig[byte_start..byte_end].chars().count();
    }

    #[inline]
    pub(crate) fn out(&mut self) -> &mut OutBuf {
        &mut self.out
    }

    #[inline]
    pub(crate) fn log(&mut self, message: &'static str) {
        self.logger.log(self.pos, message);
    }

    pub(crate) fn enter_container(&mut self) -> PResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(RepairError::new(
                RepairErrorKind::DepthLimitExceeded,
                self.pos,
            ));
        }
        Ok(())
    }

    pub(crate) fn leave_container(&mut self) {
        self.depth -= 1;
    }

    /// Consume and emit `c` if it is the next character.
    pub(crate) fn parse_character(&mut self, c: char) -> bool {
        if self.peek(0) != Some(c) {
            return false;
        }
        self.out.push(c);
        self.advance();
        true
    }

    /// Attempt every value parser in fixed priority, first success wins.
    /// Insignificant content is skipped on both sides. Returns whether any
    /// value was produced.
    pub(crate) fn parse_value(&mut self) -> PResult<bool> {
        self.skip_insignificant();
        let processed = self.parse_object()?
            || self.parse_array()?
            || self.parse_string(None)
            || self.parse_number()
            || self.parse_keyword()
            || self.parse_unquoted_string();
        self.skip_insignificant();
        Ok(processed)
    }

    fn matches_keyword(&self, kw: &str) -> bool {
        // Keywords are ASCII, so byte length equals code-point length.
        for (i, c) in kw.chars().enumerate() {
            if self.char_at(self.pos + i) != Some(c) {
                return false;
            }
        }
        // Reject a prefix match of a longer token like `nullable`.
        match self.char_at(self.pos + kw.len()) {
            Some(c) if is_ident_char(c) => false,
            _ => true,
        }
    }

    /// Exact, case-sensitive `true` / `false` / `null`.
    pub(crate) fn parse_keyword(&mut self) -> bool {
        for kw in ["true", "false", "null"] {
            if self.matches_keyword(kw) {
                self.out.push_str(kw);
                self.pos += kw.len();
                return true;
            }
        }
        false
    }

    /// Parse exactly one top-level value. Anything significant left over is
    /// an error; multi-document input is out of scope.
    pub(crate) fn parse_root(&mut self) -> PResult<()> {
        let processed = self.parse_value()?;
        if !processed {
            let c = self.expect_char(0)?;
            return Err(RepairError::new(RepairErrorKind::UnexpectedChar(c), self.pos));
        }
        if let Some(c) = self.peek(0) {
            return Err(RepairError::new(RepairErrorKind::UnexpectedChar(c), self.pos));
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> (String, Vec<RepairLogEntry>) {
        (self.out.into_string(), self.logger.entries)
    }
}

/// Run one parse session over `input`.
pub(crate) fn repair(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    let mut scanner = Scanner::new(input, opts);
    scanner.parse_root()?;
    Ok(scanner.finish())
}
