use crate::classify::is_whitespace;

/// Append-mostly output buffer for one parse session.
///
/// Already-finalized content is never touched: the only non-append edits are
/// the two repair primitives, and both are restricted to the trailing
/// whitespace run (the suffix of the buffer consisting solely of whitespace).
/// Synthesized punctuation therefore binds to the preceding value rather
/// than landing after trailing formatting.
#[derive(Debug, Default)]
pub(crate) struct OutBuf {
    buf: String,
}

impl OutBuf {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            buf: String::with_capacity(cap),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    #[inline]
    pub(crate) fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }

    /// Byte offset where the trailing whitespace run starts.
    fn trailing_ws_start(&self) -> usize {
        let mut idx = self.buf.len();
        for (i, c) in self.buf.char_indices().rev() {
            if !is_whitespace(c) {
                break;
            }
            idx = i;
        }
        idx
    }

    /// Insert `token` immediately before the trailing whitespace run.
    pub(crate) fn insert_before_trailing_ws(&mut self, token: &str) {
        let idx = self.trailing_ws_start();
        self.buf.insert_str(idx, token);
    }

    /// Remove the most recent emission of `token`, if any. Used to retract
    /// a comma that turned out to precede a closer.
    pub(crate) fn strip_last_occurrence(&mut self, token: &str) {
        if let Some(idx) = self.buf.rfind(token) {
            self.buf.replace_range(idx..idx + token.len(), "");
        }
    }
}
