use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairErrorKind {
    /// The input ended where a character was still required.
    UnexpectedEnd,
    /// A character that no parser could consume at this position.
    UnexpectedChar(char),
    /// An object key position held an unparsable, non-closing token.
    ObjectKeyExpected,
    /// A colon was missing and the following token cannot start a value.
    ColonExpected,
    /// Container nesting exceeded `Options::max_depth`.
    DepthLimitExceeded,
    /// Wrapper for errors raised outside the scanner itself.
    Parse(String),
}

/// A fatal parse error. `position` is the code-point offset into the
/// original input where the violation was detected (just past the end for
/// boundary errors). Raising one aborts the whole session; no partial
/// output is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairError {
    pub kind: RepairErrorKind,
    pub position: usize,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RepairErrorKind::UnexpectedEnd => {
                write!(f, "Unexpected end of input at position {}", self.position)
            }
            RepairErrorKind::UnexpectedChar(c) => {
                write!(
                    f,
                    "Unexpected character {:?} at position {}",
                    c, self.position
                )
            }
            RepairErrorKind::ObjectKeyExpected => {
                write!(f, "Object key expected at position {}", self.position)
            }
            RepairErrorKind::ColonExpected => {
                write!(f, "Colon expected at position {}", self.position)
            }
            RepairErrorKind::DepthLimitExceeded => {
                write!(f, "Nesting depth limit exceeded at position {}", self.position)
            }
            RepairErrorKind::Parse(msg) => write!(f, "{} at position {}", msg, self.position),
        }
    }
}

impl std::error::Error for RepairError {}
