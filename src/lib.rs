//! Best-effort JSON repair: turn malformed, truncated, or loosely-formatted
//! JSON-like text into syntactically valid JSON, preserving as much of the
//! original structure and data as possible.
//!
//! The core is a single recursive-descent scanner that parses and repairs in
//! one forward pass. At every grammar point where strict JSON demands a
//! token, the scanner either finds it, synthesizes a plausible substitute
//! (missing commas, colons, closers, quotes), or raises a [`RepairError`].
//!
//! ```
//! use jsonmend::{Options, repair_to_string};
//!
//! let opts = Options::default();
//! assert_eq!(repair_to_string("{a:1}", &opts).unwrap(), r#"{"a":1}"#);
//! assert_eq!(repair_to_string("[1,2,", &opts).unwrap(), "[1,2]");
//! ```

mod classify;
mod emit;
pub mod error;
pub mod options;
mod parser;

pub use error::{RepairError, RepairErrorKind};
pub use options::Options;
pub use parser::RepairLogEntry;

/// Repair a potentially invalid JSON string into a valid JSON string.
/// Already-valid input passes through unchanged; anything else is repaired
/// in a single forward pass or rejected with a [`RepairError`] carrying the
/// code-point offset where repair was impossible.
pub fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    // Fast path: if input is already valid JSON, short-circuit. The scanner
    // reproduces valid JSON byte-for-byte, so behavior is unchanged.
    #[cfg(feature = "serde")]
    if serde_json::from_str::<serde_json::Value>(input).is_ok() {
        return Ok(input.to_string());
    }

    let (out, _log) = parser::repair(input, opts)?;
    Ok(out)
}

/// Repair a potentially invalid JSON string and return both the result and
/// a log of every repair performed. Requires `Options::logging`.
pub fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    #[cfg(feature = "serde")]
    if serde_json::from_str::<serde_json::Value>(input).is_ok() {
        return Ok((input.to_string(), Vec::new()));
    }

    parser::repair(input, opts)
}

#[cfg(feature = "serde")]
/// Repair and then parse into a `serde_json::Value`.
pub fn repair_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, RepairError> {
    let s = repair_to_string(input, opts)?;
    serde_json::from_str(&s).map_err(|e| {
        RepairError::new(
            RepairErrorKind::Parse(format!("serde_json parse error: {}", e)),
            0,
        )
    })
}

#[cfg(test)]
mod tests;
