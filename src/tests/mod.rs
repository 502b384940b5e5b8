use super::*;

fn opts() -> Options {
    Options::default()
}

/// Run the scanner directly, bypassing the valid-input fast path in the
/// public API. Lets tests assert what the parser itself emits.
fn scan(input: &str) -> Result<String, RepairError> {
    crate::parser::repair(input, &opts()).map(|(out, _)| out)
}

// Submodules (topic-based)
mod comments_ws;
mod numbers;
