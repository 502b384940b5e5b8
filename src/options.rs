#[derive(Clone, Debug)]
pub struct Options {
    /// Maximum container nesting depth before parsing aborts with
    /// `DepthLimitExceeded`. Recursion depth is bounded by input nesting, so
    /// this guards the call stack against pathological inputs like `[[[[…`.
    pub max_depth: usize,
    /// Record a `RepairLogEntry` for every repair performed. Retrieve the
    /// log with `repair_to_string_with_log`.
    pub logging: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: 512,
            logging: false,
        }
    }
}
