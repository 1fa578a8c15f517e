//! Constants describing the goroutine dump format and CLI defaults.

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Prefix of every goroutine header line, e.g. `goroutine 18 [runnable]:`
pub const GOROUTINE_HEADER_PREFIX: &str = "goroutine ";

/// Header lines end with the bracketed state followed by a colon
pub const STATE_OPEN: char = '[';
pub const STATE_CLOSE: &str = "]:";

/// Process exit noise appended by `go run` and similar capture tools
pub const EXIT_STATUS_PREFIX: &str = "exit status";

// Argument noise the runtime prints after a function name.
// Suffixes are trimmed in order, then the name is cut at the first cut marker.
pub const FUNCTION_NAME_SUFFIXES: &[&str] = &["(...)", "()"];
pub const FUNCTION_NAME_CUT_MARKERS: &[&str] = &["(0x", "({0x", "({{0x"];

// Flamegraph defaults
pub const DEFAULT_FLAMEGRAPH_TITLE: &str = "Goroutine Stacks";
pub const DEFAULT_FLAMEGRAPH_WIDTH: usize = 1200;
pub const DEFAULT_SUMMARY_LINES: usize = 10;
