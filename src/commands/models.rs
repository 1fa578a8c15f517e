use crate::flamegraph::FlamegraphConfig;
use crate::utils::config::DEFAULT_SUMMARY_LINES;
use std::path::PathBuf;

/// Arguments for the filter command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
    /// Dump file to parse
    pub input: PathBuf,

    /// States to keep (empty = keep all)
    pub states: Vec<String>,

    /// Keep only the first goroutine of each distinct stack
    pub remove_duplicates: bool,

    /// Optional JSON report of the retained goroutines
    pub output_json: Option<PathBuf>,
}

/// Arguments for the states command
#[derive(Debug, Clone, Default)]
pub struct StatesArgs {
    /// Dump file to parse
    pub input: PathBuf,

    /// Print the number of goroutines next to each state
    pub counts: bool,
}

/// Arguments for the flamegraph command
#[derive(Debug, Clone)]
pub struct FlamegraphArgs {
    /// Dump file to parse
    pub input: PathBuf,

    /// Output path for the SVG flamegraph
    pub output_svg: PathBuf,

    /// States to include (empty = all)
    pub states: Vec<String>,

    /// Flamegraph configuration
    pub config: FlamegraphConfig,

    /// Print the most common stacks to stdout
    pub print_summary: bool,

    /// Rows in the printed summary
    pub summary_lines: usize,
}

impl Default for FlamegraphArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_svg: PathBuf::from("goroutines.svg"),
            states: Vec::new(),
            config: FlamegraphConfig::default(),
            print_summary: false,
            summary_lines: DEFAULT_SUMMARY_LINES,
        }
    }
}
