//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod filter;
pub mod flamegraph;
pub mod models;
pub mod states;
pub mod utils;

// Re-export main command functions
pub use filter::execute_filter;
pub use flamegraph::execute_flamegraph;
pub use models::{FilterArgs, FlamegraphArgs, StatesArgs};
pub use states::execute_states;
pub use utils::load_dump;
