//! Queries over parsed goroutine records.
//!
//! This module transforms the parsed goroutine sequence into:
//! - State-filtered and deduplicated sequences
//! - The distinct states present in a dump
//! - Collapsed stack format (for flamegraph generation)

pub mod filter;
pub mod stack_builder;

// Re-export main types and functions
pub use filter::{distinct_states, filter_by_state, remove_duplicates, state_counts};
pub use stack_builder::{build_collapsed_stacks, CollapsedStack};
