//! Flamegraph generation using the inferno library.
//!
//! This module converts collapsed goroutine stacks into SVG flamegraphs,
//! where frame width is the number of goroutines below that call.

pub mod generator;

// Re-export main types
pub use generator::{generate_flamegraph, generate_text_summary, FlamegraphConfig};
