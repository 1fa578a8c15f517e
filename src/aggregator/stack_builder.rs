//! Build collapsed stack format from parsed goroutines.
//!
//! Collapsed stacks are the input format for flamegraph generation.
//! Format: "outermost;caller;callee weight"
//!
//! Example: "main.main;main.serve;runtime.gopark 12"
//! This means: 12 goroutines were parked with exactly this call stack.

use crate::parser::Goroutine;
use log::debug;
use std::collections::HashMap;

/// A single collapsed stack entry
///
/// **Public** - used by flamegraph generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedStack {
    /// Stack as semicolon-separated function names, outermost call first
    pub stack: String,

    /// Number of goroutines sharing this stack
    pub weight: u64,
}

impl CollapsedStack {
    /// Create a new collapsed stack
    pub fn new(stack: String, weight: u64) -> Self {
        Self { stack, weight }
    }

    /// Render as a line for the flamegraph collapsed format
    pub fn to_line(&self) -> String {
        format!("{} {}", self.stack, self.weight)
    }
}

/// Build collapsed stacks from parsed goroutines
///
/// **Public** - main entry point for stack building
///
/// # Algorithm
/// 1. Reverse each goroutine's frames so the outermost call comes first
/// 2. Join function names with `;`
/// 3. Count goroutines per unique stack
///
/// Goroutines without frames are skipped. The result is sorted by weight
/// (descending), ties broken by stack name so output is stable.
pub fn build_collapsed_stacks(goroutines: &[Goroutine]) -> Vec<CollapsedStack> {
    debug!("Building collapsed stacks from {} goroutines", goroutines.len());

    let mut stack_map: HashMap<String, u64> = HashMap::new();

    for goroutine in goroutines {
        if goroutine.frames().is_empty() {
            continue;
        }

        let stack = goroutine
            .frames()
            .iter()
            .rev()
            .map(|frame| frame_label(&frame.function))
            .collect::<Vec<_>>()
            .join(";");

        *stack_map.entry(stack).or_insert(0) += 1;
    }

    let mut stacks: Vec<CollapsedStack> = stack_map
        .into_iter()
        .map(|(stack, weight)| CollapsedStack::new(stack, weight))
        .collect();

    stacks.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.stack.cmp(&b.stack)));

    debug!("Built {} unique collapsed stacks", stacks.len());

    stacks
}

/// Function name safe for the collapsed format, where `;` separates frames
fn frame_label(function: &str) -> String {
    if function.is_empty() {
        "unknown".to_string()
    } else {
        function.replace(';', ":")
    }
}
