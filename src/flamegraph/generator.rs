//! SVG flamegraph and text summary generation.

use crate::aggregator::stack_builder::CollapsedStack;
use crate::utils::config::{DEFAULT_FLAMEGRAPH_TITLE, DEFAULT_FLAMEGRAPH_WIDTH};
use crate::utils::error::FlamegraphError;
use inferno::flamegraph::{self, Options};
use log::info;

/// Flamegraph configuration
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    pub title: String,
    pub width: usize,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_FLAMEGRAPH_TITLE.to_string(),
            width: DEFAULT_FLAMEGRAPH_WIDTH,
        }
    }
}

impl FlamegraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Generate SVG flamegraph from collapsed stacks
///
/// # Errors
/// * `FlamegraphError::EmptyStacks` - nothing to draw
/// * `FlamegraphError::RenderFailed` - inferno failed to render
pub fn generate_flamegraph(
    stacks: &[CollapsedStack],
    config: Option<&FlamegraphConfig>,
) -> Result<String, FlamegraphError> {
    if stacks.is_empty() {
        return Err(FlamegraphError::EmptyStacks);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Generating flamegraph with {} stacks", stacks.len());

    let mut options = Options::default();
    options.title = config.title;
    options.count_name = "goroutines".to_string();
    options.image_width = Some(config.width);

    let lines: Vec<String> = stacks.iter().map(CollapsedStack::to_line).collect();

    let mut svg = Vec::new();
    flamegraph::from_lines(&mut options, lines.iter().map(String::as_str), &mut svg)
        .map_err(|e| FlamegraphError::RenderFailed(e.to_string()))?;

    let svg = String::from_utf8(svg)?;
    info!("Flamegraph generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

/// Text table of the most common stacks
///
/// Shows the innermost function of each stack with its goroutine count and
/// share of all goroutines.
pub fn generate_text_summary(stacks: &[CollapsedStack], max_lines: usize) -> String {
    let total: u64 = stacks.iter().map(|s| s.weight).sum::<u64>().max(1);
    let mut lines = Vec::new();

    lines.push(format!("  {:<60} {:>10} {:>7}", "Stack (innermost call)", "GOROUTINES", "%"));
    lines.push(format!("  {}", "-".repeat(79)));

    for stack in stacks.iter().take(max_lines) {
        let leaf = stack.stack.rsplit(';').next().unwrap_or(&stack.stack);
        let percentage = (stack.weight as f64 / total as f64) * 100.0;

        let width = leaf.chars().count();
        let display = if width > 60 {
            let tail: String = leaf.chars().skip(width - 57).collect();
            format!("...{}", tail)
        } else {
            leaf.to_string()
        };

        lines.push(format!("  {:<60} {:>10} {:>6.1}%", display, stack.weight, percentage));
    }

    if stacks.len() > max_lines {
        lines.push(String::new());
        lines.push(format!("   (Showing top {} of {} unique stacks)", max_lines, stacks.len()));
    }

    lines.join("\n")
}
