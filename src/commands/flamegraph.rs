//! Flamegraph command implementation.
//!
//! Collapses goroutine stacks, weighted by how many goroutines share each
//! stack, and renders them as an SVG flamegraph.

use super::models::FlamegraphArgs;
use super::utils::load_dump;
use crate::aggregator::{build_collapsed_stacks, filter_by_state};
use crate::flamegraph::{generate_flamegraph, generate_text_summary};
use crate::output::write_svg;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

/// Execute the flamegraph command
pub fn execute_flamegraph<W: Write>(args: &FlamegraphArgs, mut out: W) -> Result<()> {
    let goroutines = load_dump(&args.input)?;
    let goroutines = filter_by_state(goroutines, &args.states);

    let stacks = build_collapsed_stacks(&goroutines);
    debug!("Built {} unique stacks", stacks.len());

    let svg = generate_flamegraph(&stacks, Some(&args.config))
        .context("failed to generate flamegraph")?;

    write_svg(&svg, &args.output_svg).context("failed to write flamegraph SVG")?;
    info!("✓ Flamegraph written to: {}", args.output_svg.display());

    if args.print_summary {
        writeln!(out, "{}", generate_text_summary(&stacks, args.summary_lines))?;
    }

    Ok(())
}
