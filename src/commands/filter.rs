//! Filter command implementation.
//!
//! The filter command:
//! 1. Parses the dump
//! 2. Keeps goroutines in the requested states
//! 3. Optionally drops goroutines with duplicate stacks
//! 4. Prints the retained goroutines (and optionally writes a JSON report)

use super::models::FilterArgs;
use super::utils::load_dump;
use crate::aggregator::{filter_by_state, remove_duplicates};
use crate::output::{render_goroutines, write_report, DumpReport};
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

/// Execute the filter command, printing to `out`
///
/// # Errors
/// * Dump file cannot be opened or parsed
/// * Output cannot be written
pub fn execute_filter<W: Write>(args: &FilterArgs, mut out: W) -> Result<()> {
    let goroutines = load_dump(&args.input)?;
    let total = goroutines.len();

    writeln!(out, "Found {} goroutines", total)?;

    let mut goroutines = filter_by_state(goroutines, &args.states);

    if args.remove_duplicates {
        goroutines = remove_duplicates(goroutines);
    }

    writeln!(out, "Filtered to {} goroutines", goroutines.len())?;

    render_goroutines(&mut out, &goroutines)?;

    if let Some(path) = &args.output_json {
        let report = DumpReport::new(args.input.display().to_string(), total, goroutines);
        write_report(&report, path).context("failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
    }

    Ok(())
}
