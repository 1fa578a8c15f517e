//! States command implementation.

use super::models::StatesArgs;
use super::utils::load_dump;
use crate::aggregator::{distinct_states, state_counts};
use anyhow::Result;
use std::io::Write;

/// Execute the states command, printing each distinct state once
pub fn execute_states<W: Write>(args: &StatesArgs, mut out: W) -> Result<()> {
    let goroutines = load_dump(&args.input)?;

    writeln!(out, "Found {} goroutines", goroutines.len())?;

    if args.counts {
        for (state, count) in state_counts(&goroutines) {
            writeln!(out, "{}: {}", state, count)?;
        }
    } else {
        for state in distinct_states(&goroutines) {
            writeln!(out, "{}", state)?;
        }
    }

    Ok(())
}
