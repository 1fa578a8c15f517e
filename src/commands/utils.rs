use crate::parser::{parse_dump, Goroutine};
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open a dump file and parse every goroutine in it
///
/// The file handle is dropped on every exit path, parse errors included.
pub fn load_dump(path: &Path) -> Result<Vec<Goroutine>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open file: {}", path.display()))?;

    let goroutines = parse_dump(BufReader::new(file)).context("failed to parse file")?;

    info!("Parsed {} goroutines from {}", goroutines.len(), path.display());
    Ok(goroutines)
}
