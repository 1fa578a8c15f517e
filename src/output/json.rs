//! JSON report writer and reader.
//!
//! A report is the retained goroutine sequence plus some provenance, so a
//! filtered dump can be handed to other tooling.

use super::prepare_output_path;
use crate::parser::Goroutine;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dump file the goroutines were parsed from
    pub source: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Goroutines in the dump before filtering
    pub total_goroutines: usize,

    /// Goroutines retained after filtering
    pub goroutines: Vec<Goroutine>,
}

impl DumpReport {
    pub fn new(source: impl Into<String>, total_goroutines: usize, goroutines: Vec<Goroutine>) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: Utc::now().to_rfc3339(),
            total_goroutines,
            goroutines,
        }
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &DumpReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    info!("Report written successfully ({} goroutines)", report.goroutines.len());

    Ok(())
}

/// Read a report from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<DumpReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: DumpReport = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report loaded: version {}, {} goroutines",
        report.version,
        report.goroutines.len()
    );

    Ok(report)
}
