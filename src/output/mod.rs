//! Output writers for goroutine records and flamegraphs.
//!
//! This module handles writing data in various formats:
//! - Canonical text rendering of goroutines
//! - JSON reports
//! - SVG flamegraphs

pub mod json;
pub mod svg;
pub mod text;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use json::{read_report, write_report, DumpReport};
pub use svg::write_svg;
pub use text::render_goroutines;

/// Check that `path` can be written and create its parent directories
///
/// **Private** - shared by the file writers
fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
