//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::parser::ParserState;
use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur while parsing a goroutine dump
///
/// Structural errors carry the offending line, the line before it and the
/// scanner state, so format drift can be located in the source dump.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unexpected line: {line}, previous line: {previous_line}, state={state}")]
    UnexpectedLine {
        line: String,
        previous_line: String,
        state: ParserState,
    },

    #[error("unexpected line: {line}, previous line: {previous_line}, state={state}, {source}")]
    InvalidNumber {
        line: String,
        previous_line: String,
        state: ParserState,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to read dump: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during flamegraph generation
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("Empty stack data")]
    EmptyStacks,

    #[error("Flamegraph rendering failed: {0}")]
    RenderFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Flamegraph output is not valid UTF-8")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
