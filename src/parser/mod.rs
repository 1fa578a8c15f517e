//! Goroutine dump parsing and record definitions.
//!
//! This module handles:
//! - Scanning raw dump text line by line
//! - Stripping argument noise from function names
//! - Defining the goroutine and stack frame records

pub mod goroutine_dump;
pub mod schema;

// Re-export main types
pub use goroutine_dump::{parse_dump, parse_dump_str, strip_call_arguments, ParserState};
pub use schema::{Goroutine, StackFrame};
