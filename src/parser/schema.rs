//! Goroutine record definitions.
//!
//! A dump parses into a sequence of [`Goroutine`] records, each holding the
//! goroutine id, its scheduling state and its stack frames. Records are built
//! once by the parser and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a goroutine call stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    /// Fully-qualified function name with argument noise stripped
    pub function: String,

    /// Source file path as printed by the runtime
    pub file: String,

    /// Source line number
    pub line: u32,
}

impl StackFrame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\t{}:{}", self.function, self.file, self.line)
    }
}

/// A single goroutine captured in a dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goroutine {
    id: u64,
    state: String,
    frames: Vec<StackFrame>,
}

impl Goroutine {
    pub fn new(id: u64, state: impl Into<String>, frames: Vec<StackFrame>) -> Self {
        Self {
            id,
            state: state.into(),
            frames,
        }
    }

    /// Goroutine number as printed in the header line
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Scheduling state, without any `, <detail>` suffix
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Frames in dump order (most recent call first)
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Whether two goroutines are blocked at the same call stack.
    ///
    /// Compares frames only; id and state are ignored, so this is the
    /// equivalence used for duplicate removal.
    pub fn same_stack(&self, other: &Goroutine) -> bool {
        self.frames == other.frames
    }
}

impl fmt::Display for Goroutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "goroutine {} [{}]:", self.id, self.state)?;
        for frame in &self.frames {
            writeln!(f, "{}", frame)?;
        }
        Ok(())
    }
}
