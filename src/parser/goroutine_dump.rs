//! Line scanner for goroutine stack dumps.
//!
//! Parses the text the Go runtime prints for `SIGQUIT`, `panic` and
//! `runtime.Stack(buf, true)` into [`Goroutine`] records:
//!
//! ```text
//! goroutine 18 [select, 2 minutes]:
//! main.worker(0xc000012345?)
//!         /src/app/worker.go:42 +0x71
//! created by main.main in goroutine 1
//!         /src/app/main.go:14 +0x87
//! ```
//!
//! There are no record delimiters other than blank lines, so every line is
//! interpreted according to a small [`ParserState`].

use super::schema::{Goroutine, StackFrame};
use crate::utils::config::{
    EXIT_STATUS_PREFIX, FUNCTION_NAME_CUT_MARKERS, FUNCTION_NAME_SUFFIXES,
    GOROUTINE_HEADER_PREFIX, STATE_CLOSE, STATE_OPEN,
};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::fmt;
use std::io::BufRead;

/// What the scanner expects the next non-blank line to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// `goroutine <id> [<state>]:`
    Goroutine,
    /// A function or method name
    FunctionName,
    /// `<file>:<line> <annotations>`
    FileLine,
    /// A blank line ending the current record
    Spacer,
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParserState::Goroutine => "goroutine",
            ParserState::FunctionName => "functionName",
            ParserState::FileLine => "fileLine",
            ParserState::Spacer => "spacer",
        };
        f.write_str(name)
    }
}

/// Parse a goroutine dump from any buffered reader
///
/// **Public** - main entry point for parsing
///
/// # Returns
/// Goroutines in the order their header lines appear
///
/// # Errors
/// * `ParseError::UnexpectedLine` - malformed header or file line
/// * `ParseError::InvalidNumber` - goroutine id or line number is not an integer
/// * `ParseError::Io` - the reader failed
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte in a path does not abort the parse. A structural error
/// discards everything parsed so far.
pub fn parse_dump<R: BufRead>(mut reader: R) -> Result<Vec<Goroutine>, ParseError> {
    let mut scanner = DumpScanner::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        scanner.scan_line(line.trim_end_matches(&['\n', '\r'][..]))?;
    }

    let goroutines = scanner.finish();
    debug!("Parsed {} goroutines", goroutines.len());

    Ok(goroutines)
}

/// Parse a goroutine dump held in memory
pub fn parse_dump_str(dump: &str) -> Result<Vec<Goroutine>, ParseError> {
    parse_dump(dump.as_bytes())
}

/// Record under construction
///
/// Frames are complete once their file line arrives; until then the
/// function name waits in `pending_function`.
#[derive(Debug)]
struct GoroutineBuilder {
    id: u64,
    state: String,
    frames: Vec<StackFrame>,
    pending_function: Option<String>,
}

impl GoroutineBuilder {
    fn build(mut self) -> Goroutine {
        if let Some(function) = self.pending_function.take() {
            warn!(
                "goroutine {}: frame {} has no file line",
                self.id, function
            );
            self.frames.push(StackFrame::new(function, String::new(), 0));
        }
        if self.frames.is_empty() {
            warn!("goroutine {} has no stack frames", self.id);
        }
        Goroutine::new(self.id, self.state, self.frames)
    }
}

/// Accumulator threaded through the scan loop
#[derive(Debug)]
struct DumpScanner {
    state: ParserState,
    current: Option<GoroutineBuilder>,
    previous_line: String,
    goroutines: Vec<Goroutine>,
}

impl DumpScanner {
    fn new() -> Self {
        Self {
            state: ParserState::Goroutine,
            current: None,
            previous_line: String::new(),
            goroutines: Vec::new(),
        }
    }

    fn scan_line(&mut self, raw: &str) -> Result<(), ParseError> {
        let line = raw.trim();

        // A blank line ends a record whatever state we are in
        if line.is_empty() {
            self.state = ParserState::Spacer;
        } else if line.starts_with(EXIT_STATUS_PREFIX) {
            return Ok(());
        }

        match self.state {
            ParserState::Goroutine => self.scan_header(raw, line)?,
            ParserState::FunctionName => self.scan_function_name(line),
            ParserState::FileLine => self.scan_file_line(raw, line)?,
            ParserState::Spacer => self.scan_spacer(),
        }

        self.previous_line = raw.to_string();
        Ok(())
    }

    fn finish(mut self) -> Vec<Goroutine> {
        self.flush();
        self.goroutines
    }

    fn flush(&mut self) {
        if let Some(builder) = self.current.take() {
            self.goroutines.push(builder.build());
        }
    }

    fn scan_header(&mut self, raw: &str, line: &str) -> Result<(), ParseError> {
        let line = line.strip_prefix(GOROUTINE_HEADER_PREFIX).unwrap_or(line);
        let Some((number, rest)) = line.split_once(' ') else {
            return Err(self.unexpected(raw));
        };

        let id = number
            .parse::<u64>()
            .map_err(|source| self.invalid_number(raw, source))?;

        // Newer runtimes may print `gp=... m=...` before the bracketed state
        let Some(state) = rest
            .find(STATE_OPEN)
            .and_then(|start| rest[start + STATE_OPEN.len_utf8()..].strip_suffix(STATE_CLOSE))
        else {
            return Err(self.unexpected(raw));
        };

        // `[select, 2 minutes]` keeps only `select`
        let state = state.split(',').next().unwrap_or(state).trim();

        debug!("goroutine {} [{}]", id, state);

        self.current = Some(GoroutineBuilder {
            id,
            state: state.to_string(),
            frames: Vec::new(),
            pending_function: None,
        });
        self.state = ParserState::FunctionName;
        Ok(())
    }

    fn scan_function_name(&mut self, line: &str) {
        if let Some(builder) = self.current.as_mut() {
            builder.pending_function = Some(strip_call_arguments(line).to_string());
        }
        self.state = ParserState::FileLine;
    }

    fn scan_file_line(&mut self, raw: &str, line: &str) -> Result<(), ParseError> {
        let Some((file, rest)) = line.split_once(':') else {
            return Err(self.unexpected(raw));
        };

        // `:42 +0x71 fp=0x... sp=0x...` keeps only 42
        let Some(number) = rest.split_whitespace().next() else {
            return Err(self.unexpected(raw));
        };
        let line_number = number
            .parse::<u32>()
            .map_err(|source| self.invalid_number(raw, source))?;

        if let Some(builder) = self.current.as_mut() {
            let function = builder.pending_function.take().unwrap_or_default();
            builder
                .frames
                .push(StackFrame::new(function, file, line_number));
        }
        self.state = ParserState::FunctionName;
        Ok(())
    }

    fn scan_spacer(&mut self) {
        self.flush();
        self.state = ParserState::Goroutine;
    }

    fn unexpected(&self, raw: &str) -> ParseError {
        ParseError::UnexpectedLine {
            line: raw.to_string(),
            previous_line: self.previous_line.clone(),
            state: self.state,
        }
    }

    fn invalid_number(&self, raw: &str, source: std::num::ParseIntError) -> ParseError {
        ParseError::InvalidNumber {
            line: raw.to_string(),
            previous_line: self.previous_line.clone(),
            state: self.state,
            source,
        }
    }
}

/// Strip the argument list the runtime prints after a function name
///
/// `fmt.(*pp).printArg(0xc0001325b0, {0x4a6b80, 0xc00012c120}, 0x76)` becomes
/// `fmt.(*pp).printArg`. Names without recognised noise pass through unchanged.
pub fn strip_call_arguments(line: &str) -> &str {
    let trimmed = FUNCTION_NAME_SUFFIXES
        .iter()
        .fold(line, |name, suffix| name.strip_suffix(suffix).unwrap_or(name));

    FUNCTION_NAME_CUT_MARKERS.iter().fold(trimmed, |name, marker| {
        name.split_once(marker).map_or(name, |(head, _)| head)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_call_arguments() {
        assert_eq!(strip_call_arguments("main.main()"), "main.main");
        assert_eq!(strip_call_arguments("log.Printf(...)"), "log.Printf");
        assert_eq!(
            strip_call_arguments("reflect.(*MapIter).Next(0xc000143878?)"),
            "reflect.(*MapIter).Next"
        );
        assert_eq!(
            strip_call_arguments("internal/fmtsort.Sort({0x4a6b80?, 0xc00012c120?, 0xc000143ad0?})"),
            "internal/fmtsort.Sort"
        );
        assert_eq!(
            strip_call_arguments("main.process({{0x4a6b80, 0x8}, 0x1})"),
            "main.process"
        );
        assert_eq!(
            strip_call_arguments("created by main.main in goroutine 1"),
            "created by main.main in goroutine 1"
        );
    }

    #[test]
    fn test_parser_state_names() {
        assert_eq!(ParserState::Goroutine.to_string(), "goroutine");
        assert_eq!(ParserState::FunctionName.to_string(), "functionName");
        assert_eq!(ParserState::FileLine.to_string(), "fileLine");
        assert_eq!(ParserState::Spacer.to_string(), "spacer");
    }

    #[test]
    fn test_header_state_detail_dropped() {
        let goroutines = parse_dump_str(
            "goroutine 1450 [select, 2 minutes]:\nruntime.gopark(0xc1d07d3958?)\n\truntime/proc.go:381 +0xd6\n",
        )
        .unwrap();

        assert_eq!(goroutines[0].id(), 1450);
        assert_eq!(goroutines[0].state(), "select");
    }

    #[test]
    fn test_header_with_runtime_annotations() {
        let goroutines = parse_dump_str(
            "goroutine 1 gp=0xc000002380 m=0 mp=0x5b2f00 [running]:\nmain.main()\n\t/app/main.go:9 +0x1d\n",
        )
        .unwrap();

        assert_eq!(goroutines[0].id(), 1);
        assert_eq!(goroutines[0].state(), "running");
    }

    #[test]
    fn test_header_without_state_section() {
        let err = parse_dump_str("goroutine 1 running\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedLine {
                state: ParserState::Goroutine,
                ..
            }
        ));
    }

    #[test]
    fn test_file_line_without_number() {
        let err = parse_dump_str("goroutine 1 [running]:\nmain.main()\n\t/app/main.go:\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedLine {
                state: ParserState::FileLine,
                ..
            }
        ));
    }

    #[test]
    fn test_dangling_function_kept_as_frame() {
        let goroutines = parse_dump_str("goroutine 7 [running]:\nmain.main()\n").unwrap();

        assert_eq!(goroutines[0].frames(), &[StackFrame::new("main.main", "", 0)]);
    }

    #[test]
    fn test_leading_and_repeated_blank_lines() {
        let dump = "\n\ngoroutine 1 [running]:\nmain.main()\n\t/app/main.go:9\n\n\n\ngoroutine 2 [sleep]:\ntime.Sleep(0x3b9aca00)\n\t/usr/local/go/src/runtime/time.go:195\n";
        let goroutines = parse_dump_str(dump).unwrap();

        assert_eq!(goroutines.len(), 2);
        assert_eq!(goroutines[1].state(), "sleep");
    }

    #[test]
    fn test_header_then_spacer_yields_empty_record() {
        let goroutines = parse_dump_str("goroutine 3 [running]:\n\n").unwrap();

        assert_eq!(goroutines.len(), 1);
        assert!(goroutines[0].frames().is_empty());
    }
}
