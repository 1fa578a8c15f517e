//! Canonical text rendering of goroutine records.

use crate::parser::Goroutine;
use std::io::{self, Write};

/// Write each goroutine followed by a blank line
///
/// The output uses the same layout the runtime prints, minus argument
/// noise and trailing annotations, so it can be parsed again.
pub fn render_goroutines<W: Write>(mut writer: W, goroutines: &[Goroutine]) -> io::Result<()> {
    for goroutine in goroutines {
        writeln!(writer, "{}", goroutine)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::StackFrame;

    #[test]
    fn test_render_separates_records() {
        let goroutines = vec![
            Goroutine::new(1, "running", vec![StackFrame::new("main.main", "/app/main.go", 9)]),
            Goroutine::new(2, "sleep", vec![StackFrame::new("time.Sleep", "/go/time.go", 195)]),
        ];

        let mut out = Vec::new();
        render_goroutines(&mut out, &goroutines).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "goroutine 1 [running]:\nmain.main\n\t/app/main.go:9\n\n\
             goroutine 2 [sleep]:\ntime.Sleep\n\t/go/time.go:195\n\n"
        );
    }
}
