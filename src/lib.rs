//! Crasha
//!
//! Parses goroutine stack dumps (the text the Go runtime prints on
//! `SIGQUIT`, on an unrecovered panic or from `runtime.Stack(buf, true)`)
//! into structured records, and provides the queries used when triaging
//! deadlocks, leaks and hangs: filtering by state, removing goroutines with
//! duplicate stacks and listing the states present in a dump.
//!
//! ```
//! use crasha::aggregator::{filter_by_state, remove_duplicates};
//! use crasha::parser::parse_dump_str;
//!
//! let dump = "goroutine 1 [running]:\nmain.main()\n\t/app/main.go:9 +0x1d\n";
//! let goroutines = parse_dump_str(dump).unwrap();
//! let running = remove_duplicates(filter_by_state(goroutines, &["running"]));
//! assert_eq!(running.len(), 1);
//! ```

pub mod aggregator;
pub mod commands;
pub mod flamegraph;
pub mod output;
pub mod parser;
pub mod utils;
