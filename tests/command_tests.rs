use crasha::commands::{
    execute_filter, execute_flamegraph, execute_states, load_dump, FilterArgs, FlamegraphArgs,
    StatesArgs,
};
use crasha::output::read_report;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const MULTIPLE_GOROUTINES: &str = include_str!("fixtures/multiple_goroutines.txt");

const DUPLICATE_STACKS: &str = "goroutine 7 [select]:
main.worker(0xc000020060)
\t/app/worker.go:42 +0x71
main.main.func1()
\t/app/main.go:20 +0x25

goroutine 8 [chan receive, 4 minutes]:
main.worker(0xc000020068)
\t/app/worker.go:42 +0x71
main.main.func1()
\t/app/main.go:20 +0x25
";

fn dump_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_filter(args: &FilterArgs) -> String {
    let mut out = Vec::new();
    execute_filter(args, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_load_dump_missing_file() {
    let err = load_dump(&PathBuf::from("/nonexistent/goroutines.txt")).unwrap_err();
    assert!(err.to_string().starts_with("failed to open file"));
}

#[test]
fn test_load_dump_parse_failure_has_context() {
    let file = dump_file("goroutine abc [running]:\n");
    let err = load_dump(file.path()).unwrap_err();

    assert_eq!(err.to_string(), "failed to parse file");
    assert!(format!("{:#}", err).contains("state=goroutine"));
}

#[test]
fn test_filter_without_options_prints_everything() {
    let file = dump_file(MULTIPLE_GOROUTINES);
    let output = run_filter(&FilterArgs {
        input: file.path().to_path_buf(),
        ..Default::default()
    });

    assert!(output.starts_with("Found 4 goroutines\nFiltered to 4 goroutines\n"));
    assert!(output.contains("goroutine 1450 [select]:\nruntime.gopark\n\truntime/proc.go:381\n"));
}

#[test]
fn test_filter_by_state() {
    let file = dump_file(MULTIPLE_GOROUTINES);
    let output = run_filter(&FilterArgs {
        input: file.path().to_path_buf(),
        states: vec!["runnable".to_string()],
        ..Default::default()
    });

    assert_eq!(
        output,
        "Found 4 goroutines\n\
         Filtered to 1 goroutines\n\
         goroutine 18 [runnable]:\n\
         main.main.func1\n\t/home/bschumacher/src/tmp/maps/main.go:16\n\
         created by main.main in goroutine 1\n\t/home/bschumacher/src/tmp/maps/main.go:14\n\n"
    );
}

#[test]
fn test_filter_remove_duplicates_keeps_first() {
    let file = dump_file(DUPLICATE_STACKS);
    let output = run_filter(&FilterArgs {
        input: file.path().to_path_buf(),
        remove_duplicates: true,
        ..Default::default()
    });

    assert!(output.starts_with("Found 2 goroutines\nFiltered to 1 goroutines\n"));
    assert!(output.contains("goroutine 7 [select]:"));
    assert!(!output.contains("goroutine 8"));
}

#[test]
fn test_filter_writes_json_report() {
    let file = dump_file(MULTIPLE_GOROUTINES);
    let temp_dir = tempfile::tempdir().unwrap();
    let report_path = temp_dir.path().join("reports/running.json");

    run_filter(&FilterArgs {
        input: file.path().to_path_buf(),
        states: vec!["running".to_string()],
        remove_duplicates: false,
        output_json: Some(report_path.clone()),
    });

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.total_goroutines, 4);
    assert_eq!(report.goroutines.len(), 2);
    assert_eq!(report.source, file.path().display().to_string());
}

#[test]
fn test_states_lists_distinct_states() {
    let file = dump_file(MULTIPLE_GOROUTINES);
    let mut out = Vec::new();

    execute_states(
        &StatesArgs {
            input: file.path().to_path_buf(),
            counts: false,
        },
        &mut out,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Found 4 goroutines\nrunning\nrunnable\nselect\n"
    );
}

#[test]
fn test_states_with_counts() {
    let file = dump_file(DUPLICATE_STACKS);
    let mut out = Vec::new();

    execute_states(
        &StatesArgs {
            input: file.path().to_path_buf(),
            counts: true,
        },
        &mut out,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Found 2 goroutines\nselect: 1\nchan receive: 1\n"
    );
}

#[test]
fn test_flamegraph_no_matching_goroutines_fails() {
    let file = dump_file(MULTIPLE_GOROUTINES);
    let temp_dir = tempfile::tempdir().unwrap();
    let args = FlamegraphArgs {
        input: file.path().to_path_buf(),
        output_svg: temp_dir.path().join("out.svg"),
        states: vec!["sleep".to_string()],
        ..Default::default()
    };

    let err = execute_flamegraph(&args, Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "failed to generate flamegraph");
    assert!(!args.output_svg.exists());
}
