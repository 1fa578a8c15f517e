//! Crasha CLI
//!
//! Triage tool for goroutine stack dumps: filter goroutines by state,
//! collapse duplicate stacks and list the states present in a dump.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io;
use std::path::PathBuf;

use crasha::commands::{
    execute_filter, execute_flamegraph, execute_states, FilterArgs, FlamegraphArgs, StatesArgs,
};
use crasha::flamegraph::FlamegraphConfig;
use crasha::utils::config::{
    DEFAULT_FLAMEGRAPH_TITLE, DEFAULT_FLAMEGRAPH_WIDTH, DEFAULT_SUMMARY_LINES,
};

/// Crasha - goroutine dump triage
#[derive(Parser, Debug)]
#[command(name = "crasha")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print goroutines, optionally filtered by state and deduplicated
    Filter {
        /// Goroutine dump file
        file: PathBuf,

        /// Keep goroutines in this state (repeatable)
        #[arg(long = "state")]
        states: Vec<String>,

        /// Keep only the first goroutine of each distinct stack
        #[arg(long)]
        remove_duplicates: bool,

        /// Also write the retained goroutines as a JSON report
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Extract all goroutine states out of a file
    States {
        /// Goroutine dump file
        file: PathBuf,

        /// Show how many goroutines are in each state
        #[arg(long)]
        counts: bool,
    },

    /// Render goroutine stacks as an SVG flamegraph
    Flamegraph {
        /// Goroutine dump file
        file: PathBuf,

        /// Output path for the SVG flamegraph
        #[arg(short, long, default_value = "goroutines.svg")]
        output: PathBuf,

        /// Include goroutines in this state (repeatable)
        #[arg(long = "state")]
        states: Vec<String>,

        /// Flamegraph title
        #[arg(long, default_value = DEFAULT_FLAMEGRAPH_TITLE)]
        title: String,

        /// Flamegraph width in pixels
        #[arg(long, default_value_t = DEFAULT_FLAMEGRAPH_WIDTH)]
        width: usize,

        /// Print the most common stacks to stdout
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let stdout = io::stdout();

    match cli.command {
        Commands::Filter {
            file,
            states,
            remove_duplicates,
            json,
        } => {
            let args = FilterArgs {
                input: file,
                states,
                remove_duplicates,
                output_json: json,
            };
            execute_filter(&args, stdout.lock())?;
        }

        Commands::States { file, counts } => {
            let args = StatesArgs {
                input: file,
                counts,
            };
            execute_states(&args, stdout.lock())?;
        }

        Commands::Flamegraph {
            file,
            output,
            states,
            title,
            width,
            summary,
        } => {
            let args = FlamegraphArgs {
                input: file,
                output_svg: output,
                states,
                config: FlamegraphConfig::new().with_title(title).with_width(width),
                print_summary: summary,
                summary_lines: DEFAULT_SUMMARY_LINES,
            };
            execute_flamegraph(&args, stdout.lock())?;
        }
    }

    Ok(())
}
