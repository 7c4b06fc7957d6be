//! Passforge - exhaustive passphrase candidate generation CLI
//!
//! Streams every fixed-length combination of an alphabet to stdout, one
//! candidate per line, for feeding password crackers and key search
//! pipelines.

use std::io::{self, BufWriter, Write};
use std::process;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::debug;

use passforge::{
    config_error, parse_scaled_count, run, Alphabet, Constraint, Result, RunConfig, RunReport,
    Significance, Window,
};

/// Bytes buffered in front of stdout
const SINK_BUFFER: usize = 64 * 1024;

/// Stream every fixed-length combination of an alphabet, one per line
#[derive(Parser)]
#[command(name = "passforge", version, about, long_about = None)]
struct Cli {
    /// Number of symbol positions in each candidate
    #[arg(value_parser = parse_length)]
    length: usize,

    /// Symbols to draw from, one per byte
    alphabet: String,

    /// Stop after COUNT emitted candidates, e.g. 500, 10K, 2M
    #[arg(short = 'g', long = "generate", value_name = "COUNT", value_parser = parse_scaled_count)]
    generate: Option<u64>,

    /// Discard the first COUNT valid candidates before emitting
    #[arg(short = 's', long = "skip", value_name = "COUNT", value_parser = parse_scaled_count)]
    skip: Option<u64>,

    /// Reject candidates repeating a symbol in cyclically adjacent positions
    #[arg(long = "no-consecutive", conflicts_with = "permutation")]
    no_consecutive: bool,

    /// Emit permutations only, never reusing a symbol
    #[arg(long = "permutation", visible_alias = "no-repeat")]
    permutation: bool,

    /// Count the first position fastest instead of the last
    #[arg(long = "little-endian")]
    little_endian: bool,

    /// Suppress the progress display
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        let significance = if self.little_endian {
            Significance::LittleEndian
        } else {
            Significance::BigEndian
        };
        let constraint = if self.permutation {
            Constraint::Permutation
        } else if self.no_consecutive {
            Constraint::NoConsecutive
        } else {
            Constraint::None
        };
        RunConfig {
            alphabet: Alphabet::from(self.alphabet.as_str()),
            length: self.length,
            significance,
            constraint,
            window: Window::new(self.skip.unwrap_or(0), self.generate.unwrap_or(0)),
        }
    }
}

fn main() {
    // Initialize the library
    if let Err(e) = passforge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();
    init_tracing();

    let quiet = cli.quiet;
    let config = cli.into_config();

    match stream_keyspace(&config, quiet) {
        Ok(report) => {
            debug!(
                emitted = report.emitted,
                skipped = report.skipped,
                visited = report.visited,
                outcome = %report.outcome,
                "done"
            );
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(e.exit_code());
        }
    }
}

/// Drive a full run against stdout with progress on stderr
fn stream_keyspace(config: &RunConfig, quiet: bool) -> Result<RunReport> {
    config.validate()?;

    let progress = build_progress(config, quiet);
    let stop = AtomicBool::new(false);
    let stdout = io::stdout();
    let mut sink = BufWriter::with_capacity(SINK_BUFFER, stdout.lock());

    let report = run(config, &mut sink, &stop, |snapshot| {
        progress.set_position(snapshot.visited);
    })?;
    sink.flush()?;
    progress.finish_and_clear();

    Ok(report)
}

/// Progress bar on stderr, hidden in quiet mode
fn build_progress(config: &RunConfig, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let total = config.alphabet.space_size(config.length);
    let bar = ProgressBar::with_draw_target(total, ProgressDrawTarget::stderr());
    let template = if total.is_some() {
        "{elapsed_precise} {wide_bar} {pos}/{len} ({per_sec})"
    } else {
        "{elapsed_precise} {spinner} {pos} ({per_sec})"
    };
    if let Ok(style) = ProgressStyle::with_template(template) {
        bar.set_style(style);
    }
    bar
}

/// Log to stderr, filtered by RUST_LOG when set
fn init_tracing() {
    let format = tracing_subscriber::fmt::format().with_target(false);
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("passforge=info")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Candidate length: a positive position count
fn parse_length(input: &str) -> Result<usize> {
    let length: usize = input
        .parse()
        .map_err(|_| config_error!("'{}' is not a positive length", input))?;
    if length == 0 {
        return Err(config_error!("candidate length must be at least 1"));
    }
    Ok(length)
}
