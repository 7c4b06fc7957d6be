//! Run loop tying enumeration, windowing, and record emission together

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::{CandidateStream, Renderer, WindowAction, WindowState};
use crate::error::Result;
use crate::types::RunConfig;

/// Visited states between progress callbacks
pub const PROGRESS_INTERVAL: u64 = 1 << 20;

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every counter state was visited
    Exhausted,
    /// The emission limit was reached
    LimitReached,
    /// The stop flag was raised
    Interrupted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Exhausted => write!(f, "exhausted"),
            Outcome::LimitReached => write!(f, "limit-reached"),
            Outcome::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Progress snapshot handed to the callback during a run
#[derive(Debug, Clone, Copy)]
pub struct RunProgress {
    /// Counter states visited so far, valid or not
    pub visited: u64,
    /// Records written so far
    pub emitted: u64,
    /// Total state count, when it fits in a u64
    pub total: Option<u64>,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    /// Counter states visited, valid or not
    pub visited: u64,
    /// Records written to the sink
    pub emitted: u64,
    /// Valid candidates discarded by the window
    pub skipped: u64,
    /// Why the run stopped
    pub outcome: Outcome,
}

/// Enumerate the keyspace and write one record per emitted candidate
///
/// Candidates flow through the constraint filter and the window before
/// being rendered into `sink`. The `stop` flag is checked between
/// candidates, and `on_progress` fires roughly every
/// [`PROGRESS_INTERVAL`] visited states. The sink is not flushed.
pub fn run<W, F>(
    config: &RunConfig,
    sink: &mut W,
    stop: &AtomicBool,
    mut on_progress: F,
) -> Result<RunReport>
where
    W: Write,
    F: FnMut(&RunProgress),
{
    config.validate()?;

    let total = config.alphabet.space_size(config.length);
    debug!(
        alphabet = config.alphabet.len(),
        length = config.length,
        constraint = %config.constraint,
        significance = %config.significance,
        skip = config.window.skip,
        limit = config.window.limit,
        "starting keyspace run"
    );

    let mut stream = CandidateStream::new(
        config.alphabet.len(),
        config.length,
        config.significance,
        config.constraint,
    );
    let mut window = WindowState::new(config.window);
    let mut renderer = Renderer::new(config.length);
    let mut next_report = PROGRESS_INTERVAL;

    let outcome = loop {
        if stop.load(Ordering::Relaxed) {
            break Outcome::Interrupted;
        }
        let Some(digits) = stream.advance() else {
            break Outcome::Exhausted;
        };
        match window.decide() {
            WindowAction::Skip => {}
            WindowAction::Emit => {
                sink.write_all(renderer.record(&config.alphabet, digits))?;
            }
            WindowAction::EmitThenStop => {
                sink.write_all(renderer.record(&config.alphabet, digits))?;
                break Outcome::LimitReached;
            }
        }
        if stream.visited() >= next_report {
            on_progress(&RunProgress {
                visited: stream.visited(),
                emitted: window.emitted(),
                total,
            });
            next_report = stream.visited().saturating_add(PROGRESS_INTERVAL);
        }
    };

    let report = RunReport {
        visited: stream.visited(),
        emitted: window.emitted(),
        skipped: window.skipped(),
        outcome,
    };
    debug!(
        visited = report.visited,
        emitted = report.emitted,
        skipped = report.skipped,
        outcome = %report.outcome,
        "keyspace run finished"
    );
    Ok(report)
}
