//! Streaming enumeration of constraint-passing candidates

use super::{Alphabet, Constraint, Odometer, Significance, WindowAction, WindowState};
use crate::error::Result;
use crate::types::RunConfig;

/// Streams digit vectors that pass the configured constraint
///
/// The stream lends out its internal counter state, so each vector is
/// only valid until the next call to `advance`. Rejected vectors are
/// filtered out internally but still count as visited.
pub struct CandidateStream {
    odometer: Odometer,
    constraint: Constraint,
    visited: u64,
    started: bool,
    exhausted: bool,
}

impl CandidateStream {
    /// Create a stream over `length`-position vectors in the given radix
    pub fn new(
        radix: usize,
        length: usize,
        significance: Significance,
        constraint: Constraint,
    ) -> Self {
        Self {
            odometer: Odometer::new(radix, length, significance),
            constraint,
            visited: 0,
            started: false,
            exhausted: false,
        }
    }

    /// Counter states inspected so far, valid or not
    pub fn visited(&self) -> u64 {
        self.visited
    }

    /// True once the counter has carried out of its last state
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Step to the next valid digit vector
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if self.started {
            if !self.step() {
                return None;
            }
        } else {
            self.started = true;
            self.visited = 1;
        }
        while !self.constraint.admits(self.odometer.digits()) {
            if !self.step() {
                return None;
            }
        }
        Some(self.odometer.digits())
    }

    fn step(&mut self) -> bool {
        if self.odometer.advance() {
            self.visited += 1;
            true
        } else {
            self.exhausted = true;
            false
        }
    }
}

/// Owning iterator that renders valid candidates as strings
///
/// Applies the full run configuration including the window, and
/// allocates one `String` per candidate. Callers that care about
/// throughput should use [`CandidateStream`] or [`super::run`] instead.
pub struct CandidateWords {
    stream: CandidateStream,
    window: WindowState,
    alphabet: Alphabet,
    done: bool,
}

impl CandidateWords {
    /// Build a word iterator for a validated run configuration
    pub fn new(config: &RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stream: CandidateStream::new(
                config.alphabet.len(),
                config.length,
                config.significance,
                config.constraint,
            ),
            window: WindowState::new(config.window),
            alphabet: config.alphabet.clone(),
            done: false,
        })
    }
}

impl Iterator for CandidateWords {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let digits = self.stream.advance()?;
            match self.window.decide() {
                WindowAction::Skip => continue,
                action => {
                    let bytes: Vec<u8> = digits
                        .iter()
                        .map(|&digit| self.alphabet.symbol(digit))
                        .collect();
                    if action == WindowAction::EmitThenStop {
                        self.done = true;
                    }
                    return Some(String::from_utf8_lossy(&bytes).into_owned());
                }
            }
        }
    }
}
