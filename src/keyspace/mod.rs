//! Keyspace module - exhaustive enumeration of fixed-length candidates
//!
//! Everything between an alphabet and the byte stream on stdout lives
//! here: the position counter, constraint filtering, skip/limit
//! windowing, record rendering, and the run loop that ties them
//! together.

mod candidates;
mod constraint;
mod odometer;
mod render;
mod runner;
mod window;

pub use candidates::{CandidateStream, CandidateWords};
pub use constraint::Constraint;
pub use odometer::{Odometer, Significance};
pub use render::Renderer;
pub use runner::{run, Outcome, RunProgress, RunReport, PROGRESS_INTERVAL};
pub use window::{Window, WindowAction, WindowState};

/// Ordered set of candidate symbols, one byte per symbol
///
/// Symbols are raw bytes rather than characters. Duplicates are kept:
/// each occurrence occupies its own index and produces its own
/// (identical-looking) candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Create an alphabet from raw symbol bytes
    pub fn new(symbols: impl Into<Vec<u8>>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// Number of symbols, counting duplicates
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the alphabet has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol byte at a digit index
    pub fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    /// All symbol bytes in order
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Total number of `length`-position vectors over this alphabet
    ///
    /// None when the count does not fit in a u64.
    pub fn space_size(&self, length: usize) -> Option<u64> {
        let width = u32::try_from(length).ok()?;
        (self.symbols.len() as u64).checked_pow(width)
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Self::new(symbols.as_bytes())
    }
}
