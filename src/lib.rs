//! Passforge - exhaustive passphrase candidate generation
//!
//! A CLI tool and library for streaming every fixed-length combination
//! of an alphabet, with optional structural constraints and skip/limit
//! windowing for sharding long runs across machines.

pub mod error;
pub mod keyspace;
pub mod types;

// Re-export commonly used types
pub use error::{PassForgeError, Result};
pub use keyspace::{
    run, Alphabet, CandidateStream, CandidateWords, Constraint, Odometer, Outcome, Renderer,
    RunProgress, RunReport, Significance, Window, WindowAction, WindowState, PROGRESS_INTERVAL,
};
pub use types::{parse_scaled_count, RunConfig, MAX_COUNT_BASE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
