//! Core configuration types for passforge

use crate::config_error;
use crate::error::Result;
use crate::keyspace::{Alphabet, Constraint, Significance, Window};

/// Largest base value accepted in a scaled count, before the multiplier
pub const MAX_COUNT_BASE: u64 = 1 << 31;

/// Everything a keyspace run needs to know
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Symbols candidates are drawn from
    pub alphabet: Alphabet,
    /// Positions per candidate
    pub length: usize,
    /// Which end of the candidate counts fastest
    pub significance: Significance,
    /// Admission rule applied before windowing
    pub constraint: Constraint,
    /// Skip and limit applied to valid candidates
    pub window: Window,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::from("abcdefghijklmnopqrstuvwxyz"),
            length: 8,
            significance: Significance::BigEndian,
            constraint: Constraint::None,
            window: Window::unbounded(),
        }
    }
}

impl RunConfig {
    /// Check the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(config_error!("the alphabet needs at least one symbol"));
        }
        if self.length == 0 {
            return Err(config_error!("candidate length must be at least 1"));
        }
        self.constraint
            .ensure_satisfiable(self.alphabet.len(), self.length)
    }
}

/// Parse a count with an optional decimal scale suffix
///
/// Accepts `n` or `nK`, `nM`, `nG`, `nT`, `nP`, where the suffix
/// multiplies by a power of ten from 10^3 for `K` up to 10^15 for `P`.
/// The base value must lie in `1..=2^31` and the scaled total must fit
/// in a u64.
pub fn parse_scaled_count(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let (base, multiplier) = match trimmed.as_bytes().last() {
        Some(b'K') => (&trimmed[..trimmed.len() - 1], 1_000u64),
        Some(b'M') => (&trimmed[..trimmed.len() - 1], 1_000_000),
        Some(b'G') => (&trimmed[..trimmed.len() - 1], 1_000_000_000),
        Some(b'T') => (&trimmed[..trimmed.len() - 1], 1_000_000_000_000),
        Some(b'P') => (&trimmed[..trimmed.len() - 1], 1_000_000_000_000_000),
        _ => (trimmed, 1),
    };
    let value: u64 = base
        .parse()
        .map_err(|_| config_error!("'{}' is not a count of the form n[K|M|G|T|P]", input))?;
    if value == 0 || value > MAX_COUNT_BASE {
        return Err(config_error!(
            "count base {} is outside the accepted range 1..=2^31",
            value
        ));
    }
    value
        .checked_mul(multiplier)
        .ok_or_else(|| config_error!("count '{}' does not fit in 64 bits", input))
}
