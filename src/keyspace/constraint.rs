//! Admission rules applied to digit vectors before emission

use std::fmt;

use crate::error::{PassForgeError, Result};

/// Structural rule a digit vector must satisfy to be emitted
///
/// Constraints see symbol indices, not symbol bytes. An alphabet with
/// duplicate symbols still counts each index as a distinct symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Constraint {
    /// Admit every vector
    #[default]
    None,
    /// Reject vectors where a position repeats the symbol index of its
    /// cyclic successor, the last position being adjacent to the first
    NoConsecutive,
    /// Reject vectors using any symbol index more than once
    Permutation,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::None => write!(f, "none"),
            Constraint::NoConsecutive => write!(f, "no-consecutive"),
            Constraint::Permutation => write!(f, "permutation"),
        }
    }
}

impl Constraint {
    /// Check whether a digit vector passes this rule
    pub fn admits(&self, digits: &[usize]) -> bool {
        match self {
            Constraint::None => true,
            Constraint::NoConsecutive => no_cyclic_repeat(digits),
            Constraint::Permutation => all_distinct(digits),
        }
    }

    /// Reject setups where no vector can ever pass
    ///
    /// Only the permutation rule has a cheap emptiness test. The cyclic
    /// rule's degenerate setups (one position, or one symbol for more
    /// than one position) instead run to exhaustion and emit nothing.
    pub fn ensure_satisfiable(&self, alphabet_len: usize, length: usize) -> Result<()> {
        match self {
            Constraint::Permutation if alphabet_len < length => {
                Err(PassForgeError::unsatisfiable(format!(
                    "a permutation needs {} distinct symbols but the alphabet only has {}",
                    length, alphabet_len
                )))
            }
            _ => Ok(()),
        }
    }
}

/// True when no position shares its symbol index with its cyclic successor
fn no_cyclic_repeat(digits: &[usize]) -> bool {
    let length = digits.len();
    (0..length).all(|i| digits[i] != digits[(i + 1) % length])
}

/// True when every symbol index appears at most once
fn all_distinct(digits: &[usize]) -> bool {
    digits
        .iter()
        .enumerate()
        .all(|(i, digit)| digits[i + 1..].iter().all(|other| digit != other))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_admits_everything() {
        assert!(Constraint::None.admits(&[0, 0, 0]));
        assert!(Constraint::None.admits(&[1, 1, 2]));
    }

    #[test]
    fn test_no_consecutive_rejects_adjacent_repeats() {
        assert!(Constraint::NoConsecutive.admits(&[0, 1, 2]));
        assert!(!Constraint::NoConsecutive.admits(&[0, 0, 1]));
        assert!(!Constraint::NoConsecutive.admits(&[0, 1, 1]));
    }

    #[test]
    fn test_no_consecutive_wraps_to_the_first_position() {
        // first and last positions are neighbors
        assert!(!Constraint::NoConsecutive.admits(&[1, 0, 1]));
        assert!(Constraint::NoConsecutive.admits(&[1, 0, 2]));
    }

    #[test]
    fn test_no_consecutive_single_position_never_passes() {
        // a lone position is its own cyclic neighbor
        assert!(!Constraint::NoConsecutive.admits(&[0]));
        assert!(!Constraint::NoConsecutive.admits(&[7]));
    }

    #[test]
    fn test_permutation_requires_distinct_indices() {
        assert!(Constraint::Permutation.admits(&[2, 0, 1]));
        assert!(!Constraint::Permutation.admits(&[2, 0, 2]));
        assert!(Constraint::Permutation.admits(&[5]));
    }

    #[test]
    fn test_permutation_satisfiability() {
        assert!(Constraint::Permutation.ensure_satisfiable(3, 3).is_ok());
        assert!(Constraint::Permutation.ensure_satisfiable(5, 3).is_ok());
        let err = Constraint::Permutation.ensure_satisfiable(2, 3).unwrap_err();
        assert!(matches!(err, PassForgeError::Unsatisfiable { .. }));
    }

    #[test]
    fn test_other_constraints_always_satisfiable() {
        assert!(Constraint::None.ensure_satisfiable(1, 10).is_ok());
        assert!(Constraint::NoConsecutive.ensure_satisfiable(1, 10).is_ok());
    }
}
