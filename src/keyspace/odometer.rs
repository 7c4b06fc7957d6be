//! Mixed-radix position counter

use std::fmt;

/// Which end of the digit vector carries the most weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Significance {
    /// Last position changes fastest, like ordinary decimal notation
    #[default]
    BigEndian,
    /// First position changes fastest
    LittleEndian,
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Significance::BigEndian => write!(f, "big-endian"),
            Significance::LittleEndian => write!(f, "little-endian"),
        }
    }
}

/// Fixed-width counter over digit vectors in a uniform radix
///
/// Starts at the all-zero vector and steps through every vector exactly
/// once in the configured significance order. The significance order
/// changes the sequence of vectors, never the set of vectors visited.
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<usize>,
    radix: usize,
    significance: Significance,
}

impl Odometer {
    /// Create a counter with `length` positions of the given radix
    pub fn new(radix: usize, length: usize, significance: Significance) -> Self {
        Self {
            digits: vec![0; length],
            radix,
            significance,
        }
    }

    /// Current digit vector
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Rewind to the all-zero vector
    pub fn reset(&mut self) {
        for digit in &mut self.digits {
            *digit = 0;
        }
    }

    /// Step to the next digit vector
    ///
    /// Returns false once the counter carries out of its most
    /// significant position, leaving the digits back at all zeros.
    pub fn advance(&mut self) -> bool {
        let length = self.digits.len();
        match self.significance {
            Significance::BigEndian => self.carry((0..length).rev()),
            Significance::LittleEndian => self.carry(0..length),
        }
    }

    fn carry(&mut self, positions: impl Iterator<Item = usize>) -> bool {
        for position in positions {
            if self.digits[position] + 1 < self.radix {
                self.digits[position] += 1;
                return true;
            }
            self.digits[position] = 0;
        }
        false
    }
}
