//! Fixed-width record rendering

use super::Alphabet;

/// Renders digit vectors into a reusable newline-terminated record
///
/// The record is always `length + 1` bytes: one symbol byte per
/// position in left-to-right position order, then a line feed. The
/// buffer is allocated once and overwritten on every call.
pub struct Renderer {
    record: Vec<u8>,
}

impl Renderer {
    /// Allocate a record buffer for candidates of the given length
    pub fn new(length: usize) -> Self {
        let mut record = vec![0u8; length + 1];
        record[length] = b'\n';
        Self { record }
    }

    /// Fill the record from a digit vector and hand back its bytes
    ///
    /// The digit vector must be as long as the record was sized for.
    pub fn record(&mut self, alphabet: &Alphabet, digits: &[usize]) -> &[u8] {
        for (slot, &digit) in self.record.iter_mut().zip(digits) {
            *slot = alphabet.symbol(digit);
        }
        &self.record
    }
}
