use std::ops::Range;

use crate::error::{StoreError, StoreResult};
use crate::traits::Medium;

/// Byte value of an erased cell, matching EEPROM/NOR-flash parts.
const ERASED: u8 = 0xFF;

/// Fixed-capacity in-memory medium.
///
/// Intended for tests and host-side embedding. Fresh instances are filled
/// with `0xFF` so a read of a never-written region looks like erased
/// hardware and fails verification with high probability.
pub struct InMemoryMedium {
    cells: Vec<u8>,
}

impl InMemoryMedium {
    /// Create a medium of `capacity` bytes, all erased.
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: vec![ERASED; capacity],
        }
    }

    /// Overwrite every cell with `byte`.
    pub fn fill(&mut self, byte: u8) {
        self.cells.fill(byte);
    }

    /// The full cell contents, for inspection in tests.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    fn span(&self, address: u32, len: usize) -> StoreResult<Range<usize>> {
        let start = address as usize;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.cells.len())
            .ok_or(StoreError::OutOfBounds {
                address,
                len,
                capacity: self.cells.len(),
            })?;
        Ok(start..end)
    }
}

impl Medium for InMemoryMedium {
    fn put(&mut self, address: u32, bytes: &[u8]) -> StoreResult<()> {
        let span = self.span(address, bytes.len())?;
        self.cells[span].copy_from_slice(bytes);
        Ok(())
    }

    fn get(&mut self, address: u32, out: &mut [u8]) -> StoreResult<()> {
        let span = self.span(address, out.len())?;
        out.copy_from_slice(&self.cells[span]);
        Ok(())
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.cells.len())
    }
}

impl std::fmt::Debug for InMemoryMedium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryMedium")
            .field("capacity", &self.cells.len())
            .finish()
    }
}
