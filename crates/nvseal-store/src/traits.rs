use crate::error::StoreResult;

/// Byte-addressable persistent storage medium.
///
/// This is the external-collaborator seam: an EEPROM/flash driver, an
/// in-RAM buffer, or a host-side image file. Implementations must satisfy:
///
/// - `put` transfers all of `bytes` to `[address, address + bytes.len())`
///   before returning; `get` fills all of `out` from the same range.
/// - Address validity is the medium's responsibility. The record adapter
///   performs no bounds checking of its own.
/// - Failures are reported as errors and are never swallowed. The adapter
///   propagates them untouched.
/// - Calls are blocking; the medium's own timing model governs.
pub trait Medium {
    /// Write raw bytes starting at `address`.
    fn put(&mut self, address: u32, bytes: &[u8]) -> StoreResult<()>;

    /// Read `out.len()` bytes starting at `address` into `out`.
    fn get(&mut self, address: u32, out: &mut [u8]) -> StoreResult<()>;

    /// Total capacity in bytes, if the backend can report one.
    fn capacity(&self) -> Option<usize> {
        None
    }
}
