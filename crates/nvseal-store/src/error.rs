/// Errors from storage media and the record adapter.
///
/// An integrity mismatch is deliberately not represented here: it is the
/// boolean result of a verified read, never an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested range does not fit the medium.
    #[error("range {address:#x}+{len} exceeds medium capacity {capacity}")]
    OutOfBounds {
        address: u32,
        len: usize,
        capacity: usize,
    },

    /// A record's payload address overflowed the `u32` address space.
    #[error("address {address:#x}+{offset} overflows the address space")]
    AddressOverflow { address: u32, offset: usize },

    /// I/O error from a file-backed medium.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
