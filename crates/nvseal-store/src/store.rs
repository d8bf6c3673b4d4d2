use bytemuck::Pod;
use nvseal_hash::{ByteHash, HashValue};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::traits::Medium;

/// Total footprint of a record holding a `T` sealed with hash `H`.
///
/// Callers laying out several records place each at the previous base
/// address plus this length.
pub const fn record_len<H: ByteHash, T>() -> usize {
    <H::Value as HashValue>::WIDTH + std::mem::size_of::<T>()
}

/// Hashed record storage over a raw medium.
///
/// Each record is the little-endian digest followed immediately by the
/// object's raw bytes (see the crate docs for the exact layout). Writing
/// issues two sequential raw puts with no atomicity between them; a write
/// torn between the segments is caught, probabilistically, by the next
/// verified read. Reading populates the caller's value unconditionally and
/// reports the digest comparison as a boolean.
pub struct HashedStore<M> {
    medium: M,
}

impl<M: Medium> HashedStore<M> {
    /// Wrap a raw medium.
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// The underlying medium.
    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Mutable access to the underlying medium, e.g. for raw patching.
    pub fn medium_mut(&mut self) -> &mut M {
        &mut self.medium
    }

    /// Unwrap back into the raw medium.
    pub fn into_inner(self) -> M {
        self.medium
    }

    /// Write `value` at `address` sealed with the hash chosen by type.
    pub fn put_hashed<H, T>(&mut self, address: u32, value: &T) -> StoreResult<()>
    where
        H: ByteHash + Default,
        T: Pod,
    {
        self.put_hashed_with(address, value, &H::default())
    }

    /// Write `value` at `address` sealed with the given hash instance.
    pub fn put_hashed_with<H, T>(&mut self, address: u32, value: &T, hash: &H) -> StoreResult<()>
    where
        H: ByteHash,
        T: Pod,
    {
        let digest = hash.digest_value(value);
        let payload_address = payload_address::<H>(address)?;

        self.medium.put(address, digest.to_le_bytes().as_ref())?;
        self.medium.put(payload_address, bytemuck::bytes_of(value))?;

        debug!(address, len = record_len::<H, T>(), "stored hashed record");
        Ok(())
    }

    /// Read the record at `address` into `value` and verify it, with the
    /// hash chosen by type.
    ///
    /// Returns `Ok(true)` when the recomputed digest matches the stored
    /// one. `value` holds the bytes found in storage either way; check the
    /// boolean before trusting them.
    pub fn get_verified<H, T>(&mut self, address: u32, value: &mut T) -> StoreResult<bool>
    where
        H: ByteHash + Default,
        T: Pod,
    {
        self.get_verified_with(address, value, &H::default())
    }

    /// Read the record at `address` into `value` and verify it with the
    /// given hash instance.
    pub fn get_verified_with<H, T>(
        &mut self,
        address: u32,
        value: &mut T,
        hash: &H,
    ) -> StoreResult<bool>
    where
        H: ByteHash,
        T: Pod,
    {
        let payload_address = payload_address::<H>(address)?;

        let mut encoded = <H::Value as HashValue>::Bytes::default();
        self.medium.get(address, encoded.as_mut())?;
        self.medium.get(payload_address, bytemuck::bytes_of_mut(value))?;

        let stored = H::Value::from_le_bytes(encoded);
        let computed = hash.digest_value(value);
        if stored == computed {
            debug!(address, "verified record");
            Ok(true)
        } else {
            warn!(address, ?stored, ?computed, "record digest mismatch");
            Ok(false)
        }
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for HashedStore<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedStore")
            .field("medium", &self.medium)
            .finish()
    }
}

fn payload_address<H: ByteHash>(address: u32) -> StoreResult<u32> {
    let width = <H::Value as HashValue>::WIDTH;
    address
        .checked_add(width as u32)
        .ok_or(StoreError::AddressOverflow {
            address,
            offset: width,
        })
}
