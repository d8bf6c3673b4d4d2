use bytemuck::Pod;

use crate::traits::ByteHash;

/// CRC32 (IEEE) digest via `crc32fast`.
///
/// The strongest of the available digests and the recommended default for
/// new records. [`RotateHash`](crate::RotateHash) and
/// [`SumHash`](crate::SumHash) remain for records written with the original
/// layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc32Hash;

impl Crc32Hash {
    /// Hash a byte sequence without constructing an instance.
    pub fn hash(bytes: &[u8]) -> u32 {
        crc32fast::hash(bytes)
    }

    /// Hash the raw byte view of a plain-old-data value.
    pub fn hash_value<T: Pod>(value: &T) -> u32 {
        Self::hash(bytemuck::bytes_of(value))
    }
}

impl ByteHash for Crc32Hash {
    type Value = u32;

    fn digest(&self, bytes: &[u8]) -> u32 {
        Self::hash(bytes)
    }
}
