use bytemuck::Pod;

use crate::traits::ByteHash;

/// Knuth-style 32-bit rotate hash.
///
/// The accumulator is seeded with the input length, then each byte is mixed
/// in with `acc = ((acc << 5) ^ (acc >> 27)) ^ byte`. Because the two shift
/// halves never overlap, the mixing step is a rotate-left-by-5 -- a
/// bijection of the accumulator -- so any single-byte alteration changes the
/// final value. The length seed makes inputs that share a prefix but differ
/// in size hash differently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotateHash;

impl RotateHash {
    /// Hash a byte sequence without constructing an instance.
    pub fn hash(bytes: &[u8]) -> u32 {
        let mut acc = bytes.len() as u32;
        for &byte in bytes {
            acc = ((acc << 5) ^ (acc >> 27)) ^ u32::from(byte);
        }
        acc
    }

    /// Hash the raw byte view of a plain-old-data value.
    pub fn hash_value<T: Pod>(value: &T) -> u32 {
        Self::hash(bytemuck::bytes_of(value))
    }
}

impl ByteHash for RotateHash {
    type Value = u32;

    fn digest(&self, bytes: &[u8]) -> u32 {
        Self::hash(bytes)
    }
}
