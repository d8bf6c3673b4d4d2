use bytemuck::Pod;

use crate::value::HashValue;

/// A digest over a byte sequence.
///
/// This is the hashing capability the store is generic over. Implementations
/// must be pure: the result is a function of the input bytes alone, with no
/// side effects, and is defined for any length including zero (an empty
/// input degenerates to the function's seed value).
///
/// Bytes are consumed strictly in increasing address order, so two calls
/// over the same byte sequence always agree.
pub trait ByteHash {
    /// The fixed-width value this hash produces.
    type Value: HashValue;

    /// Digest a byte sequence.
    fn digest(&self, bytes: &[u8]) -> Self::Value;

    /// Digest the raw in-memory bytes of a plain-old-data value.
    ///
    /// The `Pod` bound guarantees the type has no padding, so the digest
    /// covers exactly the declared fields and is deterministic across
    /// logically equal values.
    fn digest_value<T: Pod>(&self, value: &T) -> Self::Value {
        self.digest(bytemuck::bytes_of(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteHash, Crc32Hash, RotateHash, SumHash};

    #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
    #[repr(C)]
    struct Reading {
        sensor: u16,
        raw: u16,
        scaled: u32,
    }

    #[test]
    fn digest_value_equals_digest_of_byte_view() {
        let reading = Reading {
            sensor: 3,
            raw: 0x0FA2,
            scaled: 40_010,
        };
        let bytes = bytemuck::bytes_of(&reading);

        assert_eq!(RotateHash.digest_value(&reading), RotateHash.digest(bytes));
        assert_eq!(Crc32Hash.digest_value(&reading), Crc32Hash.digest(bytes));
        assert_eq!(
            SumHash::<u16>::new().digest_value(&reading),
            SumHash::<u16>::new().digest(bytes)
        );
    }

    #[test]
    fn empty_input_digests_to_seed() {
        // Zero-length input degenerates to the seed: the rotate hash seeds
        // with the byte count (0), the sum hash with zero.
        assert_eq!(RotateHash.digest(&[]), 0);
        assert_eq!(SumHash::<u32>::new().digest(&[]), 0);
    }
}
