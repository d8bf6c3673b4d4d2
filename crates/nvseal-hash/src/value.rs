use std::fmt;

/// A fixed-width unsigned value produced by a hash function.
///
/// Implementations exist for `u8`, `u16`, `u32`, and `u64`. The store lays
/// digests down on the medium in little-endian byte order regardless of the
/// host, so images are portable.
pub trait HashValue: Copy + Eq + fmt::Debug + Default {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// The little-endian encoding, `[u8; Self::WIDTH]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Encode as little-endian bytes.
    fn to_le_bytes(self) -> Self::Bytes;

    /// Decode from little-endian bytes.
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Add one byte's unsigned value, wrapping on overflow.
    ///
    /// This is the accumulation step of [`SumHash`](crate::SumHash); the
    /// wrap is silent per the accumulator's fixed width.
    fn accumulate(self, byte: u8) -> Self;
}

macro_rules! impl_hash_value {
    ($($ty:ty),* $(,)?) => {$(
        impl HashValue for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            type Bytes = [u8; std::mem::size_of::<$ty>()];

            fn to_le_bytes(self) -> Self::Bytes {
                <$ty>::to_le_bytes(self)
            }

            fn from_le_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_le_bytes(bytes)
            }

            fn accumulate(self, byte: u8) -> Self {
                self.wrapping_add(byte as $ty)
            }
        }
    )*};
}

impl_hash_value!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_type_sizes() {
        assert_eq!(<u8 as HashValue>::WIDTH, 1);
        assert_eq!(<u16 as HashValue>::WIDTH, 2);
        assert_eq!(<u32 as HashValue>::WIDTH, 4);
        assert_eq!(<u64 as HashValue>::WIDTH, 8);
    }

    #[test]
    fn little_endian_round_trip() {
        let value: u32 = 0xDEAD_BEEF;
        let bytes = value.to_le_bytes();
        assert_eq!(bytes, [0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(<u32 as HashValue>::from_le_bytes(bytes), value);
    }

    #[test]
    fn accumulate_wraps_at_width() {
        let acc: u8 = 0xFF;
        assert_eq!(acc.accumulate(1), 0);

        let acc: u16 = 0xFFFF;
        assert_eq!(acc.accumulate(2), 1);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(<u32 as Default>::default(), 0);
        assert_eq!(<u8 as Default>::default(), 0);
    }
}
