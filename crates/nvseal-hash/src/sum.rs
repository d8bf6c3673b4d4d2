use std::marker::PhantomData;

use bytemuck::Pod;

use crate::traits::ByteHash;
use crate::value::HashValue;

/// Summation hash over a caller-chosen accumulator width.
///
/// Seeds at zero and adds each byte's unsigned value, wrapping silently at
/// the accumulator's width. This is the cheapest digest available and the
/// weakest: it cannot see byte reordering or symmetric multi-byte
/// alterations (a byte-pair swap sums identically). Use it for approximate
/// integrity checks where code size matters more than detection strength;
/// prefer [`RotateHash`](crate::RotateHash) or
/// [`Crc32Hash`](crate::Crc32Hash) otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SumHash<A = u32>(PhantomData<A>);

impl<A: HashValue> SumHash<A> {
    /// A summation hash instance for accumulator width `A`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Hash a byte sequence without constructing an instance.
    pub fn hash(bytes: &[u8]) -> A {
        let mut acc = A::default();
        for &byte in bytes {
            acc = acc.accumulate(byte);
        }
        acc
    }

    /// Hash the raw byte view of a plain-old-data value.
    pub fn hash_value<T: Pod>(value: &T) -> A {
        Self::hash(bytemuck::bytes_of(value))
    }
}

impl<A: HashValue> ByteHash for SumHash<A> {
    type Value = A;

    fn digest(&self, bytes: &[u8]) -> A {
        Self::hash(bytes)
    }
}
