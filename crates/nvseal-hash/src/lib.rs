//! Integrity hash functions for nvseal.
//!
//! This crate provides the short, fixed-width digests that `nvseal-store`
//! pairs with persisted records. None of them are cryptographic -- they are
//! corruption detectors for EEPROM/flash-class media, chosen for code size
//! and speed on small targets.
//!
//! # Hash Functions
//!
//! - [`RotateHash`] -- 32-bit Knuth-style rotate hash; detects all
//!   single-byte alterations and is sensitive to input length
//! - [`SumHash`] -- wrapping byte sum over a caller-chosen accumulator
//!   width; the cheapest option, blind to byte reordering
//! - [`Crc32Hash`] -- CRC32 (IEEE) via `crc32fast`; the recommended default
//!   for new records
//!
//! # Call Styles
//!
//! Every hash is usable two ways: as a held value (`let h = RotateHash;
//! h.digest(bytes)`) through the [`ByteHash`] trait, or without ever
//! constructing an instance (`RotateHash::hash(bytes)`).
//!
//! # Byte Views
//!
//! [`ByteHash::digest_value`] hashes the raw in-memory bytes of any
//! [`bytemuck::Pod`] value. The `Pod` bound statically rejects types with
//! padding, so a digest is always a deterministic function of the declared
//! fields.

pub mod crc;
pub mod rotate;
pub mod sum;
pub mod traits;
pub mod value;

// Re-export primary types at crate root for ergonomic imports.
pub use crc::Crc32Hash;
pub use rotate::RotateHash;
pub use sum::SumHash;
pub use traits::ByteHash;
pub use value::HashValue;
