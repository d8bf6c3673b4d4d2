//! Hashed record storage for byte-addressable persistent media.
//!
//! This crate pairs every persisted value with a short integrity digest so
//! that read-back can tell whether the bytes found in storage still match
//! what was written (corruption, torn writes, or never-written regions all
//! surface as a verification failure).
//!
//! # On-medium layout
//!
//! A record at base address `a` occupies exactly
//!
//! ```text
//! [a        .. a+W) digest, little-endian
//! [a+W      .. a+W+size_of::<T>()) object bytes
//! ```
//!
//! where `W` is the digest width. No length prefix, no version tag, no
//! magic number. Callers lay out adjacent records with [`record_len`].
//!
//! # Components
//!
//! - [`Medium`] -- the seam to the persistent medium: raw `put`/`get` of
//!   bytes at a `u32` address. Address validity is the medium's business.
//! - [`InMemoryMedium`] -- fixed-capacity RAM medium for tests and host
//!   embedding; fresh instances read as erased flash (`0xFF`)
//! - [`FileMedium`] -- file-backed EEPROM image on the host
//! - [`HashedStore`] -- the adapter: `put_hashed` writes digest then
//!   object, `get_verified` reads both back and reports the match
//!
//! # Design Rules
//!
//! 1. The two segment writes of a record are sequential and independent;
//!    nothing makes them atomic. A torn record is caught, probabilistically,
//!    by the next verified read.
//! 2. A verified read ALWAYS populates the caller's value with whatever
//!    bytes were found; check the boolean before trusting them.
//! 3. Integrity mismatch is a boolean, never an error. Medium failures are
//!    errors and propagate untouched.
//! 4. Single-threaded by contract: no locking discipline exists around the
//!    two-access sequences.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::{FileMedium, SyncMode};
pub use memory::InMemoryMedium;
pub use store::{record_len, HashedStore};
pub use traits::Medium;
