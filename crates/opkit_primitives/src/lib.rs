#![forbid(unsafe_code)]
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::multiple_crate_versions
)]

//! opkit primitives: base64 decoding, SHA3-256, byte replacement.
//
// Everything here is a pure value-in/value-out function:
//
// - Base64 decoding over the standard and URL-safe alphabets (strict trailing bits)
// - SHA3-256 over arbitrary byte strings
// - Constant-time equality helpers for digests and byte strings
// - Fixed-length byte replacement

use sha3::{Digest, Sha3_256};
use subtle::ConstantTimeEq;

/// 32-byte hash (SHA3-256 output).
pub type Hash256 = [u8; constants::HASH_BYTES];

pub mod bytes;
pub mod codec;
pub mod constants;

pub use bytes::{replace, ReplaceError};
pub use codec::{decode, decode_standard, decode_url_safe, Alphabet, DecodeError};

/// SHA3-256 of `input`.
#[must_use]
pub fn sha3_256(input: &[u8]) -> Hash256 {
    let mut hasher = Sha3_256::new();
    hasher.update(input);
    let digest = hasher.finalize();
    let mut out = [0u8; constants::HASH_BYTES];
    out.copy_from_slice(&digest);
    out
}

/// Constant-time equality for two 32-byte hashes.
#[must_use]
pub fn ct_eq_hash(a: &Hash256, b: &Hash256) -> bool {
    a.ct_eq(b).into()
}

/// Equality of two byte strings, constant-time in their contents.
///
/// Differing lengths return `false` immediately; only the length leaks.
#[must_use]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
