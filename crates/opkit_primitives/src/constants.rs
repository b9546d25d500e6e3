#![forbid(unsafe_code)]

/// SHA3-256 digest width.
pub const HASH_BYTES: usize = 32;

/// Padding character shared by both base64 alphabets.
pub const BASE64_PAD: u8 = b'=';
