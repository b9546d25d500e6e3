#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! opkit - stateless verification and decoding primitives
//!
//! Each primitive is a pure function over caller-supplied values, safe to call
//! from any number of threads at once. Nothing is cached or persisted.

// Fixed choices:
// - Hash: SHA3-256 (32-byte output)
// - VRF: ECVRF-EDWARDS25519-SHA512-TAI (RFC 9381), 80-byte proof, 64-byte output
// - Signature: Ed25519 (RFC 8032, strict)
// - Base64: RFC 4648 standard and URL-safe alphabets, optional padding
// - JSON: top-level keys only

pub mod errors;
pub mod ops;

pub use errors::OpError;
pub use opkit_block::{
    available_rounds, BlockError, BlockField, BlockHeader, BlockSeed, BlockSource, BlockValue,
    MAX_BLOCK_LOOKBACK,
};
pub use opkit_json::{extract, JsonError, JsonKind, JsonObject, JsonValue, RangeReason};
pub use opkit_primitives::{
    ct_eq, ct_eq_hash, decode, decode_standard, decode_url_safe, Alphabet, DecodeError, Hash256,
    ReplaceError,
};
pub use opkit_vrf::{
    proof_to_hash, verify, verify_fixed, Rejection, SigError, Suite, Verdict, VrfError, VrfPi,
    VrfPk, VrfY, VRF_ALGORAND_SUITE_NAME, VRF_PI_BYTES, VRF_PK_BYTES, VRF_SUITE_NAME, VRF_Y_BYTES,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
#[allow(clippy::missing_assert_message, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_flatten_into_taxonomy() {
        let blob = r#"{"string_key":"abc","uint_key":7}"#;
        assert!(matches!(
            ops::json_ref("{", "k", JsonKind::String),
            Err(OpError::Parse { .. })
        ));
        assert!(matches!(
            ops::json_ref(blob, "missing_key", JsonKind::String),
            Err(OpError::FieldNotFound { .. })
        ));
        assert!(matches!(
            ops::json_ref(blob, "string_key", JsonKind::Uint64),
            Err(OpError::TypeMismatch { .. })
        ));
        assert!(matches!(
            ops::json_ref(r#"{"n":-3}"#, "n", JsonKind::Uint64),
            Err(OpError::Range { reason: RangeReason::Negative, .. })
        ));
    }

    #[test]
    fn length_errors_are_malformed_input() {
        assert!(matches!(
            ops::vrf_verify(b"m", &[0u8; 79], &[0u8; 32]),
            Err(OpError::MalformedInput { field: "proof", expected: 80, got: 79 })
        ));
        assert!(matches!(
            ops::ed25519_verify_bare(b"m", &[0u8; 64], &[0u8; 33]),
            Err(OpError::MalformedInput { field: "public key", expected: 32, got: 33 })
        ));
    }

    #[test]
    fn verification_failure_is_not_an_error() {
        assert_eq!(ops::vrf_verify(b"m", &[0u8; 80], &[0u8; 32]).unwrap(), (false, None));
        assert_eq!(
            ops::vrf_verify_with(Suite::Algorand, b"m", &[0u8; 80], &[0u8; 32]).unwrap(),
            (false, None)
        );
    }

    #[test]
    fn other_errors_convert() {
        assert!(matches!(
            ops::base64_decode("@", Alphabet::Standard),
            Err(OpError::Decode(_))
        ));
        assert!(matches!(ops::replace(b"ab", 1, b"xy"), Err(OpError::OutOfBounds(_))));
    }
}
