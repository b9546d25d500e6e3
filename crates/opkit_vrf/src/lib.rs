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
    clippy::multiple_crate_versions
)]

//! opkit verifiers
//!
//! - [`vrf`]: ECVRF proof verification for RFC 9381 TAI and the Algorand
//!   Elligator2 suite (see [`Suite`]), returning a [`Verdict`] rather than an
//!   error for proofs that do not verify.
//! - [`ed25519`]: bare Ed25519 signature verification over raw bytes.
//!
//! Public inputs only: no secret keys are handled, so the curve arithmetic is
//! variable-time. The final challenge comparison is constant-time.

use thiserror::Error;

pub mod ed25519;
pub mod vrf;

pub use vrf::{
    proof_to_hash, verify, verify_beta, verify_fixed, Rejection, Suite, Verdict, VrfPi, VrfPk,
    VrfY, VRF_ALGORAND_SUITE_NAME, VRF_PI_BYTES, VRF_PK_BYTES, VRF_SUITE_NAME, VRF_Y_BYTES,
};

/// Structural input errors of the VRF verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VrfError {
    #[error("malformed {field}: expected {expected} bytes, got {got}")]
    MalformedInput {
        field: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Structural input errors of the signature verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SigError {
    #[error("malformed {field}: expected {expected} bytes, got {got}")]
    MalformedInput {
        field: &'static str,
        expected: usize,
        got: usize,
    },
}
