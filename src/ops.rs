//! Opcode-shaped entry points.
//!
//! Each function is one primitive with its error flattened into [`OpError`].
//! The caller supplies every input and owns every output.

use opkit_block::{BlockField, BlockSource, BlockValue};
use opkit_json::{JsonKind, JsonValue};
use opkit_primitives::{Alphabet, Hash256};
use opkit_vrf::{Suite, VrfY};

use crate::errors::OpError;

/// Decode base64 text in the given alphabet.
pub fn base64_decode(input: &str, alphabet: Alphabet) -> Result<Vec<u8>, OpError> {
    Ok(opkit_primitives::decode(input, alphabet)?)
}

/// SHA3-256 digest.
#[must_use]
pub fn sha3_256(input: &[u8]) -> Hash256 {
    opkit_primitives::sha3_256(input)
}

/// Read top-level field `key` of the JSON object in `blob` as `kind`.
pub fn json_ref(blob: &str, key: &str, kind: JsonKind) -> Result<JsonValue, OpError> {
    Ok(opkit_json::extract(blob, key, kind)?)
}

/// Verify an ECVRF-EDWARDS25519-SHA512-TAI proof.
///
/// Returns `(true, Some(output))` or `(false, None)`. Only wrong proof or key
/// lengths are errors.
pub fn vrf_verify(
    message: &[u8],
    proof: &[u8],
    public_key: &[u8],
) -> Result<(bool, Option<VrfY>), OpError> {
    vrf_verify_with(Suite::RfcTai, message, proof, public_key)
}

/// [`vrf_verify`] under an explicit suite, e.g. [`Suite::Algorand`].
pub fn vrf_verify_with(
    suite: Suite,
    message: &[u8],
    proof: &[u8],
    public_key: &[u8],
) -> Result<(bool, Option<VrfY>), OpError> {
    Ok(suite.verify(message, proof, public_key)?.into_parts())
}

/// Verify an Ed25519 signature over `data` without any domain prefix.
pub fn ed25519_verify_bare(data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool, OpError> {
    Ok(opkit_vrf::ed25519::verify_bare(data, signature, public_key)?)
}

/// Overwrite `target[start..start + replacement.len()]`, keeping the length.
pub fn replace(target: &[u8], start: usize, replacement: &[u8]) -> Result<Vec<u8>, OpError> {
    Ok(opkit_primitives::replace(target, start, replacement)?)
}

/// Read `field` of the header at `round`.
pub fn block<S: BlockSource + ?Sized>(
    src: &S,
    round: u64,
    field: BlockField,
) -> Result<BlockValue, OpError> {
    Ok(opkit_block::block_field(src, round, field)?)
}
