// opkit_vrf::vrf — ECVRF verifiers over edwards25519 with SHA-512
// RFC 9381 TAI (suite 0x03) and draft-irtf-cfrg-vrf-03 Elligator2 (suite 0x04,
// the Algorand VRF). Lengths are fixed; there is no prover here.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

use crate::VrfError;

pub const VRF_SUITE_NAME: &str = "ECVRF-EDWARDS25519-SHA512-TAI";
pub const VRF_ALGORAND_SUITE_NAME: &str = "ECVRF-ED25519-SHA512-Elligator2";
pub const VRF_PK_BYTES: usize = 32; // public key
pub const VRF_PI_BYTES: usize = 80; // proof π = Gamma(32) || c(16) || s(32)
pub const VRF_Y_BYTES: usize = 64; // output β

pub type VrfPk = [u8; VRF_PK_BYTES];
pub type VrfPi = [u8; VRF_PI_BYTES];
pub type VrfY = [u8; VRF_Y_BYTES];

const TAI_SUITE: u8 = 0x03;
const ELL2_SUITE: u8 = 0x04;
const ENCODE_TO_CURVE_DST_FRONT: u8 = 0x01;
const CHALLENGE_DST_FRONT: u8 = 0x02;
const PROOF_TO_HASH_DST_FRONT: u8 = 0x03;
const DST_BACK: u8 = 0x00;

const PT_LEN: usize = 32;
const C_LEN: usize = 16;

/// ECVRF cipher suite.
///
/// Both suites share the proof layout, the key and output sizes, and the
/// verification equations. They differ in hash-to-curve and in how the
/// challenge and output transcripts are framed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Suite {
    /// ECVRF-EDWARDS25519-SHA512-TAI, RFC 9381.
    #[default]
    RfcTai,
    /// ECVRF-ED25519-SHA512-Elligator2 from draft-irtf-cfrg-vrf-03, as
    /// deployed by Algorand. Small-order keys are always rejected.
    Algorand,
}

/// Why a well-formed (correct length) proof did not verify.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rejection {
    /// Public key is not a canonical Edwards point encoding.
    BadPublicKey,
    /// Public key has small order.
    SmallOrderPublicKey,
    /// Gamma is not a canonical Edwards point encoding.
    BadGamma,
    /// s is not reduced modulo the group order.
    ScalarOutOfRange,
    /// No counter in 0..=255 produced a curve point.
    HashToCurveExhausted,
    /// Recomputed challenge differs from the proof's c.
    ChallengeMismatch,
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::BadPublicKey => "malformed or non-canonical VRF public key",
            Self::SmallOrderPublicKey => "small-order VRF public key",
            Self::BadGamma => "malformed VRF proof point",
            Self::ScalarOutOfRange => "non-canonical VRF proof scalar",
            Self::HashToCurveExhausted => "hash-to-curve found no point",
            Self::ChallengeMismatch => "VRF challenge mismatch",
        })
    }
}

/// Outcome of verifying a correctly sized proof.
///
/// An invalid proof is an ordinary result, not an error: callers branch on it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    Valid(VrfY),
    Invalid(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The 64-byte VRF output, present only when valid.
    #[must_use]
    pub const fn output(&self) -> Option<&VrfY> {
        match self {
            Self::Valid(y) => Some(y),
            Self::Invalid(_) => None,
        }
    }

    /// `(valid, output)`; output is `None` exactly when `valid` is false.
    #[must_use]
    pub const fn into_parts(self) -> (bool, Option<VrfY>) {
        match self {
            Self::Valid(y) => (true, Some(y)),
            Self::Invalid(_) => (false, None),
        }
    }
}

impl From<Result<VrfY, Rejection>> for Verdict {
    fn from(r: Result<VrfY, Rejection>) -> Self {
        match r {
            Ok(y) => Self::Valid(y),
            Err(reason) => Self::Invalid(reason),
        }
    }
}

impl Suite {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RfcTai => VRF_SUITE_NAME,
            Self::Algorand => VRF_ALGORAND_SUITE_NAME,
        }
    }

    const fn suite_string(self) -> u8 {
        match self {
            Self::RfcTai => TAI_SUITE,
            Self::Algorand => ELL2_SUITE,
        }
    }

    // draft-03 transcripts omit the public key from the challenge and the
    // trailing 0x00 domain separator from both hashes.
    const fn is_rfc(self) -> bool {
        matches!(self, Self::RfcTai)
    }

    const fn rejects_small_order_keys(self) -> bool {
        match self {
            Self::RfcTai => cfg!(feature = "validate-key"),
            Self::Algorand => true,
        }
    }

    /// Verify proof `pi` for `alpha` under `vrf_pk`, with raw byte inputs.
    ///
    /// Only wrong input lengths are errors; every other failure is
    /// [`Verdict::Invalid`].
    pub fn verify(self, alpha: &[u8], pi: &[u8], vrf_pk: &[u8]) -> Result<Verdict, VrfError> {
        let pi: &VrfPi = pi.try_into().map_err(|_| VrfError::MalformedInput {
            field: "proof",
            expected: VRF_PI_BYTES,
            got: pi.len(),
        })?;
        let vrf_pk: &VrfPk = vrf_pk.try_into().map_err(|_| VrfError::MalformedInput {
            field: "public key",
            expected: VRF_PK_BYTES,
            got: vrf_pk.len(),
        })?;
        Ok(self.verify_fixed(vrf_pk, alpha, pi))
    }

    /// Verify proof `pi` for `alpha` under `vrf_pk`.
    #[must_use]
    pub fn verify_fixed(self, vrf_pk: &VrfPk, alpha: &[u8], pi: &VrfPi) -> Verdict {
        let verdict = Verdict::from(self.verify_beta(vrf_pk, alpha, pi));
        match &verdict {
            Verdict::Valid(_) => {
                tracing::trace!(suite = self.name(), alpha_len = alpha.len(), "vrf proof verified");
            }
            Verdict::Invalid(reason) => {
                tracing::debug!(
                    suite = self.name(),
                    alpha_len = alpha.len(),
                    %reason,
                    "vrf proof rejected"
                );
            }
        }
        verdict
    }

    /// ECVRF_verify (RFC 9381 §5.3, draft-03 §5.3); returns β on success.
    pub fn verify_beta(self, vrf_pk: &VrfPk, alpha: &[u8], pi: &VrfPi) -> Result<VrfY, Rejection> {
        let y = string_to_point(vrf_pk).ok_or(Rejection::BadPublicKey)?;
        if self.rejects_small_order_keys() && y.is_small_order() {
            return Err(Rejection::SmallOrderPublicKey);
        }

        let (gamma, c_bytes, s) = decode_proof(pi)?;
        let c = scalar_from_challenge(&c_bytes);

        let h = match self {
            Self::RfcTai => {
                encode_to_curve_tai(vrf_pk, alpha).ok_or(Rejection::HashToCurveExhausted)?
            }
            Self::Algorand => encode_to_curve_ell2(vrf_pk, alpha),
        };

        // U = s*B - c*Y
        let u = EdwardsPoint::vartime_double_scalar_mul_basepoint(&(-c), &y, &s);
        // V = s*H - c*Gamma
        let v = (h * s) - (gamma * c);

        let c_prime = self.challenge_generation(&y, [&h, &gamma, &u, &v]);
        if !bool::from(c_bytes.ct_eq(&c_prime)) {
            return Err(Rejection::ChallengeMismatch);
        }
        Ok(self.gamma_to_hash(&gamma))
    }

    /// ECVRF_proof_to_hash. Does not verify the proof.
    #[must_use]
    pub fn proof_to_hash(self, pi: &VrfPi) -> Option<VrfY> {
        decode_proof(pi).ok().map(|(gamma, _, _)| self.gamma_to_hash(&gamma))
    }

    // RFC 9381 §5.4.3 hashes (Y, H, Gamma, U, V); draft-03 drops Y.
    fn challenge_generation(self, y: &EdwardsPoint, points: [&EdwardsPoint; 4]) -> [u8; C_LEN] {
        let mut hasher = Sha512::new();
        hasher.update([self.suite_string(), CHALLENGE_DST_FRONT]);
        if self.is_rfc() {
            hasher.update(y.compress().as_bytes());
        }
        for p in points {
            hasher.update(p.compress().as_bytes());
        }
        if self.is_rfc() {
            hasher.update([DST_BACK]);
        }
        let digest = hasher.finalize();
        let mut c = [0u8; C_LEN];
        c.copy_from_slice(&digest[..C_LEN]);
        c
    }

    fn gamma_to_hash(self, gamma: &EdwardsPoint) -> VrfY {
        let mut hasher = Sha512::new();
        hasher.update([self.suite_string(), PROOF_TO_HASH_DST_FRONT]);
        hasher.update(gamma.mul_by_cofactor().compress().as_bytes());
        if self.is_rfc() {
            hasher.update([DST_BACK]);
        }
        let mut y = [0u8; VRF_Y_BYTES];
        y.copy_from_slice(&hasher.finalize());
        y
    }
}

/// [`Suite::verify`] under RFC 9381 TAI.
pub fn verify(alpha: &[u8], pi: &[u8], vrf_pk: &[u8]) -> Result<Verdict, VrfError> {
    Suite::RfcTai.verify(alpha, pi, vrf_pk)
}

/// [`Suite::verify_fixed`] under RFC 9381 TAI.
#[must_use]
pub fn verify_fixed(vrf_pk: &VrfPk, alpha: &[u8], pi: &VrfPi) -> Verdict {
    Suite::RfcTai.verify_fixed(vrf_pk, alpha, pi)
}

/// [`Suite::verify_beta`] under RFC 9381 TAI.
pub fn verify_beta(vrf_pk: &VrfPk, alpha: &[u8], pi: &VrfPi) -> Result<VrfY, Rejection> {
    Suite::RfcTai.verify_beta(vrf_pk, alpha, pi)
}

/// RFC 9381 §5.2 ECVRF_proof_to_hash. Does not verify the proof.
#[must_use]
pub fn proof_to_hash(pi: &VrfPi) -> Option<VrfY> {
    Suite::RfcTai.proof_to_hash(pi)
}

fn decode_proof(pi: &VrfPi) -> Result<(EdwardsPoint, [u8; C_LEN], Scalar), Rejection> {
    let mut gamma_bytes = [0u8; PT_LEN];
    gamma_bytes.copy_from_slice(&pi[..PT_LEN]);
    let gamma = string_to_point(&gamma_bytes).ok_or(Rejection::BadGamma)?;

    let mut c_bytes = [0u8; C_LEN];
    c_bytes.copy_from_slice(&pi[PT_LEN..PT_LEN + C_LEN]);

    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&pi[PT_LEN + C_LEN..]);
    let s = Option::<Scalar>::from(Scalar::from_canonical_bytes(s_bytes))
        .ok_or(Rejection::ScalarOutOfRange)?;

    Ok((gamma, c_bytes, s))
}

// c is 128 bits, always below the group order.
fn scalar_from_challenge(c: &[u8; C_LEN]) -> Scalar {
    let mut wide = [0u8; 32];
    wide[..C_LEN].copy_from_slice(c);
    Scalar::from_bytes_mod_order(wide)
}

// RFC 8032 §5.1.3 decoding; non-canonical encodings are rejected.
fn string_to_point(bytes: &[u8; PT_LEN]) -> Option<EdwardsPoint> {
    let point = CompressedEdwardsY(*bytes).decompress()?;
    (point.compress().as_bytes() == bytes).then_some(point)
}

// RFC 9381 §5.4.1.1 try-and-increment, salt = PK_string.
fn encode_to_curve_tai(salt: &VrfPk, alpha: &[u8]) -> Option<EdwardsPoint> {
    (0..=u8::MAX).find_map(|ctr| {
        let digest = Sha512::new()
            .chain_update([TAI_SUITE, ENCODE_TO_CURVE_DST_FRONT])
            .chain_update(salt)
            .chain_update(alpha)
            .chain_update([ctr, DST_BACK])
            .finalize();
        let mut candidate = [0u8; PT_LEN];
        candidate.copy_from_slice(&digest[..PT_LEN]);
        string_to_point(&candidate).map(|p| p.mul_by_cofactor())
    })
}

// draft-03 §5.4.1.2: the first 32 bytes of SHA512(suite || 0x01 || PK || alpha)
// with bit 255 cleared, mapped through Elligator2, times the cofactor.
//
// `nonspec_map_to_curve` is that map except it takes the sign of x from bit 255
// instead of fixing it to zero. Negating x negates the point, so the result is
// negated back when the bit is set. Elligator2 never yields u = -1, which lies
// on the twist, so the Montgomery to Edwards step inside cannot fail.
#[allow(deprecated)]
fn encode_to_curve_ell2(salt: &VrfPk, alpha: &[u8]) -> EdwardsPoint {
    let mut input = Vec::with_capacity(2 + PT_LEN + alpha.len());
    input.extend_from_slice(&[ELL2_SUITE, ENCODE_TO_CURVE_DST_FRONT]);
    input.extend_from_slice(salt);
    input.extend_from_slice(alpha);

    let h = EdwardsPoint::nonspec_map_to_curve::<Sha512>(&input);
    if Sha512::digest(&input)[31] & 0x80 == 0 {
        h
    } else {
        -h
    }
}
