//! Bare Ed25519 verification over raw data (RFC 8032, strict).

use ed25519_dalek::{Signature, VerifyingKey};

use crate::SigError;

pub const ED25519_PK_BYTES: usize = 32;
pub const ED25519_SIG_BYTES: usize = 64;

/// Verify `signature` over `data` under `public_key`.
///
/// Wrong lengths are errors; a bad key or signature is `Ok(false)`.
pub fn verify_bare(data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool, SigError> {
    let sig: &[u8; ED25519_SIG_BYTES] =
        signature.try_into().map_err(|_| SigError::MalformedInput {
            field: "signature",
            expected: ED25519_SIG_BYTES,
            got: signature.len(),
        })?;
    let pk: &[u8; ED25519_PK_BYTES] =
        public_key.try_into().map_err(|_| SigError::MalformedInput {
            field: "public key",
            expected: ED25519_PK_BYTES,
            got: public_key.len(),
        })?;
    Ok(verify_fixed(data, sig, pk))
}

/// Fixed-size form of [`verify_bare`].
#[must_use]
pub fn verify_fixed(
    data: &[u8],
    signature: &[u8; ED25519_SIG_BYTES],
    public_key: &[u8; ED25519_PK_BYTES],
) -> bool {
    let Ok(vk) = VerifyingKey::from_bytes(public_key) else {
        tracing::debug!("ed25519 public key rejected");
        return false;
    };
    let sig = Signature::from_bytes(signature);
    let ok = vk.verify_strict(data, &sig).is_ok();
    if !ok {
        tracing::debug!(data_len = data.len(), "ed25519 signature rejected");
    }
    ok
}

#[cfg(test)]
#[allow(clippy::missing_assert_message, clippy::unwrap_used)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // RFC 8032 §7.1 TEST 1.
    const PK: [u8; 32] = hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");
    const SIG: [u8; 64] = hex!(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155"
        "5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
    );

    #[test]
    fn rfc8032_test1() {
        assert!(verify_fixed(b"", &SIG, &PK));
        assert!(!verify_fixed(b"x", &SIG, &PK));
    }

    #[test]
    fn lengths_are_checked() {
        assert!(matches!(
            verify_bare(b"", &SIG[..63], &PK),
            Err(SigError::MalformedInput { field: "signature", got: 63, .. })
        ));
        assert!(matches!(
            verify_bare(b"", &SIG, &PK[..31]),
            Err(SigError::MalformedInput { field: "public key", got: 31, .. })
        ));
        assert!(verify_bare(b"", &SIG, &PK).unwrap());
    }

    #[test]
    fn garbage_key_is_false() {
        assert!(!verify_fixed(b"", &SIG, &[0xff; 32]));
        assert!(!verify_fixed(b"", &[0u8; 64], &PK));
    }
}
