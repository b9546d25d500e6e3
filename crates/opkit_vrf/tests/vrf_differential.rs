// Cross-check against the vrf-rfc9381 crate on the RFC vectors and their corruptions.
use hex_literal::hex;
use opkit_vrf::{verify_fixed, VrfPi, VrfPk, VrfY};
use sha2::Sha512;
use vrf_rfc9381::ec::edwards25519::{tai::EdVrfEdwards25519TaiPublicKey, EdVrfProof};
use vrf_rfc9381::Verifier as _;

fn reference(vk: &VrfPk, alpha: &[u8], pi: &VrfPi) -> Option<VrfY> {
    let vk = EdVrfEdwards25519TaiPublicKey::from_slice(vk).ok()?;
    let proof = <EdVrfProof as vrf_rfc9381::Proof<Sha512>>::decode_pi(pi).ok()?;
    let out = vk.verify(alpha, proof).ok()?;
    let mut y = [0u8; 64];
    y.copy_from_slice(out.as_slice());
    Some(y)
}

const CASES: &[(VrfPk, &[u8], VrfPi)] = &[
    (
        hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
        b"",
        hex!("8657106690b5526245a92b003bb079ccd1a92130477671f6fc01ad16f26f723f26f8a57ccaed74ee1b190bed1f479d9727d2d0f9b005a6e456a35d4fb0daab1268a1b0db10836d9826a528ca76567805"),
    ),
    (
        hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c"),
        &hex!("72"),
        hex!("f3141cd382dc42909d19ec5110469e4feae18300e94f304590abdced48aed5933bf0864a62558b3ed7f2fea45c92a465301b3bbf5e3e54ddf2d935be3b67926da3ef39226bbc355bdc9850112c8f4b02"),
    ),
    (
        hex!("fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025"),
        &hex!("af82"),
        hex!("9bc0f79119cc5604bf02d23b4caede71393cedfbb191434dd016d30177ccbf8096bb474e53895c362d8628ee9f9ea3c0e52c7a5c691b6c18c9979866568add7a2d41b00b05081ed0f58ee5e31b3a970e"),
    ),
];

#[test]
fn agrees_with_reference_on_vectors() {
    for (i, (vk, alpha, pi)) in CASES.iter().enumerate() {
        let ours = verify_fixed(vk, alpha, pi).output().copied();
        assert!(ours.is_some(), "case {i}");
        assert_eq!(ours, reference(vk, alpha, pi), "case {i}");
    }
}

#[test]
fn agrees_with_reference_on_corrupted_proofs() {
    for (i, (vk, alpha, pi)) in CASES.iter().enumerate() {
        for byte_idx in (0..pi.len()).step_by(7) {
            let mut corrupted = *pi;
            corrupted[byte_idx] ^= 0x10;
            let ours = verify_fixed(vk, alpha, &corrupted).output().copied();
            assert_eq!(ours, reference(vk, alpha, &corrupted), "case {i} byte {byte_idx}");
            assert!(ours.is_none(), "case {i} byte {byte_idx}");
        }
    }
}
