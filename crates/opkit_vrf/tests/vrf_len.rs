use opkit_vrf::{verify, VrfError, VRF_PI_BYTES, VRF_PK_BYTES};

#[test]
fn wrong_proof_length_is_malformed_input() {
    let vk = [2u8; VRF_PK_BYTES];
    for len in [0, 1, VRF_PI_BYTES - 1, VRF_PI_BYTES + 1, 100] {
        let pi = vec![0u8; len];
        assert_eq!(
            verify(b"alpha", &pi, &vk),
            Err(VrfError::MalformedInput {
                field: "proof",
                expected: VRF_PI_BYTES,
                got: len
            }),
            "proof length {len}"
        );
    }
}

#[test]
fn wrong_key_length_is_malformed_input() {
    let pi = [0u8; VRF_PI_BYTES];
    for len in [0, VRF_PK_BYTES - 1, VRF_PK_BYTES + 1, 64] {
        let vk = vec![0u8; len];
        assert!(
            matches!(
                verify(b"alpha", &pi, &vk),
                Err(VrfError::MalformedInput { field: "public key", got, .. }) if got == len
            ),
            "key length {len}"
        );
    }
}

#[test]
fn correct_lengths_never_error() {
    // Invalid content, valid sizes: a verdict, not an error.
    let verdict = verify(b"", &[0u8; VRF_PI_BYTES], &[3u8; VRF_PK_BYTES]).unwrap();
    assert!(!verdict.is_valid());
}

#[test]
fn message_length_is_unconstrained() {
    let long = vec![0x5au8; 1 << 16];
    let verdict = verify(&long, &[0u8; VRF_PI_BYTES], &[3u8; VRF_PK_BYTES]).unwrap();
    assert!(!verdict.is_valid());
}
