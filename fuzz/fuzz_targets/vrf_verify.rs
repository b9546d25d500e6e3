#![no_main]

use libfuzzer_sys::fuzz_target;
use opkit::{Suite, VRF_PI_BYTES, VRF_PK_BYTES};

fuzz_target!(|data: &[u8]| {
    // Layout: pk(32) || proof(80) || message(rest); shorter inputs exercise the length checks.
    let pk_end = data.len().min(VRF_PK_BYTES);
    let pi_end = data.len().min(VRF_PK_BYTES + VRF_PI_BYTES);
    let (pk, rest) = data.split_at(pk_end);
    let (pi, msg) = rest.split_at(pi_end - pk_end);
    for suite in [Suite::RfcTai, Suite::Algorand] {
        match suite.verify(msg, pi, pk) {
            Ok(verdict) => assert_eq!(verdict.is_valid(), verdict.output().is_some()),
            Err(_) => assert!(pk.len() != VRF_PK_BYTES || pi.len() != VRF_PI_BYTES),
        }
    }
});
