#![no_main]

use libfuzzer_sys::fuzz_target;
use opkit::{decode, Alphabet};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else { return };
    let _ = decode(text, Alphabet::Standard);
    let _ = decode(text, Alphabet::UrlSafe);
});
