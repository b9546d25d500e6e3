#![no_main]

use libfuzzer_sys::fuzz_target;
use opkit::{JsonKind, JsonObject};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else { return };
    let Ok(obj) = JsonObject::parse(text) else { return };
    for key in ["string_key", "uint_key", "obj_key", ""] {
        for kind in [JsonKind::String, JsonKind::Uint64, JsonKind::Object] {
            if let Ok(opkit::JsonValue::Object(nested)) = obj.get(key, kind) {
                // Re-serialized objects must parse again.
                assert!(JsonObject::parse(&nested).is_ok());
            }
        }
    }
});
