#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Encoding then decoding must be lossless for any payload
    let text = shaderpack::encode_bytes(data);
    assert_eq!(shaderpack::decode_literal(&text).ok().as_deref(), Some(data));

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = shaderpack::decode_literal(text);
    }
});
