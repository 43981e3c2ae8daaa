#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(basename) = std::str::from_utf8(data) {
        let symbol = shaderpack::derive_symbol(basename);
        assert!(shaderpack::is_valid_identifier(symbol.as_str()));
    }
});
