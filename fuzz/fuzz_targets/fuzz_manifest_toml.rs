#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing should never panic
        let _ = toml::from_str::<shaderpack::Manifest>(content);
        let _ = shaderpack::config::parse_manifest(content, std::path::Path::new("fuzz.toml"));
    }
});
