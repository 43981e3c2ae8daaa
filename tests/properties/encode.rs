//! Property tests for byte literal encoding.

use proptest::prelude::*;

use shaderpack::encode::GROUP_WIDTH;
use shaderpack::{decode_literal, encode_bytes};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decoding an encoded payload yields the original bytes.
    #[test]
    fn property_encode_round_trips(raw in proptest::collection::vec(any::<u8>(), 0..512)) {
        let text = encode_bytes(&raw);
        prop_assert_eq!(decode_literal(&text).unwrap(), raw);
    }

    /// PROPERTY: one fixed-width group per byte, nothing else.
    #[test]
    fn property_one_group_per_byte(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
        let text = encode_bytes(&raw);
        prop_assert_eq!(text.len(), raw.len() * GROUP_WIDTH);
        prop_assert_eq!(text.matches("0x").count(), raw.len());
        prop_assert!(!text.chars().any(|c| c.is_ascii_whitespace() || c.is_ascii_uppercase()));
    }

    /// PROPERTY: decode never panics on arbitrary text.
    #[test]
    fn property_decode_never_panics(text in "\\PC{0,64}") {
        let _ = decode_literal(&text);
    }
}
