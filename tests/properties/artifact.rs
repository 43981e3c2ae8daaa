//! Property tests for the artifact layout.

use proptest::prelude::*;

use shaderpack::{decode_literal, derive_symbol, ArtifactBuilder, HEADER};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: header, then exactly two lines per asset, and every array
    /// body decodes back to the asset bytes in input order.
    #[test]
    fn property_artifact_layout(
        payloads in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..64), 1..6)
    ) {
        let mut builder = ArtifactBuilder::new();
        for (i, bytes) in payloads.iter().enumerate() {
            builder.push(&derive_symbol(&format!("asset{}.bin", i)), bytes);
        }
        let text = builder.finish();

        prop_assert!(text.starts_with(HEADER));
        let body: Vec<&str> = text[HEADER.len()..].lines().collect();
        prop_assert_eq!(body.len(), payloads.len() * 2);

        for (i, bytes) in payloads.iter().enumerate() {
            let array = body[i * 2];
            let size = body[i * 2 + 1];
            let symbol = format!("asset{}_bin", i);

            let prefix = format!("const char {} [] = {{ ", symbol);
            prop_assert!(array.starts_with(&prefix), "{}", array);
            prop_assert!(array.ends_with(" };"), "{}", array);
            let literal = &array[prefix.len()..array.len() - " };".len()];
            prop_assert_eq!(&decode_literal(literal).unwrap(), bytes);

            prop_assert_eq!(
                size,
                format!("const unsigned {}_size = sizeof({});", symbol, symbol)
            );
        }
    }
}
