//! Property tests for symbol derivation.

use proptest::prelude::*;

use shaderpack::{derive_symbol, is_reserved_word, is_valid_identifier};

fn identifier_like() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,24}").unwrap()
}

fn keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "int", "float", "default", "sizeof", "const", "while", "and_eq", "_Bool", "char8_t",
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any basename yields a legal identifier.
    #[test]
    fn property_symbol_is_always_identifier(basename in "\\PC{0,32}") {
        let symbol = derive_symbol(&basename);
        prop_assert!(
            is_valid_identifier(symbol.as_str()),
            "{:?} derived {:?}",
            basename,
            symbol.as_str()
        );
    }

    /// PROPERTY: names that are already identifiers pass through unchanged.
    #[test]
    fn property_identifiers_are_unchanged(
        name in identifier_like().prop_filter("not a keyword", |n| !is_reserved_word(n))
    ) {
        let symbol = derive_symbol(&name);
        prop_assert_eq!(symbol.as_str(), name.as_str());
    }

    /// PROPERTY: keywords are never emitted as-is.
    #[test]
    fn property_keywords_are_suffixed(word in keyword()) {
        let symbol = derive_symbol(word);
        prop_assert_eq!(symbol.as_str(), format!("{}_", word));
        prop_assert!(is_valid_identifier(symbol.as_str()));
    }

    /// PROPERTY: `stem.ext` maps to `stem_ext`.
    #[test]
    fn property_dot_becomes_underscore(
        (stem, ext) in (identifier_like(), "[a-z]{1,6}")
            .prop_filter("not a keyword", |(s, e)| !is_reserved_word(&format!("{}_{}", s, e)))
    ) {
        let basename = format!("{}.{}", stem, ext);
        let symbol = derive_symbol(&basename);
        prop_assert_eq!(symbol.as_str(), format!("{}_{}", stem, ext));
    }

    /// PROPERTY: the size name is the symbol plus `_size`.
    #[test]
    fn property_size_name_suffix(basename in "[A-Za-z0-9._-]{1,24}") {
        let symbol = derive_symbol(&basename);
        prop_assert_eq!(symbol.size_name(), format!("{}_size", symbol));
    }
}
