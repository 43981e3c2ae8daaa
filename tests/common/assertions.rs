//! Assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Byte offset of the array declaration for `symbol`, if present.
pub fn declaration_offset(artifact: &str, symbol: &str) -> Option<usize> {
    artifact.find(&format!("const char {} [] = {{", symbol))
}

/// Assert that an artifact declares `symbol` with `literal` and a paired size line.
///
/// # Example
/// ```ignore
/// assert_declares!(artifact, "a_txt", "0x41,");
/// ```
#[macro_export]
macro_rules! assert_declares {
    ($artifact:expr, $symbol:expr, $literal:expr) => {
        let array = format!("const char {} [] = {{ {} }};\n", $symbol, $literal);
        let size = format!(
            "const unsigned {}_size = sizeof({});\n",
            $symbol, $symbol
        );
        let expected = format!("{}{}", array, size);
        assert!(
            $artifact.contains(&expected),
            "Expected declarations:\n{}\nArtifact:\n{}",
            expected,
            $artifact
        );
    };
}

/// Assert that symbols are declared in exactly the given order.
///
/// # Example
/// ```ignore
/// assert_declared_in_order!(artifact, ["c_glsl", "a_frag"]);
/// ```
#[macro_export]
macro_rules! assert_declared_in_order {
    ($artifact:expr, [$($symbol:expr),+ $(,)?]) => {
        let offsets: Vec<usize> = [$($symbol),+]
            .iter()
            .map(|s| {
                $crate::common::declaration_offset(&$artifact, s)
                    .unwrap_or_else(|| panic!("'{}' not declared in:\n{}", s, $artifact))
            })
            .collect();
        assert!(
            offsets.windows(2).all(|w| w[0] < w[1]),
            "Declarations out of order (offsets {:?}) in:\n{}",
            offsets,
            $artifact
        );
    };
}
