//! Symbol Value Object
//!
//! An identifier derived from an asset's basename, legal in C/C++ declaration
//! grammar. Every symbol also claims `<symbol>_size` for its length constant.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PackError, PackResult};

/// Suffix appended to a symbol for its byte-length declaration
pub const SIZE_SUFFIX: &str = "_size";

/// Identifier under which an asset is declared
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Get the identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the paired size declaration
    pub fn size_name(&self) -> String {
        format!("{}{}", self.0, SIZE_SUFFIX)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// C and C++ keywords, including alternative operator spellings and the
/// C11/C23 underscore keywords
const RESERVED_WORDS: &[&str] = &[
    "_Alignas", "_Alignof", "_Atomic", "_BitInt", "_Bool", "_Complex", "_Decimal128",
    "_Decimal32", "_Decimal64", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local", "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor",
    "bool", "break", "case", "catch", "char", "char16_t", "char32_t", "char8_t", "class",
    "co_await", "co_return", "co_yield", "compl", "concept", "const", "const_cast",
    "consteval", "constexpr", "constinit", "continue", "decltype", "default", "delete", "do",
    "double", "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float",
    "for", "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new",
    "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private", "protected",
    "public", "register", "reinterpret_cast", "requires", "restrict", "return", "short",
    "signed", "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
    "template", "this", "thread_local", "throw", "true", "try", "typedef", "typeid",
    "typename", "typeof", "typeof_unqual", "union", "unsigned", "using", "virtual", "void",
    "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Check whether `name` is a C or C++ keyword
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Derive a symbol from a file basename
///
/// Every `.` becomes `_`, as does any other character outside
/// `[A-Za-z0-9_]`. A result that is empty or starts with a digit gets a
/// leading `_`; a result that is a keyword gets a trailing `_`.
///
/// ```
/// use shaderpack::derive_symbol;
///
/// assert_eq!(derive_symbol("shader.vert.glsl").as_str(), "shader_vert_glsl");
/// assert_eq!(derive_symbol("2d-fill.frag").as_str(), "_2d_fill_frag");
/// assert_eq!(derive_symbol("default").as_str(), "default_");
/// ```
pub fn derive_symbol(basename: &str) -> Symbol {
    let mut name: String = basename
        .chars()
        .map(|c| if is_ident_char(c) { c } else { '_' })
        .collect();

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if is_reserved_word(&name) {
        name.push('_');
    }

    Symbol(name)
}

/// Check that `name` is a valid identifier as produced by [`derive_symbol`]
pub fn is_valid_identifier(name: &str) -> bool {
    if is_reserved_word(name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => chars.all(is_ident_char),
        _ => false,
    }
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Tracks every identifier claimed in one artifact
///
/// Each registered symbol claims both its own name and its size name, so an
/// asset called `foo.size` cannot shadow the length constant of `foo`.
#[derive(Debug, Default)]
pub struct SymbolTable {
    claimed: HashMap<String, PathBuf>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `symbol` (and its size name) for the asset at `path`
    pub fn register(&mut self, symbol: &Symbol, path: &Path) -> PackResult<()> {
        let size_name = symbol.size_name();

        for name in [symbol.as_str(), size_name.as_str()] {
            if let Some(owner) = self.claimed.get(name) {
                return Err(PackError::SymbolCollision {
                    symbol: name.to_string(),
                    first: owner.clone(),
                    second: path.to_path_buf(),
                });
            }
        }

        self.claimed
            .insert(symbol.as_str().to_string(), path.to_path_buf());
        self.claimed.insert(size_name, path.to_path_buf());
        Ok(())
    }

    /// Number of identifiers claimed (two per symbol)
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
