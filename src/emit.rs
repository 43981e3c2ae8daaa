//! Declaration emission
//!
//! Produces the text of the generated artifact. The layout is a fixed
//! contract: header first, then per asset the array line followed by the
//! size line.

use crate::encode::{decode_literal, encode_bytes};
use crate::error::{PackError, PackResult};
use crate::symbol::Symbol;

/// Fixed header written at the top of every artifact
pub const HEADER: &str = "/*\n * Generated by shaderpack. DO NOT EDIT.\n */\n";

const ARRAY_PREFIX: &str = "const char ";
const ARRAY_OPEN: &str = " [] = { ";
const ARRAY_CLOSE: &str = " };";

/// Emit the two-line declaration block for one asset
///
/// `literal` is the output of [`encode_bytes`].
pub fn emit_declaration(symbol: &Symbol, literal: &str) -> String {
    format!(
        "const char {sym} [] = {{ {literal} }};\nconst unsigned {size} = sizeof({sym});\n",
        sym = symbol,
        size = symbol.size_name(),
    )
}

/// Accumulates an artifact in memory, one asset at a time
#[derive(Debug, Clone)]
pub struct ArtifactBuilder {
    text: String,
    declarations: usize,
}

impl ArtifactBuilder {
    /// Start a new artifact with the header already in place
    pub fn new() -> Self {
        Self {
            text: String::from(HEADER),
            declarations: 0,
        }
    }

    /// Append the declarations for one asset
    pub fn push(&mut self, symbol: &Symbol, bytes: &[u8]) {
        self.text
            .push_str(&emit_declaration(symbol, &encode_bytes(bytes)));
        self.declarations += 1;
    }

    /// Number of assets appended so far
    pub fn declarations(&self) -> usize {
        self.declarations
    }

    pub fn finish(self) -> String {
        self.text
    }
}

impl Default for ArtifactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Recover `(symbol, bytes)` for every array declaration in an artifact
///
/// Lines that are not array declarations are skipped. Literal errors are
/// reported with their offset in `text`.
pub fn parse_declarations(text: &str) -> PackResult<Vec<(String, Vec<u8>)>> {
    let mut found = Vec::new();
    let mut line_start = 0;

    for line in text.split_inclusive('\n') {
        let offset = line_start;
        line_start += line.len();

        let Some(rest) = line.trim_end().strip_prefix(ARRAY_PREFIX) else {
            continue;
        };
        let (name, body) = rest
            .split_once(ARRAY_OPEN)
            .ok_or_else(|| malformed(offset, "expected '[] = {' after the symbol"))?;
        let literal = body
            .strip_suffix(ARRAY_CLOSE)
            .ok_or_else(|| malformed(offset, "expected '};' at the end of the declaration"))?;

        let literal_offset = offset + ARRAY_PREFIX.len() + name.len() + ARRAY_OPEN.len();
        let bytes = decode_literal(literal).map_err(|err| match err {
            PackError::MalformedLiteral { offset, message } => PackError::MalformedLiteral {
                offset: literal_offset + offset,
                message,
            },
            other => other,
        })?;
        found.push((name.to_string(), bytes));
    }

    Ok(found)
}

fn malformed(offset: usize, message: &str) -> PackError {
    PackError::MalformedLiteral {
        offset,
        message: message.to_string(),
    }
}
