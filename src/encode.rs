//! Byte literal encoding
//!
//! Turns raw asset bytes into the `0xNN,` group text placed inside an array
//! initializer, and parses that text back for verification.

use crate::error::{PackError, PackResult};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Width of one encoded group: `0x`, two digits, `,`
pub const GROUP_WIDTH: usize = 5;

/// Encode bytes as comma-terminated `0xNN` groups
///
/// Lowercase digits, no whitespace, trailing comma kept. The empty slice
/// encodes to the empty string.
pub fn encode_bytes(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len() * GROUP_WIDTH);
    for &byte in raw {
        out.push('0');
        out.push('x');
        out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
        out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
        out.push(',');
    }
    out
}

/// Decode text produced by [`encode_bytes`]
///
/// ASCII whitespace between groups is ignored so the body of a declaration's
/// braces can be passed in directly. Uppercase digits are accepted.
pub fn decode_literal(text: &str) -> PackResult<Vec<u8>> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / GROUP_WIDTH);
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let group = bytes.get(pos..pos + GROUP_WIDTH).ok_or_else(|| {
            PackError::MalformedLiteral {
                offset: pos,
                message: "truncated group".to_string(),
            }
        })?;

        if group[0] != b'0' || group[1] != b'x' {
            return Err(PackError::MalformedLiteral {
                offset: pos,
                message: "expected '0x' prefix".to_string(),
            });
        }
        if group[4] != b',' {
            return Err(PackError::MalformedLiteral {
                offset: pos + 4,
                message: "expected ',' after two hex digits".to_string(),
            });
        }

        let hi = hex_value(group[2]).ok_or_else(|| bad_digit(pos + 2))?;
        let lo = hex_value(group[3]).ok_or_else(|| bad_digit(pos + 3))?;
        out.push((hi << 4) | lo);
        pos += GROUP_WIDTH;
    }

    Ok(out)
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

fn bad_digit(offset: usize) -> PackError {
    PackError::MalformedLiteral {
        offset,
        message: "expected a hex digit".to_string(),
    }
}
