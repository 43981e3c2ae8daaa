//! shaderpack - embed binary assets as compile-time constant byte arrays
//!
//! shaderpack reads shader sources or bytecode and emits one generated source
//! file declaring, per asset, a `const char` array holding the exact bytes and
//! a `const unsigned` holding its length:
//!
//! ```text
//! /*
//!  * Generated by shaderpack. DO NOT EDIT.
//!  */
//! const char fill_frag [] = { 0x23,0x76, };
//! const unsigned fill_frag_size = sizeof(fill_frag);
//! ```
//!
//! Output is a pure function of the input bytes, basenames and order.

pub mod asset;
pub mod config;
pub mod emit;
pub mod encode;
pub mod error;
pub mod pack;
pub mod symbol;
pub mod writer;

// Re-exports for convenience
pub use asset::AssetInput;
pub use config::{load_manifest, load_manifest_with_warnings, ConfigWarning, Manifest, PackConfig};
pub use emit::{emit_declaration, parse_declarations, ArtifactBuilder, HEADER};
pub use encode::{decode_literal, encode_bytes};
pub use error::{PackError, PackResult};
pub use pack::{check, dry_run, pack, render, CheckResult, PackReport, PackStatus, Rendered};
pub use symbol::{derive_symbol, is_reserved_word, is_valid_identifier, Symbol};
