//! Error types for shaderpack
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shaderpack operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for shaderpack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Input asset could not be opened or read
    #[error("cannot read input '{path}': {source}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two inputs derive the same identifier
    #[error("symbol '{symbol}' derived from both '{first}' and '{second}'")]
    SymbolCollision {
        symbol: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Destination could not be created or written
    #[error("cannot write output '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Existing output could not be read back for comparison
    #[error("cannot read existing output '{path}': {source}")]
    OutputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No input assets were given
    #[error("no input assets given - at least one input path is required")]
    NoInputs,

    /// Same input listed more than once
    #[error("input '{path}' is listed more than once")]
    DuplicateInput { path: PathBuf },

    /// Output path is also an input
    #[error("output '{path}' is also listed as an input")]
    OutputIsInput { path: PathBuf },

    /// Manifest file could not be read
    #[error("cannot read manifest '{file}': {source}")]
    ManifestRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest TOML is invalid
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Encoded literal text is not a sequence of `0xNN,` groups
    #[error("malformed literal at offset {offset}: {message}")]
    MalformedLiteral { offset: usize, message: String },
}

impl PackError {
    /// The filesystem path this error is about, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PackError::MissingInput { path, .. }
            | PackError::OutputWrite { path, .. }
            | PackError::OutputRead { path, .. }
            | PackError::DuplicateInput { path }
            | PackError::OutputIsInput { path } => Some(path),
            PackError::SymbolCollision { second, .. } => Some(second),
            PackError::ManifestRead { file, .. } | PackError::InvalidManifest { file, .. } => {
                Some(file)
            }
            PackError::NoInputs | PackError::MalformedLiteral { .. } => None,
        }
    }
}
