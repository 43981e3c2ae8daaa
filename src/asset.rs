//! Asset inputs
//!
//! An asset is read once per invocation and dropped after it is encoded.

use std::path::{Path, PathBuf};

use crate::error::{PackError, PackResult};
use crate::symbol::{derive_symbol, Symbol};

/// A binary input file and its contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInput {
    path: PathBuf,
    basename: String,
    bytes: Vec<u8>,
}

impl AssetInput {
    /// Read the asset at `path`
    pub fn read(path: &Path) -> PackResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| PackError::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(path, bytes))
    }

    /// Build an asset from bytes already in memory
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        Self {
            path: path.to_path_buf(),
            basename: basename(path),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Identifier this asset is declared under
    pub fn symbol(&self) -> Symbol {
        derive_symbol(&self.basename)
    }
}

/// Final path component, falling back to the whole path
pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
