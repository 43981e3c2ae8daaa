//! Configuration type definitions

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};

/// One pack invocation: where to write, and what to embed in which order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    pub output: PathBuf,
    pub inputs: Vec<PathBuf>,
}

impl PackConfig {
    pub fn new(output: impl Into<PathBuf>, inputs: Vec<PathBuf>) -> Self {
        Self {
            output: output.into(),
            inputs,
        }
    }

    /// Reject configurations the pipeline cannot turn into one artifact
    ///
    /// Inputs must be non-empty and distinct, and must not include the output.
    /// Paths that exist are compared by canonical path, so `./a.frag` and
    /// `a.frag` name the same file.
    pub fn validate(&self) -> PackResult<()> {
        if self.inputs.is_empty() {
            return Err(PackError::NoInputs);
        }

        let output = file_identity(&self.output);
        let mut seen: HashSet<PathBuf> = HashSet::with_capacity(self.inputs.len());
        for input in &self.inputs {
            let identity = file_identity(input);
            if identity == output {
                return Err(PackError::OutputIsInput {
                    path: self.output.clone(),
                });
            }
            if !seen.insert(identity) {
                return Err(PackError::DuplicateInput {
                    path: input.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Canonical path when the file exists, the path as given otherwise
fn file_identity(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// On-disk manifest (`shaderpack.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub output: PathBuf,

    #[serde(default)]
    pub inputs: Vec<PathBuf>,
}

impl Manifest {
    /// Resolve relative paths against `base` (the manifest's directory)
    pub fn into_config(self, base: &Path) -> PackConfig {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        PackConfig {
            output: resolve(self.output),
            inputs: self.inputs.into_iter().map(resolve).collect(),
        }
    }
}
