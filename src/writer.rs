//! Atomic artifact writer
//!
//! The artifact is written to a temporary file next to the destination and
//! renamed over it, so a reader sees either the old file or the complete new
//! one. Parent directories are not created.
//!
//! A symlinked destination is written through to the file it points at, with
//! the rename happening beside the target. A read-only destination is an
//! error and is left untouched.
//!
//! Concurrent runs on the same output are not locked against each other;
//! the last rename wins. Build systems must serialize them.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{PackError, PackResult};

/// Write `content` to `path` atomically
pub fn atomic_write(path: &Path, content: &[u8]) -> PackResult<()> {
    let write_err = |source: io::Error| PackError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_err)?;
    let existing = match std::fs::metadata(&target) {
        Ok(meta) => Some(meta),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(write_err(e)),
    };
    if existing.as_ref().is_some_and(|meta| meta.permissions().readonly()) {
        return Err(write_err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "output file is read-only",
        )));
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    match existing {
        Some(meta) => tmp
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?,
        None => set_default_permissions(tmp.as_file()).map_err(write_err)?,
    }
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Follow a symlinked destination to the file it names
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => std::fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

/// Temp files are created owner-only; a fresh artifact should be readable
/// like any other generated source.
#[cfg(unix)]
fn set_default_permissions(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}

/// SHA-256 of `content`, formatted as `sha256:<hex>`
pub fn hash_content(content: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    format!("sha256:{:x}", Sha256::digest(content))
}
