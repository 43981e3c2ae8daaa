//! Manifest loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackError, PackResult};

use super::types::{Manifest, PackConfig};

/// Non-fatal manifest warning (e.g. an unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a manifest and resolve it into a [`PackConfig`]
pub fn load_manifest(path: &Path) -> PackResult<PackConfig> {
    load_manifest_with_warnings(path).map(|(config, _)| config)
}

/// Load a manifest and collect non-fatal warnings (unknown keys)
pub fn load_manifest_with_warnings(path: &Path) -> PackResult<(PackConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| PackError::ManifestRead {
        file: path.to_path_buf(),
        source,
    })?;

    let (manifest, warnings) = parse_manifest(&content, path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok((manifest.into_config(base), warnings))
}

/// Parse manifest text; `file` is only used for diagnostics
pub fn parse_manifest(content: &str, file: &Path) -> PackResult<(Manifest, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let manifest: Manifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackError::InvalidManifest {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: file.to_path_buf(),
            }
        })
        .collect();

    Ok((manifest, warnings))
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "inputs"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
