//! Pack pipeline
//!
//! validate → derive symbols → read and encode each input in order → write.
//!
//! Symbols depend only on basenames, so collisions are rejected before any
//! input is opened. Each asset's bytes are dropped as soon as its
//! declarations are appended.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::asset::{basename, AssetInput};
use crate::config::PackConfig;
use crate::emit::{parse_declarations, ArtifactBuilder};
use crate::error::{PackError, PackResult};
use crate::symbol::{derive_symbol, Symbol, SymbolTable};
use crate::writer::{atomic_write, hash_content};

/// One embedded asset as it appears in the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetSummary {
    pub path: PathBuf,
    pub symbol: String,
    pub size: usize,
}

/// A fully rendered artifact that has not been written yet
#[derive(Debug, Clone)]
pub struct Rendered {
    pub output: PathBuf,
    pub text: String,
    pub assets: Vec<AssetSummary>,
}

impl Rendered {
    /// `sha256:` hash of the artifact text
    pub fn hash(&self) -> String {
        hash_content(self.text.as_bytes())
    }

    fn report(&self, status: PackStatus) -> PackReport {
        PackReport {
            output: self.output.clone(),
            status,
            assets: self.assets.clone(),
            bytes: self.text.len(),
            hash: self.hash(),
        }
    }
}

/// What happened to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackStatus {
    /// Artifact written
    Written,
    /// Rendered only, nothing written
    DryRun,
    /// On-disk artifact matches the rendered one
    UpToDate,
    /// On-disk artifact differs from the rendered one
    Stale,
    /// No artifact on disk yet
    Missing,
}

impl PackStatus {
    /// Whether a `--check` run should pass
    pub fn is_fresh(self) -> bool {
        matches!(self, PackStatus::UpToDate)
    }
}

/// Outcome of a pack, dry run or check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackReport {
    pub output: PathBuf,
    pub status: PackStatus,
    pub assets: Vec<AssetSummary>,
    /// Artifact length in bytes
    pub bytes: usize,
    pub hash: String,
}

/// Result of comparing the rendered artifact with the file on disk
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub report: PackReport,
    /// Current on-disk contents, if the file exists
    pub current: Option<String>,
    /// What `pack` would write
    pub expected: String,
    /// Symbols whose bytes differ on disk, for a stale artifact
    pub changed: Vec<String>,
}

/// Derive every symbol up front and reject collisions
pub fn plan_symbols(inputs: &[PathBuf]) -> PackResult<Vec<Symbol>> {
    let mut table = SymbolTable::new();
    inputs
        .iter()
        .map(|path| {
            let symbol = derive_symbol(&basename(path));
            table.register(&symbol, path)?;
            Ok(symbol)
        })
        .collect()
}

/// Run the whole pipeline except the final write
#[tracing::instrument(skip(config), fields(output = %config.output.display(), inputs = config.inputs.len()))]
pub fn render(config: &PackConfig) -> PackResult<Rendered> {
    config.validate()?;
    let symbols = plan_symbols(&config.inputs)?;

    let mut builder = ArtifactBuilder::new();
    let mut assets = Vec::with_capacity(config.inputs.len());

    for (path, symbol) in config.inputs.iter().zip(&symbols) {
        let asset = AssetInput::read(path)?;
        debug!(path = %path.display(), symbol = %symbol, size = asset.len(), "embedding asset");

        builder.push(symbol, asset.bytes());
        assets.push(AssetSummary {
            path: path.clone(),
            symbol: symbol.to_string(),
            size: asset.len(),
        });
    }

    Ok(Rendered {
        output: config.output.clone(),
        text: builder.finish(),
        assets,
    })
}

/// Render the artifact and write it to `config.output`
pub fn pack(config: &PackConfig) -> PackResult<PackReport> {
    let rendered = render(config)?;
    atomic_write(&rendered.output, rendered.text.as_bytes())?;
    info!(
        output = %rendered.output.display(),
        assets = rendered.assets.len(),
        bytes = rendered.text.len(),
        "wrote artifact"
    );
    Ok(rendered.report(PackStatus::Written))
}

/// Render the artifact without writing anything
pub fn dry_run(config: &PackConfig) -> PackResult<PackReport> {
    let rendered = render(config)?;
    info!(output = %rendered.output.display(), "dry run, artifact not written");
    Ok(rendered.report(PackStatus::DryRun))
}

/// Compare the rendered artifact with what is on disk, without writing
pub fn check(config: &PackConfig) -> PackResult<CheckResult> {
    let rendered = render(config)?;
    let current = read_existing(&rendered.output)?;

    let status = match &current {
        None => PackStatus::Missing,
        Some(text) if *text == rendered.text => PackStatus::UpToDate,
        Some(_) => PackStatus::Stale,
    };
    let changed = match (&current, status) {
        (Some(text), PackStatus::Stale) => changed_symbols(text, &rendered.text)?,
        _ => Vec::new(),
    };
    debug!(output = %rendered.output.display(), ?status, changed = changed.len(), "checked artifact");

    Ok(CheckResult {
        report: rendered.report(status),
        current,
        expected: rendered.text,
        changed,
    })
}

/// Symbols declared with different bytes on disk than in the rendered text
///
/// Rendered symbols come first in declaration order, then symbols that exist
/// only on disk. An on-disk artifact that cannot be parsed marks every
/// rendered symbol as changed.
fn changed_symbols(current: &str, expected: &str) -> PackResult<Vec<String>> {
    let expected = parse_declarations(expected)?;
    let current = match parse_declarations(current) {
        Ok(decls) => decls,
        Err(err) => {
            debug!(error = %err, "existing artifact does not parse");
            return Ok(expected.into_iter().map(|(name, _)| name).collect());
        }
    };

    let on_disk: HashMap<&str, &[u8]> = current
        .iter()
        .map(|(name, bytes)| (name.as_str(), bytes.as_slice()))
        .collect();
    let rendered: HashSet<&str> = expected.iter().map(|(name, _)| name.as_str()).collect();

    let mut changed: Vec<String> = expected
        .iter()
        .filter(|(name, bytes)| {
            on_disk
                .get(name.as_str())
                .map_or(true, |old| *old != bytes.as_slice())
        })
        .map(|(name, _)| name.clone())
        .collect();
    changed.extend(
        current
            .iter()
            .filter(|(name, _)| !rendered.contains(name.as_str()))
            .map(|(name, _)| name.clone()),
    );
    Ok(changed)
}

fn read_existing(path: &Path) -> PackResult<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(PackError::OutputRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
