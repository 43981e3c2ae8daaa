//! CLI Argument Parsing
//!
//! `shaderpack <OUTPUT> <INPUT>...` or `shaderpack --manifest <FILE>`.

use std::path::PathBuf;

use clap::Parser;

/// shaderpack - embed shader payloads as constant byte arrays
#[derive(Parser, Debug)]
#[command(name = "shaderpack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Inputs are declared in the order given. The output is always regenerated in full.\n\
Runs writing the same output are not locked against each other; serialize them in the build system.")]
pub struct Cli {
    /// Generated source file to create or overwrite
    #[arg(required_unless_present = "manifest", conflicts_with = "manifest")]
    pub output: Option<PathBuf>,

    /// Asset files to embed, in declaration order
    #[arg(conflicts_with = "manifest")]
    pub inputs: Vec<PathBuf>,

    /// Read output and inputs from a TOML manifest
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Exit non-zero if the output is missing or out of date (never writes)
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Dry run - render everything but do not write the output
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
