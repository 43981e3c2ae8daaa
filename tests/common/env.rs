//! Test environment for isolated shaderpack runs.
//!
//! Provides `TestEnv` - a temp directory that holds the assets and the
//! generated artifact, plus helpers to run the CLI inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the shaderpack CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory for one test.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_shaderpack")),
        }
    }

    /// Get path relative to the environment root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write an asset file, creating parent directories
    pub fn write_asset(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, bytes).expect("Failed to write asset");
        full_path
    }

    /// Read a file as text
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run shaderpack from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run shaderpack with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    fn run_from_with_env(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args).env_remove("SHADERPACK_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute shaderpack");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
