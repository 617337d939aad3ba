//! Common test utilities for Bootsmith integration tests.
//!
//! Provides `TestEnv` - an isolated pair of input/output directories
//! plus helpers to run the bootsmith CLI - and the embedded RSA key
//! fixtures shared by the scenario tests.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// A 2048-bit RSA private key, PKCS#1 PEM armor
pub const SIGNER_KEY: &str = include_str!("../fixtures/signer.key");

/// The same private key, PKCS#8 PEM armor
#[allow(dead_code)]
pub const SIGNER_KEY_PKCS8: &str = include_str!("../fixtures/signer-pkcs8.key");

/// Public key derived from `SIGNER_KEY` (openssl rsa -pubout)
pub const SIGNER_PUB: &str = include_str!("../fixtures/signer.pub");

/// An unrelated private key, for mismatched-pair scenarios
#[allow(dead_code)]
pub const OTHER_KEY: &str = include_str!("../fixtures/other.key");

/// Public key derived from `OTHER_KEY`
#[allow(dead_code)]
pub const OTHER_PUB: &str = include_str!("../fixtures/other.pub");

/// Logical path the signing key is supplied under
pub const SIGNING_KEY_PATH: &str = "tls/bound-service-account-signing-key.key";

/// Logical path the derived public key is staged under
pub const SIGNING_PUB_PATH: &str = "tls/bound-service-account-signing-key.pub";

/// Result of running a bootsmith CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment: an input dir of user-supplied assets and
/// an output dir for staged files.
pub struct TestEnv {
    pub input: TempDir,
    pub output: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            input: TempDir::new().expect("create input dir"),
            output: TempDir::new().expect("create output dir"),
        }
    }

    /// Write a file under the input directory, creating parents
    pub fn write_input(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.input.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write input file");
        path
    }

    /// Path under the output directory
    pub fn output_path(&self, relative: &str) -> PathBuf {
        self.output.path().join(relative)
    }

    /// Run `bootsmith materialize` wired to this env
    pub fn materialize(&self) -> TestResult {
        self.run_raw(&[
            "materialize",
            "--input-dir",
            &self.input.path().to_string_lossy(),
            "--output-dir",
            &self.output.path().to_string_lossy(),
        ])
    }

    /// Run `bootsmith --json materialize` wired to this env
    #[allow(dead_code)]
    pub fn materialize_json(&self) -> TestResult {
        self.run_raw(&[
            "--json",
            "materialize",
            "--input-dir",
            &self.input.path().to_string_lossy(),
            "--output-dir",
            &self.output.path().to_string_lossy(),
        ])
    }

    /// Run `bootsmith check` wired to this env
    #[allow(dead_code)]
    pub fn check(&self) -> TestResult {
        self.run_raw(&[
            "check",
            "--input-dir",
            &self.input.path().to_string_lossy(),
        ])
    }

    /// Run the bootsmith binary with raw arguments
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let bin = env!("CARGO_BIN_EXE_bootsmith");
        let out = Command::new(bin)
            .args(args)
            .output()
            .expect("run bootsmith");
        TestResult {
            success: out.status.success(),
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        }
    }
}
