//! Test harness for the feedchain binary.
//!
//! Runs the compiled demo with an optional config file written to a
//! temporary directory.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Output of one demo run.
pub struct DemoRun {
    pub output: Output,
}

impl DemoRun {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }
}

/// A config file living in its own temporary directory.
pub struct TestConfig {
    dir: TempDir,
    path: PathBuf,
}

impl TestConfig {
    pub fn write(content: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("chain.toml");
        std::fs::write(&path, content)?;
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_feedchain"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

/// Run the demo with the built-in default configuration.
pub fn run_default() -> anyhow::Result<DemoRun> {
    Ok(DemoRun {
        output: binary().output()?,
    })
}

/// Run the demo against a config file.
pub fn run_with(config: &TestConfig) -> anyhow::Result<DemoRun> {
    Ok(DemoRun {
        output: binary().arg(config.path()).output()?,
    })
}
