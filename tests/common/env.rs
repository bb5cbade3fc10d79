//! Test environment for running the athenaeum binary in isolation.
//!
//! The working directory and the user config dir both live in temp
//! directories, and ATHENAEUM_* / RUST_LOG are cleared, so no outside
//! config leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running an athenaeum CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_athenaeum")),
        }
    }

    /// A fresh environment with `seed` written to `seed.toml`
    pub fn with_seed(seed: &str) -> Self {
        let env = Self::new();
        env.write("seed.toml", seed);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.project_root.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd.output().unwrap().into()
    }

    /// Run with `--seed seed.toml` prepended
    pub fn run_seeded(&self, args: &[&str]) -> TestResult {
        let mut full = vec!["--seed", "seed.toml"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("ATHENAEUM_SEED")
            .env_remove("ATHENAEUM_VERBOSITY")
            .env_remove("ATHENAEUM_FORMAT");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
