//! Isolated CLI environment for integration tests.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use supplydesk_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.run(&["init"]).unwrap();
///
/// let result = world.run(&["supplier", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".supplydesk");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
        }
    }

    /// Get the data directory path (.supplydesk).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the temp root and return its path.
    pub fn write_file(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("plain");

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("SUPPLYDESK_PATH");
        cmd.env_remove("RUST_LOG");

        cmd
    }

    /// Execute the `supplydesk` binary with the given arguments.
    ///
    /// Global flags (`--data-dir`, `--format plain`) are prepended; pass
    /// `--format json` after the subcommand to override the format.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("supplydesk")
            .map_err(|e| anyhow::anyhow!("Failed to find supplydesk binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = args.to_vec();
        full.extend_from_slice(&["--format", "json"]);

        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!(
                "supplydesk {:?} failed: {}",
                args,
                result.stderr().trim()
            );
        }
        result.json()
    }

    /// Create a supplier through the CLI and return its id.
    pub fn add_supplier(&self, company: &str, extra: &[&str]) -> Result<i64> {
        let mut args = vec!["supplier", "add", "--company-name", company];
        args.extend_from_slice(extra);

        let json = self.run_json(&args)?;
        json["content"]["supplier"]["id"]
            .as_i64()
            .ok_or_else(|| anyhow::anyhow!("No supplier id in output: {}", json))
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
