//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::to_jsonl;

/// Isolated environment holding a Claude Code style log root.
///
/// # Example
/// ```no_run
/// use teamtrace_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new();
/// world
///     .write_log("-repo", "abc", &[fixtures::user_text(&fixtures::ts(0), "Hi")])
///     .unwrap();
///
/// let result = world.run(&["export", "abc"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    log_root: PathBuf,
    workspace_dir: PathBuf,
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
        let log_root = temp_dir.path().join(".claude").join("projects");
        let workspace_dir = temp_dir.path().join(".teamtrace");

        std::fs::create_dir_all(&log_root).expect("Failed to create log root");
        std::fs::create_dir_all(&workspace_dir).expect("Failed to create workspace dir");

        Self {
            temp_dir,
            log_root,
            workspace_dir,
        }
    }

    /// Get the log root (the equivalent of ~/.claude/projects).
    pub fn log_root(&self) -> &Path {
        &self.log_root
    }

    /// Get the teamtrace workspace directory (config.toml lives here).
    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get a project log directory, creating it if needed.
    pub fn project_dir(&self, project: &str) -> Result<PathBuf> {
        let dir = self.log_root.join(project);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Write `<project>/<session_id>.jsonl` from records.
    pub fn write_log(&self, project: &str, session_id: &str, records: &[Value]) -> Result<PathBuf> {
        self.write_raw_log(project, &format!("{}.jsonl", session_id), &to_jsonl(records))
    }

    /// Write an arbitrary file into a project directory.
    pub fn write_raw_log(&self, project: &str, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.project_dir(project)?.join(file_name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write config.toml into the workspace directory.
    pub fn write_config(&self, content: &str) -> Result<PathBuf> {
        let path = self.workspace_dir.join("config.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Configure a CLI command with this environment's log root and workspace.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--log-root")
            .arg(&self.log_root)
            .env("TEAMTRACE_PATH", &self.workspace_dir)
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path())
    }

    /// Execute the `teamtrace` binary with the given arguments.
    ///
    /// # Note
    /// Requires the binary to be built, which `cargo test` does for the
    /// package that owns it.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("teamtrace")
            .map_err(|e| anyhow::anyhow!("Failed to find teamtrace binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
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
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
