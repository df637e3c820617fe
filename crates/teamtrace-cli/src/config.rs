use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use teamtrace_core::{expand_tilde, resolve_workspace_path};

/// Output directory used when config.toml doesn't set one (relative to cwd)
pub const DEFAULT_OUTPUT_DIR: &str = ".claude/output";

/// Settings from config.toml; command-line flags take precedence
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Claude Code project log root
    #[serde(default)]
    pub log_root: Option<String>,

    /// Where `view` writes HTML when --output is not given
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Viewer template used when --template is not given
    #[serde(default)]
    pub template: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_workspace_path()?.join("config.toml"))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn template(&self) -> Option<PathBuf> {
        self.template.as_deref().map(expand_tilde)
    }
}
