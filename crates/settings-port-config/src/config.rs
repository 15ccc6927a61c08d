use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration, TOML on disk. Everything has a default so a missing
/// file is fine.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory export artifacts are written to; defaults to the current
    /// working directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Include account credentials in exports unless overridden on the
    /// command line.
    #[serde(default)]
    pub include_auth: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("config file {} is not valid TOML", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }
}
