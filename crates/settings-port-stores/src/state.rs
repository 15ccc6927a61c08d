use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::memory::MemoryStores;

/// JSON-backed local state. All domain mutations happen in memory; `save`
/// writes the whole file in one step, so a half-applied import is never
/// persisted.
pub struct StateFile {
    path: PathBuf,
    stores: MemoryStores,
}

impl StateFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            stores: MemoryStores::new(),
        }
    }

    /// Loads state from disk if the file exists; a missing file yields
    /// defaults (first run).
    pub fn load(path: PathBuf) -> Result<Self> {
        let stores = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read state file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("state file {} is corrupt", path.display()))?
        } else {
            debug!(path = %path.display(), "no state file found, starting from defaults");
            MemoryStores::new()
        };
        Ok(Self { path, stores })
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&self.stores)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write state file {}", self.path.display()))?;
        debug!(path = %self.path.display(), "state file saved");
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn stores(&self) -> &MemoryStores {
        &self.stores
    }

    pub fn stores_mut(&mut self) -> &mut MemoryStores {
        &mut self.stores
    }
}
