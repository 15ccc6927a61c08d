use chrono::Utc;
use color_eyre::eyre::Context;
use color_eyre::Result;
use settings_port_config::{Config, PathManager, PRODUCT_NAME};
use settings_port_core::{build_snapshot, export_file_name, serialize_snapshot};
use std::path::PathBuf;
use tracing::debug;

use crate::output::Output;

pub fn run_export(
    include_auth: bool,
    out: Option<PathBuf>,
    state_path: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let config = load_config()?;
    let state = super::load_state(state_path)?;

    let include_sensitive = include_auth || config.include_auth;
    let snapshot = build_snapshot(state.stores(), include_sensitive);
    let text = serialize_snapshot(&snapshot)?;

    let file_name = export_file_name(PRODUCT_NAME, Utc::now());
    let path = resolve_output_path(out, config.export_dir, &file_name);
    debug!(path = %path.display(), "writing export artifact");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(&path, text)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    if include_sensitive {
        output.warn("Export includes account credentials - keep the file private");
    }
    output.success(format!("Settings exported to {}", path.display()));
    Ok(())
}

fn load_config() -> Result<Config> {
    let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    Config::load(&paths.config_file()).map_err(|e| color_eyre::eyre::eyre!("{}", e))
}

/// `--out` may name a file or a directory; directories get the dated default
/// name. Without `--out`, the configured export directory or the working
/// directory is used.
fn resolve_output_path(
    out: Option<PathBuf>,
    export_dir: Option<PathBuf>,
    file_name: &str,
) -> PathBuf {
    match out {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path,
        None => export_dir.unwrap_or_default().join(file_name),
    }
}
