pub mod export;
pub mod import;
pub mod inspect;

use color_eyre::Result;
use settings_port_config::PathManager;
use settings_port_stores::StateFile;
use std::path::PathBuf;

/// Opens the local state, honoring a `--state` override.
fn load_state(override_path: Option<PathBuf>) -> Result<StateFile> {
    let path = match override_path {
        Some(path) => path,
        None => {
            let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
            paths
                .ensure_directories()
                .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
            paths.state_file()
        }
    };
    StateFile::load(path).map_err(|e| color_eyre::eyre::eyre!("{}", e))
}
