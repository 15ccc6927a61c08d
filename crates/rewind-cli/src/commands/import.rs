use color_eyre::eyre::Context;
use color_eyre::Result;
use settings_port_core::import_snapshot;
use std::path::PathBuf;
use tracing::debug;

use crate::output::{Output, OutputFormat};

pub fn run_import(
    file: PathBuf,
    dry_run: bool,
    state_path: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let mut state = super::load_state(state_path)?;
    debug!(file = %file.display(), dry_run, "importing settings document");

    let summary = import_snapshot(state.stores_mut(), &raw)?;

    if dry_run {
        output.warn("Dry-run: no changes were persisted");
    } else {
        state.save().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    }

    match output.format() {
        OutputFormat::Human => {
            if summary.domains_applied.is_empty() {
                output.warn("Document contained no recognized settings");
                return Ok(());
            }
            output.println(format!("Domains: {}", summary.domains_applied.join(", ")));
            if summary.progress_inserted + summary.progress_merged > 0 {
                output.println(format!(
                    "Progress: {} inserted, {} merged",
                    summary.progress_inserted, summary.progress_merged
                ));
            }
            if summary.bookmarks_upserted > 0 {
                output.println(format!("Bookmarks: {} upserted", summary.bookmarks_upserted));
            }
            output.success(format!(
                "Imported {} domain(s) from {}",
                summary.domains_applied.len(),
                file.display()
            ));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&summary)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use settings_port_stores::StateFile;

    const DOCUMENT: &str = r#"{
        "theme": { "theme": "dark" },
        "progress": { "items": {
            "m1": {
                "title": "Some Movie", "type": "movie", "updatedAt": 100,
                "progress": { "watched": 30.0, "duration": 100.0 },
                "seasons": {}, "episodes": {}
            }
        }}
    }"#;

    fn quiet_output() -> Output {
        Output::new(OutputFormat::Human, true)
    }

    #[test]
    fn test_dry_run_leaves_the_state_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");
        StateFile::new(state_path.clone()).save().unwrap();

        let doc_path = dir.path().join("import.json");
        std::fs::write(&doc_path, DOCUMENT).unwrap();

        let before = std::fs::read(&state_path).unwrap();
        run_import(
            doc_path,
            true,
            Some(state_path.clone()),
            &quiet_output(),
        )
        .unwrap();
        let after = std::fs::read(&state_path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_real_import_persists_the_merge() {
        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");
        StateFile::new(state_path.clone()).save().unwrap();

        let doc_path = dir.path().join("import.json");
        std::fs::write(&doc_path, DOCUMENT).unwrap();

        run_import(
            doc_path,
            false,
            Some(state_path.clone()),
            &quiet_output(),
        )
        .unwrap();

        let persisted = std::fs::read_to_string(&state_path).unwrap();
        assert!(persisted.contains("\"dark\""));
        assert!(persisted.contains("Some Movie"));
    }
}
