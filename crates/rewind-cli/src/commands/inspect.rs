use color_eyre::eyre::Context;
use color_eyre::Result;
use serde_json::json;
use settings_port_core::validate_snapshot;
use std::path::PathBuf;

use crate::output::{Output, OutputFormat};

pub fn run_inspect(file: PathBuf, output: &Output) -> Result<()> {
    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let doc: serde_json::Value =
        serde_json::from_str(&raw).wrap_err("malformed settings document")?;

    let snapshot = match validate_snapshot(&doc) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            output.error(format!("Document is invalid: {e}"));
            std::process::exit(1);
        }
    };

    let mut domains: Vec<&'static str> = Vec::new();
    let mut progress_items = 0;
    let mut bookmark_count = 0;

    if snapshot.auth.is_some() {
        domains.push("auth");
    }
    if let Some(bookmarks) = &snapshot.bookmarks {
        bookmark_count = bookmarks.bookmarks.len();
        domains.push("bookmarks");
    }
    if snapshot.language.is_some() {
        domains.push("language");
    }
    if snapshot.preferences.is_some() {
        domains.push("preferences");
    }
    if let Some(progress) = &snapshot.progress {
        progress_items = progress.items.len();
        domains.push("progress");
    }
    if snapshot.quality.is_some() {
        domains.push("quality");
    }
    if snapshot.subtitles.is_some() {
        domains.push("subtitles");
    }
    if snapshot.theme.is_some() {
        domains.push("theme");
    }
    if snapshot.volume.is_some() {
        domains.push("volume");
    }

    match output.format() {
        OutputFormat::Human => {
            if domains.is_empty() {
                output.warn("Document is valid but contains no recognized settings");
                return Ok(());
            }
            output.println(format!("Domains: {}", domains.join(", ")));
            if progress_items > 0 {
                output.println(format!("Progress records: {progress_items}"));
            }
            if bookmark_count > 0 {
                output.println(format!("Bookmarks: {bookmark_count}"));
            }
            output.success("Document is valid");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "valid": true,
                "domains": domains,
                "progress_records": progress_items,
                "bookmarks": bookmark_count,
            }));
        }
    }

    Ok(())
}
