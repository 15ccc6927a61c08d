use serde::Serialize;
use serde_json::Value;
use settings_port_models::Snapshot;
use settings_port_stores::SettingsStores;
use thiserror::Error;
use tracing::{debug, info};

use crate::merge::reconcile_item;
use crate::validate::{validate_snapshot, ValidationError};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("malformed settings document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// What an import changed, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub domains_applied: Vec<&'static str>,
    pub progress_inserted: usize,
    pub progress_merged: usize,
    pub bookmarks_upserted: usize,
}

/// Full import pipeline: parse, validate, apply. Validation failure aborts
/// before any store is touched.
pub fn import_snapshot<S: SettingsStores>(
    stores: &mut S,
    raw: &str,
) -> Result<ImportSummary, ImportError> {
    let doc: Value = serde_json::from_str(raw)?;
    let snapshot = validate_snapshot(&doc)?;
    Ok(apply_snapshot(stores, &snapshot))
}

/// Pushes every present domain of a validated document into the stores.
/// Progress goes through the merge engine; the other domains replace local
/// values outright.
pub fn apply_snapshot<S: SettingsStores>(stores: &mut S, snapshot: &Snapshot) -> ImportSummary {
    let mut summary = ImportSummary::default();

    if let Some(auth) = &snapshot.auth {
        // A credential-stripped export must not wipe a local login, so auth
        // sub-fields only apply when the incoming side carries them.
        if let Some(account) = &auth.account {
            stores.set_account(account.clone());
        }
        if let Some(url) = &auth.backend_url {
            stores.set_backend_url(url.clone());
        }
        if let Some(proxies) = &auth.proxy_set {
            stores.set_proxy_set(proxies.clone());
        }
        summary.domains_applied.push("auth");
    }

    if let Some(bookmarks) = &snapshot.bookmarks {
        // Upsert per id; bookmarks absent from the document are kept.
        for (id, bookmark) in &bookmarks.bookmarks {
            stores.set_bookmark(id.clone(), bookmark.clone());
        }
        summary.bookmarks_upserted = bookmarks.bookmarks.len();
        summary.domains_applied.push("bookmarks");
    }

    if let Some(language) = &snapshot.language {
        stores.set_language(language.language.clone());
        summary.domains_applied.push("language");
    }

    if let Some(preferences) = &snapshot.preferences {
        stores.set_enable_thumbnails(preferences.enable_thumbnails);
        summary.domains_applied.push("preferences");
    }

    if let Some(progress) = &snapshot.progress {
        for (id, incoming) in &progress.items {
            let local = stores.item(id);
            if local.is_some() {
                summary.progress_merged += 1;
            } else {
                summary.progress_inserted += 1;
            }
            let merged = reconcile_item(local.as_ref(), incoming);
            stores.set_item(id.clone(), merged);
        }
        debug!(
            inserted = summary.progress_inserted,
            merged = summary.progress_merged,
            "progress records reconciled"
        );
        summary.domains_applied.push("progress");
    }

    if let Some(quality) = &snapshot.quality {
        stores.set_automatic_quality(quality.quality.automatic_quality);
        stores.set_last_chosen_quality(quality.quality.last_chosen_quality);
        summary.domains_applied.push("quality");
    }

    if let Some(subtitles) = &snapshot.subtitles {
        stores.set_last_selected_language(subtitles.last_selected_language.clone());
        stores.set_styling(subtitles.styling.clone());
        stores.set_override_casing(subtitles.override_casing);
        stores.set_delay(subtitles.delay);
        summary.domains_applied.push("subtitles");
    }

    if let Some(theme) = &snapshot.theme {
        stores.set_theme(theme.theme.clone());
        summary.domains_applied.push("theme");
    }

    if let Some(volume) = &snapshot.volume {
        stores.set_volume(volume.volume);
        summary.domains_applied.push("volume");
    }

    info!(
        domains = summary.domains_applied.len(),
        "settings document applied"
    );
    summary
}
