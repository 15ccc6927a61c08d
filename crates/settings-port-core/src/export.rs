use chrono::{DateTime, Utc};
use settings_port_models::{
    AuthSettings, BookmarkSettings, LanguageSettings, PreferenceSettings, ProgressSettings,
    QualitySettings, Snapshot, SubtitleSettings, ThemeSettings, VolumeSettings,
};
use settings_port_stores::SettingsStores;
use tracing::debug;

/// Assembles the full settings document from the current store values. Pure
/// read; nothing is mutated.
///
/// With `include_sensitive` unset the account credentials are left out of the
/// auth section while the backend URL and proxy list still export.
pub fn build_snapshot<S: SettingsStores>(stores: &S, include_sensitive: bool) -> Snapshot {
    debug!(include_sensitive, "building settings snapshot");
    Snapshot {
        auth: Some(AuthSettings {
            account: include_sensitive.then(|| stores.account()).flatten(),
            backend_url: stores.backend_url(),
            proxy_set: stores.proxy_set(),
        }),
        bookmarks: Some(BookmarkSettings {
            bookmarks: stores.bookmarks(),
        }),
        language: Some(LanguageSettings {
            language: stores.language(),
        }),
        preferences: Some(PreferenceSettings {
            enable_thumbnails: stores.enable_thumbnails(),
        }),
        progress: Some(ProgressSettings {
            items: stores.items(),
        }),
        quality: Some(QualitySettings {
            quality: stores.quality(),
        }),
        subtitles: Some(SubtitleSettings {
            last_selected_language: stores.last_selected_language(),
            styling: stores.styling(),
            override_casing: stores.override_casing(),
            delay: stores.delay(),
        }),
        theme: Some(ThemeSettings {
            theme: stores.theme(),
        }),
        volume: Some(VolumeSettings {
            volume: stores.volume(),
        }),
    }
}

/// Human-readable JSON, the document users carry between installations.
pub fn serialize_snapshot(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// `<product> settings - <date>.json`, date-only so re-exports on the same
/// day overwrite each other instead of piling up.
pub fn export_file_name(product: &str, at: DateTime<Utc>) -> String {
    format!("{} settings - {}.json", product, at.format("%Y-%m-%d"))
}
