use settings_port_models::{
    Account, Bookmark, MediaProgress, QualityPreference, QualityTier, SubtitleStyling,
};
use std::collections::HashMap;

/// One get/set boundary per settings domain. The export builder only reads
/// through these; the import apply pass only writes through them. Concrete
/// stores decide where the values live.

pub trait AuthStore {
    fn account(&self) -> Option<Account>;
    fn backend_url(&self) -> Option<String>;
    fn proxy_set(&self) -> Option<Vec<String>>;
    fn set_account(&mut self, account: Account);
    fn set_backend_url(&mut self, url: String);
    fn set_proxy_set(&mut self, proxies: Vec<String>);
}

pub trait BookmarkStore {
    fn bookmarks(&self) -> HashMap<String, Bookmark>;
    fn set_bookmark(&mut self, id: String, bookmark: Bookmark);
}

pub trait LanguageStore {
    fn language(&self) -> String;
    fn set_language(&mut self, language: String);
}

pub trait PreferencesStore {
    fn enable_thumbnails(&self) -> bool;
    fn set_enable_thumbnails(&mut self, enabled: bool);
}

pub trait ProgressStore {
    /// Current record for a single title, if any. The merge engine reads the
    /// local side through this.
    fn item(&self, id: &str) -> Option<MediaProgress>;
    fn items(&self) -> HashMap<String, MediaProgress>;
    /// Replaces the full record for a title.
    fn set_item(&mut self, id: String, item: MediaProgress);
}

pub trait QualityStore {
    fn quality(&self) -> QualityPreference;
    fn set_automatic_quality(&mut self, automatic: bool);
    fn set_last_chosen_quality(&mut self, tier: Option<QualityTier>);
}

pub trait SubtitleStore {
    fn last_selected_language(&self) -> Option<String>;
    fn styling(&self) -> SubtitleStyling;
    fn override_casing(&self) -> bool;
    fn delay(&self) -> f64;
    fn set_last_selected_language(&mut self, language: Option<String>);
    fn set_styling(&mut self, styling: SubtitleStyling);
    fn set_override_casing(&mut self, override_casing: bool);
    fn set_delay(&mut self, delay: f64);
}

pub trait ThemeStore {
    fn theme(&self) -> Option<String>;
    fn set_theme(&mut self, theme: Option<String>);
}

pub trait VolumeStore {
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
}

/// Umbrella over every domain store, for code that walks the whole document.
pub trait SettingsStores:
    AuthStore
    + BookmarkStore
    + LanguageStore
    + PreferencesStore
    + ProgressStore
    + QualityStore
    + SubtitleStore
    + ThemeStore
    + VolumeStore
{
}

impl<T> SettingsStores for T where
    T: AuthStore
        + BookmarkStore
        + LanguageStore
        + PreferencesStore
        + ProgressStore
        + QualityStore
        + SubtitleStore
        + ThemeStore
        + VolumeStore
{
}
