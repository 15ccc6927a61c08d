use serde::{Deserialize, Serialize};
use settings_port_models::{
    Account, AuthSettings, Bookmark, BookmarkSettings, LanguageSettings, MediaProgress,
    PreferenceSettings, ProgressSettings, QualityPreference, QualitySettings, QualityTier,
    SubtitleSettings, SubtitleStyling, ThemeSettings, VolumeSettings,
};
use std::collections::HashMap;

use crate::traits::{
    AuthStore, BookmarkStore, LanguageStore, PreferencesStore, ProgressStore, QualityStore,
    SubtitleStore, ThemeStore, VolumeStore,
};

/// In-memory backing for every domain store. Doubles as the serialized shape
/// of the on-disk state file and as the substitutable fake in tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MemoryStores {
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub bookmarks: BookmarkSettings,
    #[serde(default)]
    pub language: LanguageSettings,
    #[serde(default)]
    pub preferences: PreferenceSettings,
    #[serde(default)]
    pub progress: ProgressSettings,
    #[serde(default)]
    pub quality: QualitySettings,
    #[serde(default)]
    pub subtitles: SubtitleSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub volume: VolumeSettings,
}

impl MemoryStores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthStore for MemoryStores {
    fn account(&self) -> Option<Account> {
        self.auth.account.clone()
    }

    fn backend_url(&self) -> Option<String> {
        self.auth.backend_url.clone()
    }

    fn proxy_set(&self) -> Option<Vec<String>> {
        self.auth.proxy_set.clone()
    }

    fn set_account(&mut self, account: Account) {
        self.auth.account = Some(account);
    }

    fn set_backend_url(&mut self, url: String) {
        self.auth.backend_url = Some(url);
    }

    fn set_proxy_set(&mut self, proxies: Vec<String>) {
        self.auth.proxy_set = Some(proxies);
    }
}

impl BookmarkStore for MemoryStores {
    fn bookmarks(&self) -> HashMap<String, Bookmark> {
        self.bookmarks.bookmarks.clone()
    }

    fn set_bookmark(&mut self, id: String, bookmark: Bookmark) {
        self.bookmarks.bookmarks.insert(id, bookmark);
    }
}

impl LanguageStore for MemoryStores {
    fn language(&self) -> String {
        self.language.language.clone()
    }

    fn set_language(&mut self, language: String) {
        self.language.language = language;
    }
}

impl PreferencesStore for MemoryStores {
    fn enable_thumbnails(&self) -> bool {
        self.preferences.enable_thumbnails
    }

    fn set_enable_thumbnails(&mut self, enabled: bool) {
        self.preferences.enable_thumbnails = enabled;
    }
}

impl ProgressStore for MemoryStores {
    fn item(&self, id: &str) -> Option<MediaProgress> {
        self.progress.items.get(id).cloned()
    }

    fn items(&self) -> HashMap<String, MediaProgress> {
        self.progress.items.clone()
    }

    fn set_item(&mut self, id: String, item: MediaProgress) {
        self.progress.items.insert(id, item);
    }
}

impl QualityStore for MemoryStores {
    fn quality(&self) -> QualityPreference {
        self.quality.quality.clone()
    }

    fn set_automatic_quality(&mut self, automatic: bool) {
        self.quality.quality.automatic_quality = automatic;
    }

    fn set_last_chosen_quality(&mut self, tier: Option<QualityTier>) {
        self.quality.quality.last_chosen_quality = tier;
    }
}

impl SubtitleStore for MemoryStores {
    fn last_selected_language(&self) -> Option<String> {
        self.subtitles.last_selected_language.clone()
    }

    fn styling(&self) -> SubtitleStyling {
        self.subtitles.styling.clone()
    }

    fn override_casing(&self) -> bool {
        self.subtitles.override_casing
    }

    fn delay(&self) -> f64 {
        self.subtitles.delay
    }

    fn set_last_selected_language(&mut self, language: Option<String>) {
        self.subtitles.last_selected_language = language;
    }

    fn set_styling(&mut self, styling: SubtitleStyling) {
        self.subtitles.styling = styling;
    }

    fn set_override_casing(&mut self, override_casing: bool) {
        self.subtitles.override_casing = override_casing;
    }

    fn set_delay(&mut self, delay: f64) {
        self.subtitles.delay = delay;
    }
}

impl ThemeStore for MemoryStores {
    fn theme(&self) -> Option<String> {
        self.theme.theme.clone()
    }

    fn set_theme(&mut self, theme: Option<String>) {
        self.theme.theme = theme;
    }
}

impl VolumeStore for MemoryStores {
    fn volume(&self) -> f64 {
        self.volume.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume.volume = volume;
    }
}
