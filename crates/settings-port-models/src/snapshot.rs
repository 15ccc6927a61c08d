use serde::{Deserialize, Serialize};

use crate::auth::AuthSettings;
use crate::bookmarks::BookmarkSettings;
use crate::progress::ProgressSettings;
use crate::quality::QualitySettings;
use crate::subtitles::SubtitleSettings;

/// The full exported settings document, one section per domain.
///
/// Exports fill every section; on import any subset may be present, so each
/// section is independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<BookmarkSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PreferenceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualitySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitles: Option<SubtitleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageSettings {
    pub language: String,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSettings {
    pub enable_thumbnails: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeSettings {
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeSettings {
    pub volume: f64,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}
