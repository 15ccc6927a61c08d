use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleSettings {
    pub last_selected_language: Option<String>,
    pub styling: SubtitleStyling,
    pub override_casing: bool,
    /// Subtitle timing offset in seconds.
    pub delay: f64,
}

impl Default for SubtitleSettings {
    fn default() -> Self {
        Self {
            last_selected_language: None,
            styling: SubtitleStyling::default(),
            override_casing: false,
            delay: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleStyling {
    pub background_blur: f64,
    pub background_opacity: f64,
    pub color: String,
    pub size: f64,
}

impl Default for SubtitleStyling {
    fn default() -> Self {
        Self {
            background_blur: 0.5,
            background_opacity: 0.5,
            color: "#ffffff".to_string(),
            size: 1.0,
        }
    }
}
