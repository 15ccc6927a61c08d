use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QualitySettings {
    pub quality: QualityPreference,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityPreference {
    pub automatic_quality: bool,
    pub last_chosen_quality: Option<QualityTier>,
}

impl Default for QualityPreference {
    fn default() -> Self {
        Self {
            automatic_quality: true,
            last_chosen_quality: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QualityTier {
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "360")]
    Q360,
    #[serde(rename = "480")]
    Q480,
    #[serde(rename = "720")]
    Q720,
    #[serde(rename = "1080")]
    Q1080,
    #[serde(rename = "4k")]
    Q4k,
}

impl QualityTier {
    /// Closed set of wire tokens accepted for a quality tier.
    pub const TOKENS: [&'static str; 6] = ["unknown", "360", "480", "720", "1080", "4k"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "unknown" => Some(QualityTier::Unknown),
            "360" => Some(QualityTier::Q360),
            "480" => Some(QualityTier::Q480),
            "720" => Some(QualityTier::Q720),
            "1080" => Some(QualityTier::Q1080),
            "4k" => Some(QualityTier::Q4k),
            _ => None,
        }
    }
}
