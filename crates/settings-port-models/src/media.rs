use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Show,
}

impl MediaKind {
    /// Closed set of wire tokens accepted for the `type` field.
    pub const TOKENS: [&'static str; 2] = ["movie", "show"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "movie" => Some(MediaKind::Movie),
            "show" => Some(MediaKind::Show),
            _ => None,
        }
    }
}
