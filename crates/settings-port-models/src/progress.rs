use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::media::MediaKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressSettings {
    pub items: HashMap<String, MediaProgress>,
}

/// Watch state for a single title. Movies carry a direct `progress` span;
/// shows are tracked per episode, with `seasons` held purely as metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaProgress {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Milliseconds since the epoch of the last write to this record.
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<PlaybackProgress>,
    pub seasons: HashMap<String, Season>,
    pub episodes: HashMap<String, Episode>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlaybackProgress {
    pub watched: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Season {
    pub title: String,
    pub number: u32,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub title: String,
    pub number: u32,
    pub id: String,
    /// Names a season by id; the season entry is not required to exist.
    pub season_id: String,
    pub updated_at: i64,
    pub progress: PlaybackProgress,
}
