use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::media::MediaKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookmarkSettings {
    pub bookmarks: HashMap<String, Bookmark>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub updated_at: i64,
}
