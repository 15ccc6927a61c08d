// Structural validation of an untrusted settings document.
//
// Every top-level domain key is optional and unknown top-level keys are
// ignored, so documents from newer builds still import. Within a present
// domain the shape is fixed: the first field that fails its check aborts the
// whole import, and the error names the offending field's dotted path and
// the kind that was expected there.

use serde_json::{Map, Value};
use settings_port_models::{
    Account, AuthSettings, Bookmark, BookmarkSettings, Episode, LanguageSettings, MediaKind,
    MediaProgress, PlaybackProgress, PreferenceSettings, Profile, ProgressSettings,
    QualityPreference, QualitySettings, QualityTier, Season, Snapshot, SubtitleSettings,
    SubtitleStyling, ThemeSettings, VolumeSettings,
};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field `{path}`: expected {expected}")]
pub struct ValidationError {
    pub path: String,
    pub expected: String,
}

pub fn validate_snapshot(doc: &Value) -> Result<Snapshot, ValidationError> {
    let root = doc.as_object().ok_or_else(|| invalid("$", "an object"))?;
    Ok(Snapshot {
        auth: section(root, "auth", auth_section)?,
        bookmarks: section(root, "bookmarks", bookmarks_section)?,
        language: section(root, "language", language_section)?,
        preferences: section(root, "preferences", preferences_section)?,
        progress: section(root, "progress", progress_section)?,
        quality: section(root, "quality", quality_section)?,
        subtitles: section(root, "subtitles", subtitles_section)?,
        theme: section(root, "theme", theme_section)?,
        volume: section(root, "volume", volume_section)?,
    })
}

fn section<T>(
    root: &Map<String, Value>,
    key: &'static str,
    parse: fn(&Value, &str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    root.get(key).map(|v| parse(v, key)).transpose()
}

fn auth_section(v: &Value, path: &str) -> Result<AuthSettings, ValidationError> {
    let obj = object(v, path)?;
    let account = match obj.get("account") {
        None | Some(Value::Null) => None,
        Some(v) => Some(account(v, &join(path, "account"))?),
    };
    Ok(AuthSettings {
        account,
        backend_url: nullable_string_field(obj, path, "backendUrl")?,
        proxy_set: nullable_string_array_field(obj, path, "proxySet")?,
    })
}

fn account(v: &Value, path: &str) -> Result<Account, ValidationError> {
    let obj = object(v, path)?;
    let (profile_value, profile_path) = required(obj, path, "profile")?;
    let profile_obj = object(profile_value, &profile_path)?;
    Ok(Account {
        profile: Profile {
            color_a: string_field(profile_obj, &profile_path, "colorA")?,
            color_b: string_field(profile_obj, &profile_path, "colorB")?,
            icon: string_field(profile_obj, &profile_path, "icon")?,
        },
        session_id: string_field(obj, path, "sessionId")?,
        user_id: string_field(obj, path, "userId")?,
        token: string_field(obj, path, "token")?,
        seed: string_field(obj, path, "seed")?,
        device_name: string_field(obj, path, "deviceName")?,
    })
}

fn bookmarks_section(v: &Value, path: &str) -> Result<BookmarkSettings, ValidationError> {
    let obj = object(v, path)?;
    let (value, child) = required(obj, path, "bookmarks")?;
    Ok(BookmarkSettings {
        bookmarks: map_of(value, &child, bookmark)?,
    })
}

fn bookmark(v: &Value, path: &str) -> Result<Bookmark, ValidationError> {
    let obj = object(v, path)?;
    Ok(Bookmark {
        title: string_field(obj, path, "title")?,
        year: opt_u32_field(obj, path, "year")?,
        poster: opt_string_field(obj, path, "poster")?,
        kind: media_kind_field(obj, path)?,
        updated_at: i64_field(obj, path, "updatedAt")?,
    })
}

fn language_section(v: &Value, path: &str) -> Result<LanguageSettings, ValidationError> {
    let obj = object(v, path)?;
    Ok(LanguageSettings {
        language: string_field(obj, path, "language")?,
    })
}

fn preferences_section(v: &Value, path: &str) -> Result<PreferenceSettings, ValidationError> {
    let obj = object(v, path)?;
    Ok(PreferenceSettings {
        enable_thumbnails: bool_field(obj, path, "enableThumbnails")?,
    })
}

fn progress_section(v: &Value, path: &str) -> Result<ProgressSettings, ValidationError> {
    let obj = object(v, path)?;
    let (value, child) = required(obj, path, "items")?;
    Ok(ProgressSettings {
        items: map_of(value, &child, media_progress)?,
    })
}

fn media_progress(v: &Value, path: &str) -> Result<MediaProgress, ValidationError> {
    let obj = object(v, path)?;
    let progress = match obj.get("progress") {
        None => None,
        Some(v) => Some(playback_progress(v, &join(path, "progress"))?),
    };
    let (seasons_value, seasons_path) = required(obj, path, "seasons")?;
    let (episodes_value, episodes_path) = required(obj, path, "episodes")?;
    Ok(MediaProgress {
        title: string_field(obj, path, "title")?,
        year: opt_u32_field(obj, path, "year")?,
        poster: opt_string_field(obj, path, "poster")?,
        kind: media_kind_field(obj, path)?,
        updated_at: i64_field(obj, path, "updatedAt")?,
        progress,
        seasons: map_of(seasons_value, &seasons_path, season)?,
        episodes: map_of(episodes_value, &episodes_path, episode)?,
    })
}

fn season(v: &Value, path: &str) -> Result<Season, ValidationError> {
    let obj = object(v, path)?;
    Ok(Season {
        title: string_field(obj, path, "title")?,
        number: u32_field(obj, path, "number")?,
        id: string_field(obj, path, "id")?,
    })
}

fn episode(v: &Value, path: &str) -> Result<Episode, ValidationError> {
    let obj = object(v, path)?;
    let (progress_value, progress_path) = required(obj, path, "progress")?;
    Ok(Episode {
        title: string_field(obj, path, "title")?,
        number: u32_field(obj, path, "number")?,
        id: string_field(obj, path, "id")?,
        season_id: string_field(obj, path, "seasonId")?,
        updated_at: i64_field(obj, path, "updatedAt")?,
        progress: playback_progress(progress_value, &progress_path)?,
    })
}

fn playback_progress(v: &Value, path: &str) -> Result<PlaybackProgress, ValidationError> {
    let obj = object(v, path)?;
    Ok(PlaybackProgress {
        watched: f64_field(obj, path, "watched")?,
        duration: f64_field(obj, path, "duration")?,
    })
}

fn quality_section(v: &Value, path: &str) -> Result<QualitySettings, ValidationError> {
    let obj = object(v, path)?;
    let (value, child) = required(obj, path, "quality")?;
    let inner = object(value, &child)?;

    let tier_path = join(&child, "lastChosenQuality");
    let tier_expected = format!("{} or null", one_of(&QualityTier::TOKENS));
    let last_chosen_quality = match inner.get("lastChosenQuality") {
        Some(Value::Null) => None,
        Some(Value::String(token)) => Some(
            QualityTier::from_token(token)
                .ok_or_else(|| invalid(&tier_path, tier_expected.as_str()))?,
        ),
        _ => return Err(invalid(&tier_path, tier_expected.as_str())),
    };

    Ok(QualitySettings {
        quality: QualityPreference {
            automatic_quality: bool_field(inner, &child, "automaticQuality")?,
            last_chosen_quality,
        },
    })
}

fn subtitles_section(v: &Value, path: &str) -> Result<SubtitleSettings, ValidationError> {
    let obj = object(v, path)?;
    let (styling_value, styling_path) = required(obj, path, "styling")?;
    let styling_obj = object(styling_value, &styling_path)?;
    Ok(SubtitleSettings {
        last_selected_language: nullable_string_field(obj, path, "lastSelectedLanguage")?,
        styling: SubtitleStyling {
            background_blur: f64_field(styling_obj, &styling_path, "backgroundBlur")?,
            background_opacity: f64_field(styling_obj, &styling_path, "backgroundOpacity")?,
            color: string_field(styling_obj, &styling_path, "color")?,
            size: f64_field(styling_obj, &styling_path, "size")?,
        },
        override_casing: bool_field(obj, path, "overrideCasing")?,
        delay: f64_field(obj, path, "delay")?,
    })
}

fn theme_section(v: &Value, path: &str) -> Result<ThemeSettings, ValidationError> {
    let obj = object(v, path)?;
    Ok(ThemeSettings {
        theme: nullable_string_field(obj, path, "theme")?,
    })
}

fn volume_section(v: &Value, path: &str) -> Result<VolumeSettings, ValidationError> {
    let obj = object(v, path)?;
    Ok(VolumeSettings {
        volume: f64_field(obj, path, "volume")?,
    })
}

fn invalid(path: &str, expected: impl Into<String>) -> ValidationError {
    ValidationError {
        path: path.to_string(),
        expected: expected.into(),
    }
}

fn join(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

fn one_of(tokens: &[&str]) -> String {
    let list = tokens
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("one of {list}")
}

fn object<'a>(v: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    v.as_object().ok_or_else(|| invalid(path, "an object"))
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<(&'a Value, String), ValidationError> {
    let child = join(path, key);
    match obj.get(key) {
        Some(v) => Ok((v, child)),
        None => Err(invalid(&child, "an object")),
    }
}

fn map_of<T>(
    v: &Value,
    path: &str,
    parse: fn(&Value, &str) -> Result<T, ValidationError>,
) -> Result<HashMap<String, T>, ValidationError> {
    let obj = object(v, path)?;
    let mut out = HashMap::with_capacity(obj.len());
    for (id, item) in obj {
        out.insert(id.clone(), parse(item, &join(path, id))?);
    }
    Ok(out)
}

fn string_field(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<String, ValidationError> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| invalid(&join(path, key), "a string"))
}

fn bool_field(obj: &Map<String, Value>, path: &str, key: &str) -> Result<bool, ValidationError> {
    obj.get(key)
        .and_then(Value::as_bool)
        .ok_or_else(|| invalid(&join(path, key), "a boolean"))
}

fn f64_field(obj: &Map<String, Value>, path: &str, key: &str) -> Result<f64, ValidationError> {
    obj.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| invalid(&join(path, key), "a number"))
}

fn i64_field(obj: &Map<String, Value>, path: &str, key: &str) -> Result<i64, ValidationError> {
    obj.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| invalid(&join(path, key), "an integer"))
}

fn u32_field(obj: &Map<String, Value>, path: &str, key: &str) -> Result<u32, ValidationError> {
    obj.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid(&join(path, key), "an integer"))
}

fn opt_string_field(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<Option<String>, ValidationError> {
    match obj.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| invalid(&join(path, key), "a string")),
    }
}

fn opt_u32_field(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<Option<u32>, ValidationError> {
    match obj.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| invalid(&join(path, key), "an integer")),
    }
}

fn nullable_string_field(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<Option<String>, ValidationError> {
    let child = join(path, key);
    match obj.get(key) {
        Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| invalid(&child, "a string or null")),
        None => Err(invalid(&child, "a string or null")),
    }
}

fn nullable_string_array_field(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<Option<Vec<String>>, ValidationError> {
    let child = join(path, key);
    match obj.get(key) {
        Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let element = item
                    .as_str()
                    .ok_or_else(|| invalid(&join(&child, &index.to_string()), "a string"))?;
                out.push(element.to_string());
            }
            Ok(Some(out))
        }
        _ => Err(invalid(&child, "an array of strings or null")),
    }
}

fn media_kind_field(obj: &Map<String, Value>, path: &str) -> Result<MediaKind, ValidationError> {
    let child = join(path, "type");
    let expected = one_of(&MediaKind::TOKENS);
    let token = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid(&child, expected.as_str()))?;
    MediaKind::from_token(token).ok_or_else(|| invalid(&child, expected.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_is_valid() {
        let snapshot = validate_snapshot(&json!({})).unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_unknown_top_level_keys_are_ignored() {
        let doc = json!({
            "theme": { "theme": "dark" },
            "someFutureDomain": { "anything": [1, 2, 3] }
        });
        let snapshot = validate_snapshot(&doc).unwrap();
        assert_eq!(snapshot.theme.unwrap().theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        let err = validate_snapshot(&json!([1, 2])).unwrap_err();
        assert_eq!(err.path, "$");
    }

    #[test]
    fn test_bad_quality_tier_names_the_path() {
        let doc = json!({
            "quality": {
                "quality": { "automaticQuality": true, "lastChosenQuality": "1440" }
            }
        });
        let err = validate_snapshot(&doc).unwrap_err();
        assert_eq!(err.path, "quality.quality.lastChosenQuality");
        assert!(err.expected.contains("\"1080\""));
        assert!(err.to_string().contains("quality.quality.lastChosenQuality"));
    }

    #[test]
    fn test_quality_tier_null_is_accepted() {
        let doc = json!({
            "quality": {
                "quality": { "automaticQuality": false, "lastChosenQuality": null }
            }
        });
        let snapshot = validate_snapshot(&doc).unwrap();
        let quality = snapshot.quality.unwrap().quality;
        assert!(!quality.automatic_quality);
        assert!(quality.last_chosen_quality.is_none());
    }

    #[test]
    fn test_missing_bookmark_title_names_the_entry() {
        let doc = json!({
            "bookmarks": {
                "bookmarks": {
                    "b1": { "type": "movie", "updatedAt": 100 }
                }
            }
        });
        let err = validate_snapshot(&doc).unwrap_err();
        assert_eq!(err.path, "bookmarks.bookmarks.b1.title");
        assert_eq!(err.expected, "a string");
    }

    #[test]
    fn test_bad_media_type_is_rejected() {
        let doc = json!({
            "bookmarks": {
                "bookmarks": {
                    "b1": { "title": "Some Movie", "type": "anime", "updatedAt": 100 }
                }
            }
        });
        let err = validate_snapshot(&doc).unwrap_err();
        assert_eq!(err.path, "bookmarks.bookmarks.b1.type");
    }

    #[test]
    fn test_auth_account_may_be_absent_or_null() {
        let absent = json!({ "auth": { "backendUrl": null, "proxySet": null } });
        let null = json!({ "auth": { "account": null, "backendUrl": null, "proxySet": null } });
        for doc in [absent, null] {
            let snapshot = validate_snapshot(&doc).unwrap();
            assert!(snapshot.auth.unwrap().account.is_none());
        }
    }

    #[test]
    fn test_auth_proxy_set_elements_must_be_strings() {
        let doc = json!({
            "auth": {
                "backendUrl": "https://backend.example",
                "proxySet": ["https://proxy.example", 7]
            }
        });
        let err = validate_snapshot(&doc).unwrap_err();
        assert_eq!(err.path, "auth.proxySet.1");
    }

    #[test]
    fn test_progress_item_shape() {
        let doc = json!({
            "progress": {
                "items": {
                    "m1": {
                        "title": "Some Show",
                        "type": "show",
                        "updatedAt": 1700000000000i64,
                        "seasons": {
                            "s1": { "title": "Season 1", "number": 1, "id": "s1" }
                        },
                        "episodes": {
                            "e1": {
                                "title": "Pilot",
                                "number": 1,
                                "id": "e1",
                                "seasonId": "s1",
                                "updatedAt": 1700000000000i64,
                                "progress": { "watched": 310.5, "duration": 1260.0 }
                            }
                        }
                    }
                }
            }
        });
        let snapshot = validate_snapshot(&doc).unwrap();
        let items = snapshot.progress.unwrap().items;
        let item = &items["m1"];
        assert_eq!(item.kind, MediaKind::Show);
        assert!(item.progress.is_none());
        assert_eq!(item.episodes["e1"].progress.watched, 310.5);
    }

    #[test]
    fn test_episode_without_progress_is_rejected() {
        let doc = json!({
            "progress": {
                "items": {
                    "m1": {
                        "title": "Some Show",
                        "type": "show",
                        "updatedAt": 100,
                        "seasons": {},
                        "episodes": {
                            "e1": {
                                "title": "Pilot",
                                "number": 1,
                                "id": "e1",
                                "seasonId": "s1",
                                "updatedAt": 100
                            }
                        }
                    }
                }
            }
        });
        let err = validate_snapshot(&doc).unwrap_err();
        assert_eq!(err.path, "progress.items.m1.episodes.e1.progress");
    }

    #[test]
    fn test_fractional_timestamp_is_rejected() {
        let doc = json!({
            "bookmarks": {
                "bookmarks": {
                    "b1": { "title": "Some Movie", "type": "movie", "updatedAt": 100.5 }
                }
            }
        });
        let err = validate_snapshot(&doc).unwrap_err();
        assert_eq!(err.path, "bookmarks.bookmarks.b1.updatedAt");
        assert_eq!(err.expected, "an integer");
    }

    #[test]
    fn test_fractional_season_number_is_rejected() {
        let doc = json!({
            "progress": {
                "items": {
                    "m1": {
                        "title": "Some Show",
                        "type": "show",
                        "updatedAt": 100,
                        "seasons": {
                            "s1": { "title": "Season 1", "number": 1.5, "id": "s1" }
                        },
                        "episodes": {}
                    }
                }
            }
        });
        let err = validate_snapshot(&doc).unwrap_err();
        assert_eq!(err.path, "progress.items.m1.seasons.s1.number");
        assert_eq!(err.expected, "an integer");
    }

    #[test]
    fn test_subtitles_shape() {
        let doc = json!({
            "subtitles": {
                "lastSelectedLanguage": null,
                "styling": {
                    "backgroundBlur": 0.5,
                    "backgroundOpacity": 0.75,
                    "color": "#ffff00",
                    "size": 1.2
                },
                "overrideCasing": true,
                "delay": -0.5
            }
        });
        let subtitles = validate_snapshot(&doc).unwrap().subtitles.unwrap();
        assert!(subtitles.last_selected_language.is_none());
        assert_eq!(subtitles.styling.color, "#ffff00");
        assert!(subtitles.override_casing);
        assert_eq!(subtitles.delay, -0.5);
    }
}
