// Reconciliation of watch-progress records between local state and an
// imported document.
//
// Two quantities must never regress: `updated_at` and `progress.watched` are
// taken as the max of both sides. Descriptive metadata (title, year, poster,
// type) and `duration` always come from the incoming record, even when it is
// older by timestamp; duration is the media's total length as the importer
// knows it, not a growing quantity. Map entries (seasons, episodes) are only
// ever inserted or updated, never removed.

use settings_port_models::{Episode, MediaProgress, PlaybackProgress};

/// Folds an incoming progress record into the local one, if any, producing
/// the record to store. Pure; the caller does the write.
pub fn reconcile_item(local: Option<&MediaProgress>, incoming: &MediaProgress) -> MediaProgress {
    let Some(local) = local else {
        // First mention of this title: take the incoming record verbatim,
        // seasons and episodes included.
        return incoming.clone();
    };

    // Presence of a movie-level progress span follows the incoming side; an
    // import without one clears it.
    let progress = incoming.progress.map(|inc| PlaybackProgress {
        watched: local.progress.map_or(0.0, |p| p.watched).max(inc.watched),
        duration: inc.duration,
    });

    // Seasons carry no timestamp; the latest import wins per id. Local-only
    // seasons stay.
    let mut seasons = local.seasons.clone();
    for (id, season) in &incoming.seasons {
        seasons.insert(id.clone(), season.clone());
    }

    let mut episodes = local.episodes.clone();
    for (id, episode) in &incoming.episodes {
        let merged = match local.episodes.get(id) {
            Some(existing) => reconcile_episode(existing, episode),
            None => episode.clone(),
        };
        episodes.insert(id.clone(), merged);
    }

    MediaProgress {
        title: incoming.title.clone(),
        year: incoming.year,
        poster: incoming.poster.clone(),
        kind: incoming.kind,
        updated_at: local.updated_at.max(incoming.updated_at),
        progress,
        seasons,
        episodes,
    }
}

fn reconcile_episode(local: &Episode, incoming: &Episode) -> Episode {
    Episode {
        title: incoming.title.clone(),
        number: incoming.number,
        id: incoming.id.clone(),
        season_id: incoming.season_id.clone(),
        updated_at: local.updated_at.max(incoming.updated_at),
        progress: PlaybackProgress {
            watched: local.progress.watched.max(incoming.progress.watched),
            duration: incoming.progress.duration,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settings_port_models::{MediaKind, Season};
    use std::collections::HashMap;

    fn create_movie(title: &str, updated_at: i64, progress: Option<(f64, f64)>) -> MediaProgress {
        MediaProgress {
            title: title.to_string(),
            year: Some(2020),
            poster: None,
            kind: MediaKind::Movie,
            updated_at,
            progress: progress.map(|(watched, duration)| PlaybackProgress { watched, duration }),
            seasons: HashMap::new(),
            episodes: HashMap::new(),
        }
    }

    fn create_episode(id: &str, season_id: &str, updated_at: i64, watched: f64) -> Episode {
        Episode {
            title: format!("Episode {id}"),
            number: 1,
            id: id.to_string(),
            season_id: season_id.to_string(),
            updated_at,
            progress: PlaybackProgress {
                watched,
                duration: 1200.0,
            },
        }
    }

    fn create_season(id: &str, number: u32) -> Season {
        Season {
            title: format!("Season {number}"),
            number,
            id: id.to_string(),
        }
    }

    #[test]
    fn test_missing_local_inserts_incoming_verbatim() {
        let mut incoming = create_movie("Show", 100, None);
        incoming.kind = MediaKind::Show;
        incoming
            .seasons
            .insert("s1".to_string(), create_season("s1", 1));
        incoming
            .episodes
            .insert("e1".to_string(), create_episode("e1", "s1", 100, 30.0));
        incoming
            .episodes
            .insert("e2".to_string(), create_episode("e2", "s1", 100, 45.0));

        let merged = reconcile_item(None, &incoming);
        assert_eq!(merged, incoming);
    }

    #[test]
    fn test_older_import_keeps_watched_but_overwrites_metadata() {
        let local = create_movie("Old Title", 100, Some((30.0, 100.0)));
        let mut incoming = create_movie("New Title", 90, Some((50.0, 120.0)));
        incoming.poster = Some("p2".to_string());

        let merged = reconcile_item(Some(&local), &incoming);
        assert_eq!(merged.updated_at, 100);
        assert_eq!(merged.title, "New Title");
        assert_eq!(merged.poster.as_deref(), Some("p2"));
        let progress = merged.progress.unwrap();
        assert_eq!(progress.watched, 50.0);
        assert_eq!(progress.duration, 120.0);
    }

    #[test]
    fn test_watched_never_regresses() {
        let local = create_movie("Movie", 100, Some((200.0, 3600.0)));
        let incoming = create_movie("Movie", 150, Some((150.0, 3600.0)));

        let merged = reconcile_item(Some(&local), &incoming);
        assert_eq!(merged.progress.unwrap().watched, 200.0);
        assert_eq!(merged.updated_at, 150);
    }

    #[test]
    fn test_incoming_without_progress_clears_it() {
        let local = create_movie("Movie", 100, Some((30.0, 100.0)));
        let incoming = create_movie("Movie", 200, None);

        let merged = reconcile_item(Some(&local), &incoming);
        assert!(merged.progress.is_none());
    }

    #[test]
    fn test_idempotent() {
        let local = create_movie("Movie", 100, Some((30.0, 100.0)));
        let incoming = create_movie("Movie", 90, Some((50.0, 120.0)));

        let once = reconcile_item(Some(&local), &incoming);
        let twice = reconcile_item(Some(&once), &incoming);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_monotonic_over_any_merge_sequence() {
        let imports = [
            create_movie("Movie", 300, Some((40.0, 100.0))),
            create_movie("Movie", 100, Some((80.0, 100.0))),
            create_movie("Movie", 200, Some((10.0, 100.0))),
        ];

        let mut current = create_movie("Movie", 50, Some((5.0, 100.0)));
        for incoming in &imports {
            let merged = reconcile_item(Some(&current), incoming);
            assert!(merged.updated_at >= current.updated_at);
            assert!(merged.progress.unwrap().watched >= current.progress.unwrap().watched);
            current = merged;
        }
        assert_eq!(current.updated_at, 300);
        assert_eq!(current.progress.unwrap().watched, 80.0);
    }

    #[test]
    fn test_episode_watched_not_regressed() {
        let mut local = create_movie("Show", 100, None);
        local.kind = MediaKind::Show;
        local
            .episodes
            .insert("e1".to_string(), create_episode("e1", "s1", 100, 200.0));

        let mut incoming = local.clone();
        incoming
            .episodes
            .insert("e1".to_string(), create_episode("e1", "s1", 150, 150.0));

        let merged = reconcile_item(Some(&local), &incoming);
        let episode = &merged.episodes["e1"];
        assert_eq!(episode.progress.watched, 200.0);
        assert_eq!(episode.updated_at, 150);
    }

    #[test]
    fn test_local_only_entries_are_kept() {
        let mut local = create_movie("Show", 100, None);
        local.kind = MediaKind::Show;
        local
            .seasons
            .insert("s1".to_string(), create_season("s1", 1));
        local
            .episodes
            .insert("e1".to_string(), create_episode("e1", "s1", 100, 30.0));

        let mut incoming = create_movie("Show", 100, None);
        incoming.kind = MediaKind::Show;
        incoming
            .seasons
            .insert("s2".to_string(), create_season("s2", 2));
        incoming
            .episodes
            .insert("e2".to_string(), create_episode("e2", "s2", 100, 45.0));

        let merged = reconcile_item(Some(&local), &incoming);
        assert_eq!(merged.seasons.len(), 2);
        assert_eq!(merged.episodes.len(), 2);
        assert!(merged.episodes.contains_key("e1"));
    }

    #[test]
    fn test_incoming_season_overwrites_local_entry() {
        let mut local = create_movie("Show", 100, None);
        local.kind = MediaKind::Show;
        local
            .seasons
            .insert("s1".to_string(), create_season("s1", 1));

        let mut incoming = local.clone();
        let renamed = Season {
            title: "Season One (Remastered)".to_string(),
            number: 1,
            id: "s1".to_string(),
        };
        incoming.seasons.insert("s1".to_string(), renamed.clone());

        let merged = reconcile_item(Some(&local), &incoming);
        assert_eq!(merged.seasons["s1"], renamed);
    }

    #[test]
    fn test_new_episode_inserted_verbatim() {
        let mut local = create_movie("Show", 100, None);
        local.kind = MediaKind::Show;

        let mut incoming = local.clone();
        let episode = create_episode("e5", "s2", 400, 720.0);
        incoming.episodes.insert("e5".to_string(), episode.clone());

        let merged = reconcile_item(Some(&local), &incoming);
        assert_eq!(merged.episodes["e5"], episode);
    }
}
