//! Client state aggregate and its named transitions.
//!
//! A [`MusicStore`] owns the single mutable [`MusicState`] and the
//! persistence port. Every transition is a total function over the state
//! space: no transition ever fails, and each runs to completion before any
//! other read or transition is observed (the store is single-threaded).
//! Three fields — the recent list, the liked list, and the theme — are
//! mirrored to the key-value port after the in-memory mutation; those writes
//! are best-effort and never roll anything back.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::persist::KeyValueStore;
use crate::track::{Genre, Mood, Theme, Track};

/// Persisted key for the recent-tracks list.
pub const RECENT_TRACKS_KEY: &str = "recent-tracks";
/// Persisted key for the liked-tracks list.
pub const LIKED_TRACKS_KEY: &str = "liked-tracks";
/// Persisted key for the theme.
pub const THEME_KEY: &str = "theme";

/// Maximum length of the recent-tracks list.
pub const MAX_RECENT_TRACKS: usize = 10;

/// The single mutable state aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct MusicState {
    /// The track currently loaded in the preview, if any.
    pub current_track: Option<Track>,
    pub is_generating: bool,
    pub is_playing: bool,
    pub selected_mood: Mood,
    pub selected_genre: Genre,
    /// Most-recent-first, deduplicated by id, at most [`MAX_RECENT_TRACKS`].
    pub recent_tracks: Vec<Track>,
    /// Keyed by id; insertion order preserved.
    pub liked_tracks: Vec<Track>,
    pub theme: Theme,
}

/// State store: the aggregate plus the persistence port it mirrors into.
#[derive(Debug)]
pub struct MusicStore<S: KeyValueStore> {
    state: MusicState,
    kv: S,
}

impl<S: KeyValueStore> MusicStore<S> {
    /// Builds the store, hydrating the persisted fields from `kv`.
    ///
    /// Absent or malformed entries fall back to empty lists and the light
    /// theme; hydration never fails.
    pub fn hydrate(kv: S) -> Self {
        let recent_tracks: Vec<Track> = read_json(&kv, RECENT_TRACKS_KEY).unwrap_or_default();
        let liked_tracks: Vec<Track> = read_json(&kv, LIKED_TRACKS_KEY).unwrap_or_default();
        let theme: Theme = read_json(&kv, THEME_KEY).unwrap_or_default();

        Self {
            state: MusicState {
                current_track: None,
                is_generating: false,
                is_playing: false,
                selected_mood: Mood::default(),
                selected_genre: Genre::default(),
                recent_tracks,
                liked_tracks,
                theme,
            },
            kv,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &MusicState {
        &self.state
    }

    /// Sets the selected mood.
    pub fn select_mood(&mut self, mood: Mood) {
        self.state.selected_mood = mood;
    }

    /// Sets the selected genre.
    pub fn select_genre(&mut self, genre: Genre) {
        self.state.selected_genre = genre;
    }

    /// Marks a generation as in flight. The caller is responsible for not
    /// starting a second generation while one is pending.
    pub fn begin_generation(&mut self) {
        self.state.is_generating = true;
    }

    /// Installs a freshly generated track as the current one.
    ///
    /// Clears the generating flag, resets playback, prepends the track to
    /// the recent list (removing any older entry with the same id), caps the
    /// list at [`MAX_RECENT_TRACKS`], and persists it.
    pub fn complete_generation(&mut self, track: Track) {
        self.state.recent_tracks.retain(|t| t.id != track.id);
        self.state.recent_tracks.insert(0, track.clone());
        self.state.recent_tracks.truncate(MAX_RECENT_TRACKS);

        self.state.current_track = Some(track);
        self.state.is_generating = false;
        self.state.is_playing = false;

        write_json(&self.kv, RECENT_TRACKS_KEY, &self.state.recent_tracks);
    }

    /// Flips the playback flag.
    pub fn toggle_playback(&mut self) {
        self.state.is_playing = !self.state.is_playing;
    }

    /// Flips the like flag of the track with `track_id`.
    ///
    /// The flip is applied to the current track and to the matching recent
    /// entry, keeping the two in sync. Liked-list membership is then
    /// recomputed from the post-toggle record: the recent entry if one
    /// matches, else the current track. If no record matches the id at all,
    /// the whole transition is a no-op and nothing is persisted.
    pub fn toggle_like(&mut self, track_id: &str) {
        if let Some(current) = self.state.current_track.as_mut() {
            if current.id == track_id {
                current.is_liked = !current.is_liked;
            }
        }
        for track in &mut self.state.recent_tracks {
            if track.id == track_id {
                track.is_liked = !track.is_liked;
            }
        }

        let authoritative = self
            .state
            .recent_tracks
            .iter()
            .find(|t| t.id == track_id)
            .or_else(|| {
                self.state
                    .current_track
                    .as_ref()
                    .filter(|t| t.id == track_id)
            })
            .cloned();

        if let Some(track) = authoritative {
            self.state.liked_tracks.retain(|t| t.id != track_id);
            if track.is_liked {
                self.state.liked_tracks.push(track);
            }
            write_json(&self.kv, LIKED_TRACKS_KEY, &self.state.liked_tracks);
            write_json(&self.kv, RECENT_TRACKS_KEY, &self.state.recent_tracks);
        }
    }

    /// Flips the theme and persists it.
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        write_json(&self.kv, THEME_KEY, &self.state.theme);
    }
}

fn read_json<T: DeserializeOwned>(kv: &impl KeyValueStore, key: &str) -> Option<T> {
    kv.read(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

fn write_json<T: Serialize>(kv: &impl KeyValueStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        kv.write(key, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use pretty_assertions::assert_eq;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: "Golden Melody".to_string(),
            mood: Mood::Happy,
            genre: Genre::Pop,
            audio_url: format!("clips/{}.wav", id),
            duration: 150,
            is_liked: false,
            created_at: 0,
        }
    }

    fn store() -> MusicStore<MemoryStore> {
        MusicStore::hydrate(MemoryStore::new())
    }

    #[test]
    fn test_hydrate_defaults_on_empty_storage() {
        let store = store();
        let state = store.state();

        assert_eq!(state.current_track, None);
        assert!(!state.is_generating);
        assert!(!state.is_playing);
        assert_eq!(state.selected_mood, Mood::Happy);
        assert_eq!(state.selected_genre, Genre::Pop);
        assert_eq!(state.recent_tracks, vec![]);
        assert_eq!(state.liked_tracks, vec![]);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_hydrate_defaults_on_malformed_entries() {
        let kv = MemoryStore::with_entries([
            (RECENT_TRACKS_KEY.to_string(), "{not json".to_string()),
            (LIKED_TRACKS_KEY.to_string(), "42".to_string()),
            (THEME_KEY.to_string(), "\"plaid\"".to_string()),
        ]);

        let store = MusicStore::hydrate(kv);
        assert_eq!(store.state().recent_tracks, vec![]);
        assert_eq!(store.state().liked_tracks, vec![]);
        assert_eq!(store.state().theme, Theme::Light);
    }

    #[test]
    fn test_hydrate_restores_persisted_fields() {
        let kv = MemoryStore::new();
        {
            let mut store = MusicStore::hydrate(kv);
            store.complete_generation(track("a"));
            store.toggle_like("a");
            store.toggle_theme();

            // Rebuild from the same backing entries.
            let entries = [RECENT_TRACKS_KEY, LIKED_TRACKS_KEY, THEME_KEY]
                .iter()
                .map(|k| (k.to_string(), store.kv.get(k).unwrap()))
                .collect::<Vec<_>>();
            let rehydrated = MusicStore::hydrate(MemoryStore::with_entries(entries));

            assert_eq!(rehydrated.state().recent_tracks.len(), 1);
            assert!(rehydrated.state().recent_tracks[0].is_liked);
            assert_eq!(rehydrated.state().liked_tracks.len(), 1);
            assert_eq!(rehydrated.state().theme, Theme::Dark);
            // Only the three persisted fields survive.
            assert_eq!(rehydrated.state().current_track, None);
        }
    }

    #[test]
    fn test_selections() {
        let mut store = store();
        store.select_mood(Mood::Sad);
        store.select_genre(Genre::Cinematic);
        assert_eq!(store.state().selected_mood, Mood::Sad);
        assert_eq!(store.state().selected_genre, Genre::Cinematic);
    }

    #[test]
    fn test_complete_generation_resets_flags() {
        let mut store = store();
        store.begin_generation();
        store.toggle_playback();
        assert!(store.state().is_generating);
        assert!(store.state().is_playing);

        store.complete_generation(track("a"));
        assert!(!store.state().is_generating);
        assert!(!store.state().is_playing);
        assert_eq!(store.state().current_track.as_ref().unwrap().id, "a");
    }

    #[test]
    fn test_recent_tracks_caps_at_ten_most_recent() {
        let mut store = store();
        for i in 0..11 {
            store.complete_generation(track(&format!("t{}", i)));
        }

        let ids: Vec<&str> = store
            .state()
            .recent_tracks
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["t10", "t9", "t8", "t7", "t6", "t5", "t4", "t3", "t2", "t1"]
        );
    }

    #[test]
    fn test_recent_tracks_dedupes_by_id() {
        let mut store = store();
        store.complete_generation(track("a"));
        store.complete_generation(track("b"));
        store.complete_generation(track("a"));

        let ids: Vec<&str> = store
            .state()
            .recent_tracks
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_playback_flips() {
        let mut store = store();
        store.toggle_playback();
        assert!(store.state().is_playing);
        store.toggle_playback();
        assert!(!store.state().is_playing);
    }

    #[test]
    fn test_toggle_like_syncs_current_and_recent() {
        let mut store = store();
        store.complete_generation(track("a"));
        store.toggle_like("a");

        let state = store.state();
        assert!(state.current_track.as_ref().unwrap().is_liked);
        assert!(state.recent_tracks[0].is_liked);
        assert_eq!(
            state.current_track.as_ref().unwrap().is_liked,
            state.recent_tracks[0].is_liked
        );
        assert_eq!(state.liked_tracks.len(), 1);
        assert_eq!(state.liked_tracks[0].id, "a");
    }

    #[test]
    fn test_toggle_like_twice_restores_flag() {
        let mut store = store();
        store.complete_generation(track("a"));

        store.toggle_like("a");
        store.toggle_like("a");

        let state = store.state();
        assert!(!state.current_track.as_ref().unwrap().is_liked);
        assert!(!state.recent_tracks[0].is_liked);
        assert_eq!(state.liked_tracks, vec![]);
    }

    #[test]
    fn test_toggle_like_replaces_stale_liked_entry() {
        let mut store = store();
        store.complete_generation(track("a"));
        store.toggle_like("a");
        // Unlike and re-like; the liked list must hold exactly one entry.
        store.toggle_like("a");
        store.toggle_like("a");

        assert_eq!(store.state().liked_tracks.len(), 1);
        assert!(store.state().liked_tracks[0].is_liked);
    }

    #[test]
    fn test_toggle_like_unknown_id_is_noop() {
        let mut store = store();
        store.complete_generation(track("a"));
        let before = store.state().clone();

        store.toggle_like("missing");
        assert_eq!(store.state(), &before);
        assert_eq!(store.kv.get(LIKED_TRACKS_KEY), None);
    }

    #[test]
    fn test_toggle_like_on_recent_entry_without_current_match() {
        let mut store = store();
        store.complete_generation(track("a"));
        store.complete_generation(track("b"));

        // "a" is only in the recent list now; current is "b".
        store.toggle_like("a");

        let state = store.state();
        assert!(!state.current_track.as_ref().unwrap().is_liked);
        assert!(state.recent_tracks[1].is_liked);
        assert_eq!(state.liked_tracks.len(), 1);
        assert_eq!(state.liked_tracks[0].id, "a");
    }

    #[test]
    fn test_generation_scenario_with_like() {
        let mut store = store();
        let a = track("a");
        let b = track("b");

        store.complete_generation(a.clone());
        store.complete_generation(b.clone());
        assert_eq!(store.state().recent_tracks[0].id, "b");
        assert_eq!(store.state().recent_tracks[1].id, "a");

        store.toggle_like("a");
        let state = store.state();
        assert_eq!(state.liked_tracks.len(), 1);
        assert_eq!(state.liked_tracks[0].id, "a");
        assert!(state.liked_tracks[0].is_liked);
        assert!(state.recent_tracks[1].is_liked);
    }

    #[test]
    fn test_toggle_theme_round_trip_persists_final_value() {
        let mut store = store();
        store.toggle_theme();
        assert_eq!(store.state().theme, Theme::Dark);
        assert_eq!(store.kv.get(THEME_KEY), Some("\"dark\"".to_string()));

        store.toggle_theme();
        assert_eq!(store.state().theme, Theme::Light);
        assert_eq!(store.kv.get(THEME_KEY), Some("\"light\"".to_string()));
    }

    #[test]
    fn test_persistence_failure_keeps_memory_state() {
        let mut store = store();
        store.kv.set_fail_writes(true);

        store.complete_generation(track("a"));
        store.toggle_like("a");
        store.toggle_theme();

        // In-memory state mutated normally despite every write being dropped.
        assert_eq!(store.state().recent_tracks.len(), 1);
        assert_eq!(store.state().liked_tracks.len(), 1);
        assert_eq!(store.state().theme, Theme::Dark);
        assert_eq!(store.kv.get(RECENT_TRACKS_KEY), None);
        assert_eq!(store.kv.get(THEME_KEY), None);
    }

    #[test]
    fn test_persisted_recent_tracks_json_shape() {
        let mut store = store();
        store.complete_generation(track("a"));

        let raw = store.kv.get(RECENT_TRACKS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["isLiked"], false);
    }
}
