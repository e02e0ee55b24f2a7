//! Playback, like, and theme toggles.

use std::process::ExitCode;

use anyhow::{bail, Result};
use colored::Colorize;

use wubble_core::{JsonFileStore, MusicStore};

/// Loads a track into the preview slot and toggles playback.
///
/// Without an id, the most recent track is used. Loading goes through
/// `complete_generation` — setting the current track is exactly its
/// contract, and it leaves the recent list unchanged for an id that is
/// already at the head.
pub fn run_play(mut store: MusicStore<JsonFileStore>, id: Option<&str>) -> Result<ExitCode> {
    let track = match id {
        Some(id) => store
            .state()
            .recent_tracks
            .iter()
            .find(|t| t.id == id)
            .cloned(),
        None => store.state().recent_tracks.first().cloned(),
    };
    let Some(track) = track else {
        match id {
            Some(id) => bail!("no recent track with id {}", id),
            None => bail!("no tracks yet; run `wubble generate` first"),
        }
    };

    store.complete_generation(track);
    store.toggle_playback();

    let state = store.state();
    let track = state.current_track.as_ref().expect("track was just loaded");
    if state.is_playing {
        println!("{} {}", "Playing".green().bold(), track.title);
        println!("  {}: {}", "Clip".dimmed(), track.audio_url);
    } else {
        println!("{} {}", "Paused".yellow().bold(), track.title);
    }

    Ok(ExitCode::SUCCESS)
}

/// Toggles the like flag of the track with `id`.
pub fn run_like(mut store: MusicStore<JsonFileStore>, id: &str) -> Result<ExitCode> {
    if !store.state().recent_tracks.iter().any(|t| t.id == id) {
        bail!("no recent track with id {}", id);
    }

    store.toggle_like(id);

    let track = store
        .state()
        .recent_tracks
        .iter()
        .find(|t| t.id == id)
        .expect("toggling a like never removes the recent entry");
    if track.is_liked {
        println!("{} {}", "Liked".red().bold(), track.title);
    } else {
        println!("{} {}", "Unliked".dimmed(), track.title);
    }

    Ok(ExitCode::SUCCESS)
}

/// Flips the color theme.
pub fn run_theme(mut store: MusicStore<JsonFileStore>) -> Result<ExitCode> {
    store.toggle_theme();
    println!(
        "{} {}",
        "Theme:".cyan().bold(),
        store.state().theme.as_str()
    );
    Ok(ExitCode::SUCCESS)
}
