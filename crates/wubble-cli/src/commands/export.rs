//! Export: copy a track's synthesized clip to a local WAV file.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use wubble_core::{JsonFileStore, MusicStore};

/// Copies the clip of the track with `id` to `out`, defaulting to a file
/// named after the track title in the current directory.
pub fn run(store: MusicStore<JsonFileStore>, id: &str, out: Option<&str>) -> Result<ExitCode> {
    let state = store.state();
    let track = state
        .recent_tracks
        .iter()
        .chain(state.liked_tracks.iter())
        .find(|t| t.id == id)
        .with_context(|| format!("no track with id {}", id))?;

    if track.audio_url.starts_with("http://") || track.audio_url.starts_with("https://") {
        bail!(
            "track {} uses the remote fallback clip; nothing local to export",
            track.id
        );
    }

    let dest = match out {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(export_file_name(&track.title)),
    };
    fs::copy(&track.audio_url, &dest)
        .with_context(|| format!("failed to copy clip {}", track.audio_url))?;

    println!(
        "{} {} -> {}",
        "Exported".green().bold(),
        track.title,
        dest.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Download-style file naming: non-alphanumerics become underscores,
/// lowercased, `.wav` appended.
fn export_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.wav", stem)
}
