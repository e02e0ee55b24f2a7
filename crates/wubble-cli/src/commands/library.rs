//! Listing commands for the recent and liked track collections.

use std::process::ExitCode;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;

use wubble_core::{format_duration, JsonFileStore, MusicStore, Track};

/// Lists the recent-tracks history, most recent first.
pub fn run_recent(store: MusicStore<JsonFileStore>, json: bool) -> Result<ExitCode> {
    list("Recent tracks", &store.state().recent_tracks, json)
}

/// Lists the liked tracks in insertion order.
pub fn run_liked(store: MusicStore<JsonFileStore>, json: bool) -> Result<ExitCode> {
    list("Liked tracks", &store.state().liked_tracks, json)
}

fn list(heading: &str, tracks: &[Track], json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(tracks)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", heading.cyan().bold());
    if tracks.is_empty() {
        println!("  {}", "none yet".dimmed());
        return Ok(ExitCode::SUCCESS);
    }

    for track in tracks {
        let heart = if track.is_liked {
            "*".red().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "  {} {:<24} {:>5}  {:<9} {:<9}  {}  {}",
            heart,
            track.title,
            format_duration(track.duration),
            track.mood.to_string(),
            track.genre.to_string(),
            created_at_label(track).dimmed(),
            track.id.dimmed(),
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn created_at_label(track: &Track) -> String {
    DateTime::<Utc>::from_timestamp_millis(track.created_at as i64)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| track.created_at.to_string())
}
