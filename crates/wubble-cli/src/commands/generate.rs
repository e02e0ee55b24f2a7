//! The generate command: the simulated-AI generation flow.
//!
//! Orchestration lives here, not in the store: begin, animate for the
//! nominal two seconds, build the track, complete. Running as a single-shot
//! process also guarantees no second generation can start while one is
//! pending.

use std::io::Write;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use wubble_audio::{create_rng, TrackFactory};
use wubble_core::{format_duration, Genre, JsonFileStore, Mood, MusicStore};

/// Progress animation: 50 steps of 40 ms, two seconds nominal.
const PROGRESS_STEPS: u32 = 50;
const PROGRESS_STEP_MS: u64 = 40;
const PROGRESS_BAR_WIDTH: u32 = 20;

/// Runs the generation flow and prints the new track.
pub fn run(
    mut store: MusicStore<JsonFileStore>,
    factory: TrackFactory,
    mood: Option<Mood>,
    genre: Option<Genre>,
    seed: Option<u32>,
    json: bool,
) -> Result<ExitCode> {
    if let Some(mood) = mood {
        store.select_mood(mood);
    }
    if let Some(genre) = genre {
        store.select_genre(genre);
    }

    let mood = store.state().selected_mood;
    let genre = store.state().selected_genre;

    store.begin_generation();
    if !json {
        animate_progress(mood, genre);
    }

    let mut rng = match seed {
        Some(seed) => create_rng(seed),
        None => Pcg32::from_entropy(),
    };
    let track = factory.create(mood, genre, &mut rng);
    store.complete_generation(track.clone());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "track": track }))?
        );
    } else {
        println!();
        println!("{} {}", "Track:".cyan().bold(), track.title.bold());
        println!("  {}: {} / {}", "Style".dimmed(), track.mood, track.genre);
        println!(
            "  {}: {}",
            "Length".dimmed(),
            format_duration(track.duration)
        );
        println!("  {}: {}", "Clip".dimmed(), track.audio_url);
        println!("  {}: {}", "Id".dimmed(), track.id);
    }

    Ok(ExitCode::SUCCESS)
}

fn animate_progress(mood: Mood, genre: Genre) {
    println!(
        "Creating your {} {} track...",
        mood.as_str().to_lowercase(),
        genre.as_str().to_lowercase()
    );

    let mut stdout = std::io::stdout();
    for step in 0..=PROGRESS_STEPS {
        let filled = (step * PROGRESS_BAR_WIDTH / PROGRESS_STEPS) as usize;
        let rest = PROGRESS_BAR_WIDTH as usize - filled;
        print!(
            "\r  [{}{}] {:>3}%",
            "#".repeat(filled).magenta(),
            "-".repeat(rest).dimmed(),
            step * 100 / PROGRESS_STEPS
        );
        let _ = stdout.flush();
        if step < PROGRESS_STEPS {
            thread::sleep(Duration::from_millis(PROGRESS_STEP_MS));
        }
    }
    println!();
}
