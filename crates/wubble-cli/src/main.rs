//! Wubble CLI - terminal shell for the music-preview generator
//!
//! This binary drives the core through its transition surface: generate a
//! track from a mood/genre selection, browse and like the history, toggle
//! playback and theme state, and export synthesized clips.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;

use wubble_core::{Genre, Mood};

/// Wubble - AI-flavored music preview generator
#[derive(Parser)]
#[command(name = "wubble")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding the persisted state files (default: per-user data dir)
    #[arg(long, global = true)]
    state_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new preview track from the selected mood and genre
    Generate {
        /// Mood selection (happy, sad, energetic, chill; default: happy)
        #[arg(short, long)]
        mood: Option<Mood>,

        /// Genre selection (pop, lo-fi, cinematic, edm; default: pop)
        #[arg(short, long)]
        genre: Option<Genre>,

        /// RNG seed for reproducible titles and durations
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON (no animation, no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List recently generated tracks (most recent first)
    Recent {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List liked tracks
    Liked {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle the like flag on a recent track
    Like {
        /// Track id (shown by `recent` and `generate`)
        id: String,
    },

    /// Load a track into the preview slot and toggle playback
    Play {
        /// Track id (default: the most recent track)
        id: Option<String>,
    },

    /// Toggle the color theme between light and dark
    Theme,

    /// Export a track's synthesized clip to a WAV file
    Export {
        /// Track id (shown by `recent` and `generate`)
        id: String,

        /// Output path (default: <title>.wav in the current directory)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Manage the synthesized clip store
    Clips {
        #[command(subcommand)]
        command: ClipsCommands,
    },
}

#[derive(Subcommand)]
enum ClipsCommands {
    /// Remove all stored clips
    Clear,
    /// Show clip store information (clip count, total size)
    Info,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let state_dir = cli.state_dir.as_deref();

    let result = match cli.command {
        Commands::Generate {
            mood,
            genre,
            seed,
            json,
        } => commands::open_store(state_dir).and_then(|store| {
            let clips = commands::open_clip_store(state_dir)?;
            commands::generate::run(
                store,
                wubble_audio::TrackFactory::new(clips),
                mood,
                genre,
                seed,
                json,
            )
        }),
        Commands::Recent { json } => commands::open_store(state_dir)
            .and_then(|store| commands::library::run_recent(store, json)),
        Commands::Liked { json } => commands::open_store(state_dir)
            .and_then(|store| commands::library::run_liked(store, json)),
        Commands::Like { id } => commands::open_store(state_dir)
            .and_then(|store| commands::playback::run_like(store, &id)),
        Commands::Play { id } => commands::open_store(state_dir)
            .and_then(|store| commands::playback::run_play(store, id.as_deref())),
        Commands::Theme => {
            commands::open_store(state_dir).and_then(commands::playback::run_theme)
        }
        Commands::Export { id, out } => commands::open_store(state_dir)
            .and_then(|store| commands::export::run(store, &id, out.as_deref())),
        Commands::Clips { command } => commands::open_clip_store(state_dir).and_then(|clips| {
            match command {
                ClipsCommands::Clear => commands::clips::clear(clips),
                ClipsCommands::Info => commands::clips::info(clips),
            }
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
