//! Clip store maintenance commands.
//!
//! Synthesized clips accumulate one file per distinct preview; these
//! commands are the release valve.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use wubble_audio::ClipStore;

/// Removes all stored clips.
pub fn clear(store: ClipStore) -> Result<ExitCode> {
    println!("{}", "Clearing synthesized clips...".cyan().bold());

    let count = store.clear()?;
    if count == 0 {
        println!("  {}", "Clip store is already empty".dimmed());
    } else {
        println!(
            "  {} Removed {} {}",
            "SUCCESS".green().bold(),
            count,
            if count == 1 { "clip" } else { "clips" }
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Shows clip store information.
pub fn info(store: ClipStore) -> Result<ExitCode> {
    println!("{}", "Clip Store Information".cyan().bold());

    let info = store.info()?;
    println!("  {}: {}", "Clip directory".dimmed(), info.root.display());
    println!("  {}: {}", "Clip count".dimmed(), info.clip_count);

    let size_mb = info.total_size_bytes as f64 / (1024.0 * 1024.0);
    if size_mb >= 1.0 {
        println!("  {}: {:.2} MB", "Total size".dimmed(), size_mb);
    } else {
        println!(
            "  {}: {:.2} KB",
            "Total size".dimmed(),
            info.total_size_bytes as f64 / 1024.0
        );
    }

    Ok(ExitCode::SUCCESS)
}
