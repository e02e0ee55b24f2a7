//! CLI command implementations.

pub mod clips;
pub mod export;
pub mod generate;
pub mod library;
pub mod playback;

use std::path::PathBuf;

use anyhow::{Context, Result};
use wubble_audio::ClipStore;
use wubble_core::{JsonFileStore, MusicStore};

/// Resolves the state directory: the `--state-dir` override, or the
/// per-user data directory.
pub fn state_dir(override_dir: Option<&str>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => dirs::data_dir()
            .map(|d| d.join("wubble"))
            .context("could not determine a data directory; pass --state-dir"),
    }
}

/// Hydrates the state store from the state directory.
pub fn open_store(override_dir: Option<&str>) -> Result<MusicStore<JsonFileStore>> {
    let root = state_dir(override_dir)?;
    Ok(MusicStore::hydrate(JsonFileStore::new(root)))
}

/// Opens the clip store. With a `--state-dir` override, clips live next to
/// the state files; otherwise in the per-user cache directory.
pub fn open_clip_store(override_dir: Option<&str>) -> Result<ClipStore> {
    match override_dir {
        Some(dir) => Ok(ClipStore::new(PathBuf::from(dir).join("clips"))),
        None => ClipStore::default_root()
            .map(ClipStore::new)
            .context("could not determine a cache directory; pass --state-dir"),
    }
}
