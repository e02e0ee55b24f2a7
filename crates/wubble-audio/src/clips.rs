//! Content-addressed on-disk storage for synthesized clips.
//!
//! Each stored clip lives at `<root>/<pcm_hash prefix>.wav`, so identical
//! clips share one file and re-generation never grows the store. Releasing
//! a clip (the revoke-URL analog) and clearing the store keep handle growth
//! bounded across repeated generations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AudioResult;
use crate::wav::WavClip;

/// Length of the hash prefix used for clip file names.
const CLIP_NAME_LEN: usize = 16;

/// Manager for the on-disk clip directory.
#[derive(Debug, Clone)]
pub struct ClipStore {
    root: PathBuf,
}

/// Clip store statistics.
#[derive(Debug, Clone)]
pub struct ClipStoreInfo {
    /// Root directory of the store.
    pub root: PathBuf,
    /// Number of stored clips.
    pub clip_count: u64,
    /// Total size of stored clips in bytes.
    pub total_size_bytes: u64,
}

impl ClipStore {
    /// Creates a store rooted at `root`. The directory is created on first
    /// write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the default clip directory (XDG-compatible).
    pub fn default_root() -> Option<PathBuf> {
        dirs::cache_dir().map(|d| d.join("wubble").join("clips"))
    }

    /// Returns the store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a clip and returns its path.
    ///
    /// The file name is derived from the clip's PCM hash; an existing file
    /// with the same address is reused untouched.
    pub fn store(&self, clip: &WavClip) -> AudioResult<PathBuf> {
        fs::create_dir_all(&self.root)?;

        let path = self
            .root
            .join(format!("{}.wav", &clip.pcm_hash[..CLIP_NAME_LEN]));
        if !path.exists() {
            fs::write(&path, &clip.data)?;
        }

        Ok(path)
    }

    /// Removes a stored clip.
    pub fn release(&self, path: &Path) -> AudioResult<()> {
        fs::remove_file(path)?;
        Ok(())
    }

    /// Removes all stored clips, returning how many were deleted.
    pub fn clear(&self) -> AudioResult<u64> {
        if !self.root.exists() {
            return Ok(0);
        }

        let mut count = 0u64;
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("wav") {
                fs::remove_file(&path)?;
                count += 1;
            }
        }

        Ok(count)
    }

    /// Returns clip count and total size.
    pub fn info(&self) -> AudioResult<ClipStoreInfo> {
        let mut clip_count = 0u64;
        let mut total_size_bytes = 0u64;

        if self.root.exists() {
            for entry in walkdir::WalkDir::new(&self.root) {
                let entry = entry.map_err(std::io::Error::from)?;
                if entry.file_type().is_file() {
                    clip_count += 1;
                    total_size_bytes += entry.metadata().map_err(std::io::Error::from)?.len();
                }
            }
        }

        Ok(ClipStoreInfo {
            root: self.root.clone(),
            clip_count,
            total_size_bytes,
        })
    }
}
