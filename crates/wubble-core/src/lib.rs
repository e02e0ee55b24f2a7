//! Wubble Core Library
//!
//! This crate provides the canonical types and client state for the wubble
//! music-preview generator:
//!
//! - **Track metadata**: [`Track`] records plus the closed [`Mood`], [`Genre`],
//!   and [`Theme`] enumerations that drive synthesis and titling.
//! - **State store**: [`MusicStore`], a single mutable aggregate mutated only
//!   through a fixed set of named transitions (select, generate, playback,
//!   like, theme).
//! - **Persistence port**: [`KeyValueStore`], a best-effort string key-value
//!   interface with a JSON-file implementation and an in-memory test double.
//!
//! # Example
//!
//! ```
//! use wubble_core::{Genre, MemoryStore, Mood, MusicStore};
//!
//! let mut store = MusicStore::hydrate(MemoryStore::new());
//! store.select_mood(Mood::Chill);
//! store.select_genre(Genre::LoFi);
//! store.begin_generation();
//! assert!(store.state().is_generating);
//! ```
//!
//! # Modules
//!
//! - [`track`]: Track record and categorical tag enums
//! - [`store`]: State aggregate and its transitions
//! - [`persist`]: Key-value persistence port and implementations

pub mod persist;
pub mod store;
pub mod track;

// Re-export commonly used types at the crate root
pub use persist::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::{
    MusicState, MusicStore, LIKED_TRACKS_KEY, MAX_RECENT_TRACKS, RECENT_TRACKS_KEY, THEME_KEY,
};
pub use track::{format_duration, Genre, Mood, Theme, Track};
