//! Wubble Audio Backend
//!
//! This crate turns a (mood, genre) selection into a playable track record:
//!
//! - [`synth`] - harmonic tone rendering (fundamental plus two attenuated
//!   harmonics under an exponential decay envelope)
//! - [`wav`] - mono 16-bit PCM WAV encoding with a byte-exact 44-byte header
//! - [`clips`] - content-addressed on-disk storage for synthesized clips,
//!   the local analog of blob-URL create/revoke
//! - [`factory`] - frequency lookup, title generation, and [`Track`]
//!   assembly
//!
//! # Determinism
//!
//! All randomness flows through an injected PCG32 generator; given the same
//! seed and selection, the factory produces the same title, duration, and
//! clip bytes (timestamps aside). The clip store names files by the BLAKE3
//! hash of the PCM data, so identical clips share one file.
//!
//! # Failure policy
//!
//! Synthesis and clip storage validate their inputs and propagate errors
//! internally, but the factory boundary is total: any failure degrades the
//! track's audio reference to [`factory::FALLBACK_AUDIO_URL`] instead of
//! raising.
//!
//! [`Track`]: wubble_core::Track

pub mod clips;
pub mod error;
pub mod factory;
pub mod synth;
pub mod wav;

// Re-export main types at the crate root
pub use clips::{ClipStore, ClipStoreInfo};
pub use error::{AudioError, AudioResult};
pub use factory::{create_rng, TrackFactory, FALLBACK_AUDIO_URL};
pub use wav::WavClip;
