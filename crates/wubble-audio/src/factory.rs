//! Track construction: frequency lookup, title generation, and clip
//! synthesis.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use wubble_core::{Genre, Mood, Track};

use crate::clips::ClipStore;
use crate::error::AudioResult;
use crate::synth::render_tone;
use crate::wav::WavClip;

/// Fixed remote clip used whenever local synthesis or storage fails.
pub const FALLBACK_AUDIO_URL: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

/// Sample rate of synthesized preview clips.
pub const CLIP_SAMPLE_RATE: u32 = 44100;

/// Synthesized preview length is capped here regardless of the track's
/// nominal duration.
pub const MAX_PREVIEW_SECONDS: u32 = 10;

/// Nominal track length range in seconds (inclusive low, exclusive high).
const DURATION_RANGE: std::ops::Range<u32> = 120..180;

const ID_SUFFIX_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Returns the base synthesis frequency in Hz for a (mood, genre) pair.
pub fn base_frequency(mood: Mood, genre: Genre) -> f64 {
    match (mood, genre) {
        (Mood::Happy, Genre::Pop) => 440.0,
        (Mood::Happy, Genre::LoFi) => 392.0,
        (Mood::Happy, Genre::Cinematic) => 523.0,
        (Mood::Happy, Genre::Edm) => 659.0,
        (Mood::Sad, Genre::Pop) => 294.0,
        (Mood::Sad, Genre::LoFi) => 261.0,
        (Mood::Sad, Genre::Cinematic) => 220.0,
        (Mood::Sad, Genre::Edm) => 247.0,
        (Mood::Energetic, Genre::Pop) => 659.0,
        (Mood::Energetic, Genre::LoFi) => 587.0,
        (Mood::Energetic, Genre::Cinematic) => 698.0,
        (Mood::Energetic, Genre::Edm) => 784.0,
        (Mood::Chill, Genre::Pop) => 349.0,
        (Mood::Chill, Genre::LoFi) => 330.0,
        (Mood::Chill, Genre::Cinematic) => 293.0,
        (Mood::Chill, Genre::Edm) => 370.0,
    }
}

fn mood_words(mood: Mood) -> &'static [&'static str; 7] {
    match mood {
        Mood::Happy => &[
            "Sunshine", "Bright", "Joyful", "Cheerful", "Upbeat", "Golden", "Radiant",
        ],
        Mood::Sad => &[
            "Melancholy", "Blue", "Rainy", "Somber", "Wistful", "Twilight", "Solitude",
        ],
        Mood::Energetic => &[
            "Electric", "Power", "Dynamic", "Intense", "Vibrant", "Thunder", "Blazing",
        ],
        Mood::Chill => &[
            "Calm", "Peaceful", "Serene", "Relaxed", "Dreamy", "Floating", "Zen",
        ],
    }
}

fn genre_words(genre: Genre) -> &'static [&'static str; 7] {
    match genre {
        Genre::Pop => &[
            "Melody", "Anthem", "Hit", "Tune", "Song", "Harmony", "Rhythm",
        ],
        Genre::LoFi => &["Vibes", "Beats", "Dreams", "Waves", "Flow", "Drift", "Haze"],
        Genre::Cinematic => &["Score", "Theme", "Symphony", "Epic", "Journey", "Saga", "Quest"],
        Genre::Edm => &["Drop", "Bass", "Pulse", "Beat", "Rush", "Surge", "Blast"],
    }
}

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Returns the current time in epoch milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Builds [`Track`] records from mood/genre selections.
#[derive(Debug, Clone)]
pub struct TrackFactory {
    clips: ClipStore,
}

impl TrackFactory {
    /// Creates a factory storing clips in `clips`.
    pub fn new(clips: ClipStore) -> Self {
        Self { clips }
    }

    /// Creates a new track for the selection.
    ///
    /// Randomness (title words, nominal duration, id suffix) is drawn from
    /// the injected generator. This never fails: if synthesis or clip
    /// storage goes wrong the track is still produced, with its audio
    /// reference degraded to [`FALLBACK_AUDIO_URL`].
    pub fn create(&self, mood: Mood, genre: Genre, rng: &mut Pcg32) -> Track {
        let frequency = base_frequency(mood, genre);
        let duration = rng.gen_range(DURATION_RANGE);
        let created_at = now_millis();
        let id = format!("track_{}_{}", created_at, random_suffix(rng));

        let preview_seconds = duration.min(MAX_PREVIEW_SECONDS);
        let audio_url = match self.synthesize_clip(frequency, preview_seconds) {
            Ok(path) => path.to_string_lossy().into_owned(),
            Err(_) => FALLBACK_AUDIO_URL.to_string(),
        };

        Track {
            id,
            title: random_title(mood, genre, rng),
            mood,
            genre,
            audio_url,
            duration,
            is_liked: false,
            created_at,
        }
    }

    fn synthesize_clip(&self, frequency: f64, seconds: u32) -> AudioResult<PathBuf> {
        let samples = render_tone(frequency, seconds as f64, CLIP_SAMPLE_RATE)?;
        let clip = WavClip::from_samples(&samples, CLIP_SAMPLE_RATE);
        self.clips.store(&clip)
    }
}

/// Picks one word from each bank, uniformly and independently. Repeats
/// across calls are allowed.
fn random_title(mood: Mood, genre: Genre, rng: &mut Pcg32) -> String {
    let moods = mood_words(mood);
    let genres = genre_words(genre);
    format!(
        "{} {}",
        moods[rng.gen_range(0..moods.len())],
        genres[rng.gen_range(0..genres.len())]
    )
}

fn random_suffix(rng: &mut Pcg32) -> String {
    (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
