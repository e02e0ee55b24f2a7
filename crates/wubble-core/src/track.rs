//! Track record and categorical tag types.

use serde::{Deserialize, Serialize};

/// Moods supported by the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    /// Bright, major-key territory.
    #[default]
    Happy,
    /// Low, minor-key territory.
    Sad,
    /// Driving, high-register territory.
    Energetic,
    /// Relaxed, mid-register territory.
    Chill,
}

impl Mood {
    /// Returns the mood as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Energetic => "Energetic",
            Mood::Chill => "Chill",
        }
    }

    /// Returns all moods.
    pub fn all() -> &'static [Mood] {
        &[Mood::Happy, Mood::Sad, Mood::Energetic, Mood::Chill]
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "energetic" => Ok(Mood::Energetic),
            "chill" => Ok(Mood::Chill),
            _ => Err(format!("unknown mood: {}", s)),
        }
    }
}

/// Genres supported by the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    Pop,
    /// Serialized as `"Lo-fi"`, the spelling the persisted format uses.
    #[serde(rename = "Lo-fi")]
    LoFi,
    Cinematic,
    #[serde(rename = "EDM")]
    Edm,
}

impl Genre {
    /// Returns the genre as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::LoFi => "Lo-fi",
            Genre::Cinematic => "Cinematic",
            Genre::Edm => "EDM",
        }
    }

    /// Returns all genres.
    pub fn all() -> &'static [Genre] {
        &[Genre::Pop, Genre::LoFi, Genre::Cinematic, Genre::Edm]
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pop" => Ok(Genre::Pop),
            "lo-fi" | "lofi" => Ok(Genre::LoFi),
            "cinematic" => Ok(Genre::Cinematic),
            "edm" => Ok(Genre::Edm),
            _ => Err(format!("unknown genre: {}", s)),
        }
    }
}

/// Color theme of the presentation shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme as its persisted string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the opposite theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A generated music-preview record.
///
/// Tracks are immutable by convention once created; only `is_liked` is
/// patched afterwards, through the store's like toggle. JSON field names
/// are camelCase, the spelling the persisted state files use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Opaque unique identifier, never reused.
    pub id: String,
    /// Human-readable title, a mood word plus a genre word.
    pub title: String,
    pub mood: Mood,
    pub genre: Genre,
    /// Opaque reference to the synthesized clip: a stored file path, or the
    /// fixed fallback URL when synthesis was unavailable.
    pub audio_url: String,
    /// Nominal track length in whole seconds; the synthesized preview clip
    /// is capped independently of this.
    pub duration: u32,
    pub is_liked: bool,
    /// Creation time in epoch milliseconds.
    pub created_at: u64,
}

/// Formats a duration in seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mood_round_trips_through_str() {
        for &mood in Mood::all() {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_genre_round_trips_through_str() {
        for &genre in Genre::all() {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn test_genre_accepts_lofi_shorthand() {
        assert_eq!("lofi".parse::<Genre>().unwrap(), Genre::LoFi);
    }

    #[test]
    fn test_defaults_are_happy_pop_light() {
        assert_eq!(Mood::default(), Mood::Happy);
        assert_eq!(Genre::default(), Genre::Pop);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_theme_toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_track_serializes_with_camel_case_fields() {
        let track = Track {
            id: "track_1_abc".to_string(),
            title: "Dreamy Vibes".to_string(),
            mood: Mood::Chill,
            genre: Genre::LoFi,
            audio_url: "clips/ab12.wav".to_string(),
            duration: 154,
            is_liked: false,
            created_at: 1,
        };

        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["audioUrl"], "clips/ab12.wav");
        assert_eq!(json["isLiked"], false);
        assert_eq!(json["createdAt"], 1);
        assert_eq!(json["genre"], "Lo-fi");

        let back: Track = serde_json::from_value(json).unwrap();
        assert_eq!(back, track);
    }

    #[test]
    fn test_format_duration_pads_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(120), "2:00");
        assert_eq!(format_duration(179), "2:59");
    }
}
