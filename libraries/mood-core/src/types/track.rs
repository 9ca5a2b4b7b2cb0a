/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// A track in the music library
///
/// Field names serialize in camelCase (`audioFile`, `coverImage`) so blobs
/// written by the mobile client stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    #[serde(default)]
    pub artist: String,

    /// Mood tag (e.g. "Happy", "Sad"); no controlled vocabulary
    #[serde(default)]
    pub category: String,

    /// Location of the audio resource (path or URL)
    #[serde(default)]
    pub audio_file: String,

    /// Location of the cover artwork
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Track {
    /// Create a new track with a generated id
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        category: impl Into<String>,
        audio_file: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            category: category.into(),
            audio_file: audio_file.into(),
            cover_image: None,
        }
    }

    /// Set the cover image
    pub fn with_cover(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    /// Case-insensitive category comparison
    pub fn has_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// Data for adding a track to the library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    pub title: String,
    pub artist: String,
    pub category: String,
    pub audio_file: String,
    pub cover_image: Option<String>,
}

/// Partial update for an existing track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrack {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub category: Option<String>,
    pub audio_file: Option<String>,
    pub cover_image: Option<String>,
}

impl UpdateTrack {
    /// Apply the set fields onto a track
    pub fn apply_to(&self, track: &mut Track) {
        if let Some(title) = &self.title {
            track.title.clone_from(title);
        }
        if let Some(artist) = &self.artist {
            track.artist.clone_from(artist);
        }
        if let Some(category) = &self.category {
            track.category.clone_from(category);
        }
        if let Some(audio_file) = &self.audio_file {
            track.audio_file.clone_from(audio_file);
        }
        if let Some(cover_image) = &self.cover_image {
            track.cover_image = Some(cover_image.clone());
        }
    }

    /// Check if the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.category.is_none()
            && self.audio_file.is_none()
            && self.cover_image.is_none()
    }
}
