/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user playlist
///
/// Songs are embedded copies of tracks, not references. Removing a track
/// from the library leaves playlists untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Cover image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Embedded track copies, in play order
    #[serde(default)]
    pub songs: Vec<Track>,

    /// Creation timestamp; blobs without one read as "now"
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            image: None,
            songs: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Check whether a song with this id is in the playlist
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.songs.iter().any(|s| &s.id == track_id)
    }

    /// Append a copy of a track. Returns `false` if it was already present.
    pub fn add_song(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.songs.push(track);
        true
    }

    /// Remove a song by id. Returns `false` if it was not present.
    pub fn remove_song(&mut self, track_id: &TrackId) -> bool {
        let before = self.songs.len();
        self.songs.retain(|s| &s.id != track_id);
        self.songs.len() != before
    }
}

/// Data for creating a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    pub image: Option<String>,
    pub songs: Vec<Track>,
}
