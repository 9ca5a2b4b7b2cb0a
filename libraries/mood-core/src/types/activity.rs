/// Activity log and listener types
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of activity recorded in the admin log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    TrackAdded,
    TrackUpdated,
    TrackDeleted,
    PlaylistCreated,
    PlaylistUpdated,
    PlaylistDeleted,
    FavoriteAdded,
    FavoriteRemoved,
    Login,
    Logout,
    /// Any type written by another client that this build does not know
    #[serde(other)]
    Other,
}

impl ActivityType {
    /// Convert to the stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::TrackAdded => "track_added",
            ActivityType::TrackUpdated => "track_updated",
            ActivityType::TrackDeleted => "track_deleted",
            ActivityType::PlaylistCreated => "playlist_created",
            ActivityType::PlaylistUpdated => "playlist_updated",
            ActivityType::PlaylistDeleted => "playlist_deleted",
            ActivityType::FavoriteAdded => "favorite_added",
            ActivityType::FavoriteRemoved => "favorite_removed",
            ActivityType::Login => "login",
            ActivityType::Logout => "logout",
            ActivityType::Other => "other",
        }
    }
}

/// Append-only activity log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    /// Who performed the action
    pub user: String,

    /// Human-readable description
    pub description: String,

    /// Activity kind
    #[serde(rename = "type")]
    pub kind: ActivityType,

    /// When it happened
    pub timestamp: DateTime<Utc>,
}

impl ActivityLogEntry {
    /// Create an entry stamped with the current time
    pub fn new(user: impl Into<String>, kind: ActivityType, description: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            description: description.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// A single listen, used for dashboard listener stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerEntry {
    /// Listening user
    pub user: String,

    /// Track that was played
    pub track_id: TrackId,

    /// When the listen started
    pub listened_at: DateTime<Utc>,
}

impl ListenerEntry {
    pub fn new(user: impl Into<String>, track_id: TrackId) -> Self {
        Self {
            user: user.into(),
            track_id,
            listened_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_type_round_trips_through_json() {
        let entry = ActivityLogEntry::new("admin", ActivityType::TrackAdded, "Added Sunny Day");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "track_added");

        let back: ActivityLogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind, ActivityType::TrackAdded);
    }

    #[test]
    fn unknown_activity_type_reads_as_other() {
        let json = r#"{"user":"u","description":"d","type":"shared","timestamp":"2024-01-01T00:00:00Z"}"#;
        let entry: ActivityLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, ActivityType::Other);
    }

    #[test]
    fn as_str_matches_serde_name() {
        let kind = ActivityType::PlaylistDeleted;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
}
