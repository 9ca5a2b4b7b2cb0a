//! Playback Events
//!
//! Event-based communication for UI synchronization. Events are queued by
//! the manager and collected with `PlaybackManager::drain_events`.

use crate::types::{PlaybackMode, PlaybackState};
use mood_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed (playing, paused, stopped)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track became current
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// The current track was replayed from the start (single loop)
    TrackRestarted {
        /// ID of the replayed track
        track_id: TrackId,
    },

    /// Playback mode changed
    ModeChanged {
        /// The new mode
        mode: PlaybackMode,
    },

    /// The audio backend could not load a track; state was left as it was
    LoadFailed {
        /// ID of the track that failed to load
        track_id: TrackId,
        /// Error message from the backend
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_variant_tag() {
        let event = PlaybackEvent::ModeChanged {
            mode: PlaybackMode::Shuffle,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"ModeChanged":{"mode":"shuffle"}}"#);
    }
}
