//! MoodTunes Core
//!
//! Platform-agnostic core types, collection operations and error handling
//! for MoodTunes.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `ActivityLogEntry`, `Session`, etc.
//! - **Collection Operations**: category filtering, search, removal by id
//! - **Dashboard**: aggregate stats for the admin view
//! - **Storage Trait**: `KeyValueStore`, the device-local document store
//! - **Error Handling**: Unified `MoodError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use mood_core::types::{Playlist, Track};
//! use mood_core::library;
//!
//! let track = Track::new("Sunny Day", "The Band", "Happy", "/music/sunny.mp3");
//! let tracks = vec![track.clone()];
//!
//! let happy = library::filter_by_category(&tracks, "happy");
//! assert_eq!(happy.len(), 1);
//!
//! let mut playlist = Playlist::new("Good Vibes");
//! playlist.add_song(track);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dashboard;
pub mod error;
pub mod library;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use dashboard::{DashboardLimits, DashboardStats};
pub use error::{MoodError, Result};
pub use storage::KeyValueStore;

pub use types::{
    ActivityLogEntry, ActivityType, CreatePlaylist, CreateTrack, ListenerEntry, Playlist,
    PlaylistId, Role, Session, Theme, Track, TrackId, UpdateTrack, UserId, UserInfo,
};
