//! MoodTunes - Playback Sequencing
//!
//! Platform-agnostic playback management for MoodTunes.
//!
//! This crate provides:
//! - Three playback modes (all loop, single loop, shuffle) with fixed cycling
//! - Next/previous selection over the playing list
//! - Playback history for "previous" while shuffling
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! `mood-playback` knows nothing about storage or audio decoding. Loading a
//! track's audio is delegated to an [`AudioBackend`]; headless front ends use
//! [`NullBackend`].
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use mood_core::Track;
//! use mood_playback::{PlaybackManager, PlaybackMode, PlaybackState};
//!
//! let mut manager = PlaybackManager::default();
//! manager.set_playlist(vec![
//!     Track::new("Sunrise", "Aria", "Happy", "audio/sunrise.mp3"),
//!     Track::new("Drift", "Aria", "Calm", "audio/drift.mp3"),
//! ]);
//!
//! manager.play().unwrap();
//! assert_eq!(manager.state(), PlaybackState::Playing);
//!
//! manager.on_track_finished().unwrap();
//! assert_eq!(manager.current_track().unwrap().title, "Drift");
//!
//! assert_eq!(manager.cycle_mode(), PlaybackMode::SingleLoop);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use mood_core::Track;
//! use mood_playback::{AudioBackend, PlaybackConfig, PlaybackManager, Result};
//! use std::time::Duration;
//!
//! struct MyPlayer {
//!     // ... platform-specific player handle
//! }
//!
//! impl AudioBackend for MyPlayer {
//!     fn load(&mut self, track: &Track) -> Result<()> {
//!         // Open track.audio_file
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn stop(&mut self) {}
//!     fn seek(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn position(&self) -> Duration { Duration::ZERO }
//! }
//!
//! let manager = PlaybackManager::new(PlaybackConfig::default(), Box::new(MyPlayer {}));
//! ```

mod backend;
mod error;
mod events;
mod history;
mod manager;
pub mod sequencer;
pub mod types;

// Public exports
pub use backend::{AudioBackend, NullBackend};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use manager::PlaybackManager;
pub use types::{ParseModeError, PlaybackConfig, PlaybackMode, PlaybackState};
