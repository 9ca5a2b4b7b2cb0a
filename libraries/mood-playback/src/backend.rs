//! Platform-agnostic audio backend trait
//!
//! Abstracts loading and controlling an audio resource so the manager can
//! run against a native player, a mobile bridge, or nothing at all.

use crate::error::Result;
use mood_core::Track;
use std::time::Duration;

/// Platform-agnostic audio backend
///
/// Implementors load the resource named by `Track::audio_file` and control
/// its playback. Any error from `load` is treated as a failed load: the
/// manager logs it and does not advance.
pub trait AudioBackend: Send {
    /// Load a track's audio resource, replacing whatever was loaded
    ///
    /// The resource is positioned at zero and not yet playing.
    fn load(&mut self, track: &Track) -> Result<()>;

    /// Start or resume output
    fn play(&mut self) -> Result<()>;

    /// Pause output, keeping position
    fn pause(&mut self) -> Result<()>;

    /// Stop output and release the resource
    fn stop(&mut self);

    /// Seek to position in the loaded track
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Current playback position
    fn position(&self) -> Duration;

    /// Rewind to the beginning of the loaded track
    ///
    /// Equivalent to `seek(Duration::ZERO)`
    fn rewind(&mut self) -> Result<()> {
        self.seek(Duration::ZERO)
    }
}

/// Backend that accepts every request and produces no sound
///
/// Used by headless front ends to drive the sequencer.
#[derive(Debug, Default, Clone)]
pub struct NullBackend {
    loaded: Option<String>,
    position: Duration,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audio resource of the last loaded track
    pub fn loaded(&self) -> Option<&str> {
        self.loaded.as_deref()
    }
}

impl AudioBackend for NullBackend {
    fn load(&mut self, track: &Track) -> Result<()> {
        self.loaded = Some(track.audio_file.clone());
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) {
        self.loaded = None;
        self.position = Duration::ZERO;
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_backend_tracks_loaded_resource() {
        let mut backend = NullBackend::new();
        let track = Track::new("Song", "Artist", "Happy", "audio/song.mp3");

        backend.load(&track).unwrap();
        assert_eq!(backend.loaded(), Some("audio/song.mp3"));

        backend.seek(Duration::from_secs(42)).unwrap();
        assert_eq!(backend.position(), Duration::from_secs(42));

        backend.rewind().unwrap();
        assert_eq!(backend.position(), Duration::ZERO);

        backend.stop();
        assert_eq!(backend.loaded(), None);
    }
}
