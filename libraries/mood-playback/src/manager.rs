//! Playback manager - core orchestration
//!
//! Coordinates the playing list, mode, history and the audio backend

use crate::{
    backend::{AudioBackend, NullBackend},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    history::History,
    sequencer,
    types::{PlaybackConfig, PlaybackMode, PlaybackState},
};
use mood_core::{Track, TrackId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Main playback manager
///
/// Holds the list currently being played and decides what plays next:
/// - Mode-driven advancement when a track finishes
/// - Manual next/previous
/// - Bounded history for "previous" while shuffling
/// - Event queue for UI synchronization
///
/// A failed load never moves the manager: current track, state and history
/// stay as they were and a `LoadFailed` event is queued.
pub struct PlaybackManager {
    // State
    state: PlaybackState,
    mode: PlaybackMode,
    current_index: Option<usize>,

    // Playing list and history
    playlist: Vec<Track>,
    history: History,

    // Platform
    backend: Box<dyn AudioBackend>,
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Create new playback manager
    pub fn new(config: PlaybackConfig, backend: Box<dyn AudioBackend>) -> Self {
        Self::with_rng(config, backend, StdRng::from_entropy())
    }

    /// Create a manager whose shuffle order is reproducible
    pub fn with_seed(config: PlaybackConfig, backend: Box<dyn AudioBackend>, seed: u64) -> Self {
        Self::with_rng(config, backend, StdRng::seed_from_u64(seed))
    }

    /// Create a manager with an explicit random source
    pub fn with_rng(config: PlaybackConfig, backend: Box<dyn AudioBackend>, rng: StdRng) -> Self {
        Self {
            state: PlaybackState::Stopped,
            mode: config.mode,
            current_index: None,
            playlist: Vec::new(),
            history: History::new(config.history_size),
            backend,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Playing list =====

    /// Replace the list being played
    ///
    /// The current track stays current if a track with the same id is in the
    /// new list; otherwise playback stops and nothing is current.
    pub fn set_playlist(&mut self, tracks: Vec<Track>) {
        let current_id = self.current_track().map(|t| t.id.clone());
        self.playlist = tracks;

        self.history
            .retain(|id| self.playlist.iter().any(|t| &t.id == id));

        self.current_index = current_id
            .as_ref()
            .and_then(|id| self.playlist.iter().position(|t| &t.id == id));

        if current_id.is_some() && self.current_index.is_none() {
            tracing::debug!("Current track left the playlist, stopping");
            self.backend.stop();
            self.set_state(PlaybackState::Stopped);
        }
    }

    /// Tracks in the playing list
    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    // ===== Playback Control =====

    /// Load and start a specific track
    ///
    /// A track that is not in the playing list is appended to it once it has
    /// loaded. On a load error the error is returned and nothing changes.
    pub fn play_track(&mut self, track: Track) -> Result<()> {
        match self.playlist.iter().position(|t| t.id == track.id) {
            Some(index) => self.switch_to(index, true),
            None => {
                self.load_and_start(&track)?;
                self.playlist.push(track);
                self.commit(self.playlist.len() - 1, true);
                Ok(())
            }
        }
    }

    /// Start or resume playback
    ///
    /// From `Stopped`, plays the current track from the start, or the first
    /// track the mode picks when nothing is current.
    pub fn play(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => Ok(()),
            PlaybackState::Paused => {
                self.backend.play()?;
                self.set_state(PlaybackState::Playing);
                Ok(())
            }
            PlaybackState::Stopped => {
                let index = match self.current_index {
                    Some(index) => index,
                    None => sequencer::next_index(
                        self.mode,
                        None,
                        self.playlist.len(),
                        &mut self.rng,
                    )
                    .ok_or(PlaybackError::PlaylistEmpty)?,
                };
                self.switch_to(index, false)
            }
        }
    }

    /// Pause playback
    pub fn pause(&mut self) -> Result<()> {
        if self.state == PlaybackState::Playing {
            self.backend.pause()?;
            self.set_state(PlaybackState::Paused);
        }
        Ok(())
    }

    /// Playing <-> Paused; does nothing while stopped
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.play(),
            PlaybackState::Stopped => Ok(()),
        }
    }

    /// Stop playback
    ///
    /// Releases the audio resource. The current track is kept so a later
    /// `play` starts it again from zero.
    pub fn stop(&mut self) {
        self.backend.stop();
        self.set_state(PlaybackState::Stopped);
    }

    /// The current track reached its end
    ///
    /// Applies the mode's rule: single loop replays, all loop advances with
    /// wrap-around, shuffle picks a different track at random.
    pub fn on_track_finished(&mut self) -> Result<()> {
        let next = sequencer::next_index(
            self.mode,
            self.current_index,
            self.playlist.len(),
            &mut self.rng,
        )
        .ok_or(PlaybackError::PlaylistEmpty)?;
        self.advance_to(next)
    }

    /// Skip to next track
    ///
    /// A manual skip always moves on, so single loop advances like all loop.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let next = sequencer::skip_index(
            self.mode,
            self.current_index,
            self.playlist.len(),
            &mut self.rng,
        )
        .ok_or(PlaybackError::PlaylistEmpty)?;
        self.advance_to(next)
    }

    /// Go to previous track
    ///
    /// While shuffling, returns to the last track actually played if the
    /// history has one; otherwise steps back one position with wrap-around.
    pub fn previous(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::PlaylistEmpty);
        }

        if self.mode == PlaybackMode::Shuffle {
            if let Some(index) = self.history_target() {
                self.switch_to(index, false)?;
                self.history.pop();
                return Ok(());
            }
        }

        let index = sequencer::previous_index(self.current_index, self.playlist.len())
            .ok_or(PlaybackError::PlaylistEmpty)?;
        self.advance_to(index)
    }

    /// Seek within the current track
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if self.current_track().is_none() || self.state == PlaybackState::Stopped {
            return Err(PlaybackError::NoTrackLoaded);
        }
        self.backend.seek(position)
    }

    // ===== Mode =====

    /// Move to the next mode in the rotation and return it
    pub fn cycle_mode(&mut self) -> PlaybackMode {
        let mode = self.mode.cycled();
        self.set_mode(mode);
        mode
    }

    pub fn set_mode(&mut self, mode: PlaybackMode) {
        if self.mode != mode {
            tracing::debug!("Playback mode: {} -> {}", self.mode, mode);
            self.mode = mode;
            self.pending_events.push(PlaybackEvent::ModeChanged { mode });
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Currently selected track (kept while paused or stopped)
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index.and_then(|i| self.playlist.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Position in the current track; zero while stopped
    pub fn position(&self) -> Duration {
        match self.state {
            PlaybackState::Stopped => Duration::ZERO,
            _ => self.backend.position(),
        }
    }

    /// Recently played track ids (oldest first)
    pub fn history(&self) -> Vec<&TrackId> {
        self.history.get_all()
    }

    // ===== Events =====

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Move to `index`, replaying in place when it is already current
    fn advance_to(&mut self, index: usize) -> Result<()> {
        if Some(index) == self.current_index && self.state != PlaybackState::Stopped {
            self.restart_current()
        } else {
            self.switch_to(index, true)
        }
    }

    fn restart_current(&mut self) -> Result<()> {
        let Some(track_id) = self.current_track().map(|t| t.id.clone()) else {
            return Err(PlaybackError::NoTrackLoaded);
        };

        if let Err(e) = self.backend.rewind().and_then(|()| self.backend.play()) {
            self.record_load_failure(&track_id, &e);
            return Err(e);
        }

        tracing::debug!("Replaying track {}", track_id);
        self.pending_events
            .push(PlaybackEvent::TrackRestarted { track_id });
        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    fn switch_to(&mut self, index: usize, record_history: bool) -> Result<()> {
        let track = self
            .playlist
            .get(index)
            .ok_or(PlaybackError::IndexOutOfBounds(index))?
            .clone();
        self.load_and_start(&track)?;
        self.commit(index, record_history);
        Ok(())
    }

    fn load_and_start(&mut self, track: &Track) -> Result<()> {
        let result = self
            .backend
            .load(track)
            .and_then(|()| self.backend.play());
        if let Err(e) = result {
            self.record_load_failure(&track.id, &e);
            return Err(e);
        }
        Ok(())
    }

    /// Make `index` current after its audio has started
    fn commit(&mut self, index: usize, record_history: bool) {
        let previous_track_id = self.current_track().map(|t| t.id.clone());
        self.current_index = Some(index);

        let Some(track_id) = self.current_track().map(|t| t.id.clone()) else {
            return;
        };

        // Replaying the current track is not a step back in history
        if record_history {
            if let Some(previous) = previous_track_id.as_ref().filter(|p| **p != track_id) {
                self.history.push(previous.clone());
            }
        }

        tracing::debug!("Now playing {} (mode {})", track_id, self.mode);
        if previous_track_id.as_ref() == Some(&track_id) {
            self.pending_events
                .push(PlaybackEvent::TrackRestarted { track_id });
        } else {
            self.pending_events.push(PlaybackEvent::TrackChanged {
                track_id,
                previous_track_id,
            });
        }
        self.set_state(PlaybackState::Playing);
    }

    /// Most recent history entry still in the playlist, pruning stale ones
    fn history_target(&mut self) -> Option<usize> {
        while let Some(id) = self.history.peek() {
            match self.playlist.iter().position(|t| &t.id == id) {
                Some(index) => return Some(index),
                None => {
                    self.history.pop();
                }
            }
        }
        None
    }

    fn record_load_failure(&mut self, track_id: &TrackId, error: &PlaybackError) {
        tracing::error!("Failed to load track {}: {}", track_id, error);
        self.pending_events.push(PlaybackEvent::LoadFailed {
            track_id: track_id.clone(),
            message: error.to_string(),
        });
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events
                .push(PlaybackEvent::StateChanged { state });
        }
    }
}

impl Default for PlaybackManager {
    fn default() -> Self {
        Self::new(PlaybackConfig::default(), Box::new(NullBackend::new()))
    }
}
