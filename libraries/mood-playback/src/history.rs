//! Playback history tracking
//!
//! Maintains a bounded history of played tracks for "previous" in shuffle mode

use mood_core::TrackId;
use std::collections::VecDeque;

/// Playback history with bounded size
///
/// Implements a ring buffer that automatically discards oldest entries.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = back)
    tracks: VecDeque<TrackId>,

    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Add track to history
    ///
    /// If history is full, oldest track is discarded
    pub fn push(&mut self, track_id: TrackId) {
        if self.max_size == 0 {
            return;
        }
        if self.tracks.len() >= self.max_size {
            self.tracks.pop_front();
        }
        self.tracks.push_back(track_id);
    }

    /// Most recent track (without removing)
    pub fn peek(&self) -> Option<&TrackId> {
        self.tracks.back()
    }

    /// Pop most recent track from history
    pub fn pop(&mut self) -> Option<TrackId> {
        self.tracks.pop_back()
    }

    /// Drop entries that no longer satisfy `keep`
    pub fn retain(&mut self, keep: impl FnMut(&TrackId) -> bool) {
        self.tracks.retain(keep);
    }

    /// All history tracks (oldest first)
    pub fn get_all(&self) -> Vec<&TrackId> {
        self.tracks.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50)
    }
}
