//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the next track is chosen when the current one finishes
///
/// Cycles `AllLoop -> SingleLoop -> Shuffle -> AllLoop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackMode {
    /// Advance through the playlist, wrapping at the end
    #[default]
    AllLoop,

    /// Replay the current track from the start
    SingleLoop,

    /// Pick a random track other than the current one
    Shuffle,
}

impl PlaybackMode {
    /// All modes in cycling order
    pub const ALL: [PlaybackMode; 3] = [
        PlaybackMode::AllLoop,
        PlaybackMode::SingleLoop,
        PlaybackMode::Shuffle,
    ];

    /// The mode that follows this one in the rotation
    pub fn cycled(self) -> Self {
        match self {
            PlaybackMode::AllLoop => PlaybackMode::SingleLoop,
            PlaybackMode::SingleLoop => PlaybackMode::Shuffle,
            PlaybackMode::Shuffle => PlaybackMode::AllLoop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackMode::AllLoop => "allLoop",
            PlaybackMode::SingleLoop => "singleLoop",
            PlaybackMode::Shuffle => "shuffle",
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown playback mode '{}' (expected allLoop, singleLoop or shuffle)",
            self.0
        )
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for PlaybackMode {
    type Err = ParseModeError;

    /// Accepts the stored camelCase names plus dashed/underscored spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "allloop" | "all" | "loop" => Ok(PlaybackMode::AllLoop),
            "singleloop" | "single" | "one" => Ok(PlaybackMode::SingleLoop),
            "shuffle" | "random" => Ok(PlaybackMode::Shuffle),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing playing
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for playback manager
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Initial mode (default: AllLoop)
    pub mode: PlaybackMode,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            mode: PlaybackMode::AllLoop,
        }
    }
}
