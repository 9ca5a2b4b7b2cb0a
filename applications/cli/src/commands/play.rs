//! Headless playback simulation
//!
//! Drives the sequencer with a silent backend, printing each track as it
//! starts and recording a listen for it.

use crate::error::Result;
use crate::state::AppState;
use mood_core::{MoodError, PlaylistId, Track};
use mood_playback::{NullBackend, PlaybackConfig, PlaybackEvent, PlaybackManager, PlaybackMode};
use mood_storage::{listeners, mood_playlists, music, playlists};
use std::io::Write;

pub(super) struct PlayRequest {
    pub playlist: Option<String>,
    pub category: Option<String>,
    pub mode: Option<PlaybackMode>,
    pub count: usize,
    pub seed: Option<u64>,
}

pub(super) async fn run(state: &AppState, request: PlayRequest, out: &mut impl Write) -> Result<()> {
    let tracks = resolve_tracks(state, &request).await?;
    if tracks.is_empty() {
        writeln!(out, "Nothing to play")?;
        return Ok(());
    }

    let config = PlaybackConfig {
        history_size: state.config.playback.history_size,
        mode: request.mode.unwrap_or(state.config.playback.default_mode),
    };
    let backend = Box::new(NullBackend::new());
    let mut manager = match request.seed {
        Some(seed) => PlaybackManager::with_seed(config, backend, seed),
        None => PlaybackManager::new(config, backend),
    };

    writeln!(
        out,
        "Playing {} tracks in {} mode",
        tracks.len(),
        manager.mode()
    )?;
    manager.set_playlist(tracks);
    manager.play()?;

    let listener = state.actor().await?;
    for step in 0..=request.count {
        if step > 0 {
            manager.on_track_finished()?;
        }
        for event in manager.drain_events() {
            tracing::debug!(?event, "Playback event");
            if let PlaybackEvent::LoadFailed { track_id, message } = event {
                tracing::warn!(track = %track_id, "Load failed: {}", message);
            }
        }

        let Some(track) = manager.current_track() else {
            break;
        };
        writeln!(out, "{:>3}. {} - {}", step + 1, track.title, track.artist)?;
        listeners::record(state.store(), &listener, track.id.clone()).await?;
    }

    Ok(())
}

/// Playlist songs, a category, or the whole library
async fn resolve_tracks(state: &AppState, request: &PlayRequest) -> Result<Vec<Track>> {
    let store = state.store();

    if let Some(id) = &request.playlist {
        let id = PlaylistId::new(id.as_str());
        if let Some(playlist) = playlists::get_by_id(store, &id).await? {
            return Ok(playlist.songs);
        }
        let playlist = mood_playlists::get_all(store)
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(MoodError::PlaylistNotFound(id))?;
        return Ok(playlist.songs);
    }

    match &request.category {
        Some(category) => Ok(music::get_by_category(store, category).await?),
        None => Ok(music::get_all(store).await?),
    }
}
