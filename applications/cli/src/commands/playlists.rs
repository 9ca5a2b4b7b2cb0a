use super::{write_playlist_summary, write_track};
use crate::cli::PlaylistCommand;
use crate::error::Result;
use crate::state::AppState;
use mood_core::{CreatePlaylist, MoodError, PlaylistId, TrackId};
use mood_storage::{mood_playlists, music, playlists};
use std::io::Write;

pub(super) async fn run(
    state: &AppState,
    action: PlaylistCommand,
    out: &mut impl Write,
) -> Result<()> {
    let store = state.store();

    match action {
        PlaylistCommand::List => {
            let all = playlists::get_all(store).await?;
            if all.is_empty() {
                writeln!(out, "No playlists")?;
            }
            for playlist in &all {
                write_playlist_summary(out, playlist)?;
            }
            Ok(())
        }
        PlaylistCommand::Show { id } => {
            let id = PlaylistId::new(id);
            let playlist = match playlists::get_by_id(store, &id).await? {
                Some(playlist) => playlist,
                None => mood_playlists::get_all(store)
                    .await?
                    .into_iter()
                    .find(|p| p.id == id)
                    .ok_or_else(|| MoodError::PlaylistNotFound(id.clone()))?,
            };
            write_playlist_summary(out, &playlist)?;
            for song in &playlist.songs {
                write!(out, "  ")?;
                write_track(out, song)?;
            }
            Ok(())
        }
        PlaylistCommand::Create {
            name,
            image,
            tracks,
        } => {
            let mut songs = Vec::with_capacity(tracks.len());
            for id in tracks {
                let id = TrackId::new(id);
                let track = music::get_by_id(store, &id)
                    .await?
                    .ok_or(MoodError::TrackNotFound(id))?;
                songs.push(track);
            }
            let actor = state.actor().await?;
            let playlist =
                playlists::create(store, &actor, CreatePlaylist { name, image, songs }).await?;
            write!(out, "Created ")?;
            write_playlist_summary(out, &playlist)
        }
        PlaylistCommand::Rename { id, name } => {
            let actor = state.actor().await?;
            let playlist = playlists::rename(store, &actor, &PlaylistId::new(id), &name).await?;
            write!(out, "Renamed ")?;
            write_playlist_summary(out, &playlist)
        }
        PlaylistCommand::Delete { id } => {
            let actor = state.actor().await?;
            let playlist = playlists::delete(store, &actor, &PlaylistId::new(id)).await?;
            writeln!(out, "Deleted {}", playlist.name)?;
            Ok(())
        }
        PlaylistCommand::AddSong { playlist, track } => {
            let track_id = TrackId::new(track);
            let track = music::get_by_id(store, &track_id)
                .await?
                .ok_or(MoodError::TrackNotFound(track_id))?;
            let playlist = playlists::add_song(store, &PlaylistId::new(playlist), track).await?;
            write_playlist_summary(out, &playlist)
        }
        PlaylistCommand::RemoveSong { playlist, track } => {
            let playlist =
                playlists::remove_song(store, &PlaylistId::new(playlist), &TrackId::new(track))
                    .await?;
            write_playlist_summary(out, &playlist)
        }
        PlaylistCommand::Moods { regenerate } => {
            let moods = if regenerate {
                mood_playlists::regenerate(store).await?
            } else {
                mood_playlists::get_all(store).await?
            };
            if moods.is_empty() {
                writeln!(out, "No mood playlists (use --regenerate)")?;
            }
            for playlist in &moods {
                write_playlist_summary(out, playlist)?;
            }
            Ok(())
        }
    }
}
