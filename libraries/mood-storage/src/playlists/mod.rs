//! User playlists (key `userPlaylists`)
//!
//! Songs are stored as embedded track copies. Nothing here checks that a
//! song still exists in the music library.

use crate::activities;
use crate::document::{load_for_update, load_json, store_json};
use mood_core::{
    error::Result, library, storage::keys, storage::KeyValueStore, ActivityType, CreatePlaylist,
    MoodError, Playlist, PlaylistId, Track, TrackId,
};

/// Get all user playlists in stored order
pub async fn get_all(store: &dyn KeyValueStore) -> Result<Vec<Playlist>> {
    load_json(store, keys::USER_PLAYLISTS).await
}

/// Get a playlist by id
pub async fn get_by_id(store: &dyn KeyValueStore, id: &PlaylistId) -> Result<Option<Playlist>> {
    let playlists = get_all(store).await?;
    Ok(library::find_by_id(&playlists, id).cloned())
}

/// Create a new playlist
pub async fn create(
    store: &dyn KeyValueStore,
    actor: &str,
    playlist: CreatePlaylist,
) -> Result<Playlist> {
    let name = playlist.name.trim();
    if name.is_empty() {
        return Err(MoodError::invalid_input("playlist name is required"));
    }

    let mut new_playlist = Playlist::new(name);
    new_playlist.image = playlist.image;
    for song in playlist.songs {
        new_playlist.add_song(song);
    }

    let mut playlists: Vec<Playlist> = load_for_update(store, keys::USER_PLAYLISTS).await?;
    playlists.push(new_playlist.clone());
    store_json(store, keys::USER_PLAYLISTS, &playlists).await?;

    tracing::info!(id = %new_playlist.id, name = %new_playlist.name, "Playlist created");
    activities::log(
        store,
        actor,
        ActivityType::PlaylistCreated,
        format!("Created playlist \"{}\"", new_playlist.name),
    )
    .await?;

    Ok(new_playlist)
}

/// Rename a playlist
pub async fn rename(
    store: &dyn KeyValueStore,
    actor: &str,
    id: &PlaylistId,
    name: &str,
) -> Result<Playlist> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MoodError::invalid_input("playlist name is required"));
    }

    let updated = modify(store, id, |playlist| {
        playlist.name = name.to_string();
        Ok(())
    })
    .await?;

    activities::log(
        store,
        actor,
        ActivityType::PlaylistUpdated,
        format!("Renamed playlist to \"{}\"", updated.name),
    )
    .await?;

    Ok(updated)
}

/// Delete a playlist by id
///
/// Exactly one entry is removed; the remaining playlists keep their order.
pub async fn delete(store: &dyn KeyValueStore, actor: &str, id: &PlaylistId) -> Result<Playlist> {
    let mut playlists: Vec<Playlist> = load_for_update(store, keys::USER_PLAYLISTS).await?;
    let removed = library::remove_by_id(&mut playlists, id)
        .ok_or_else(|| MoodError::PlaylistNotFound(id.clone()))?;
    store_json(store, keys::USER_PLAYLISTS, &playlists).await?;

    tracing::info!(id = %id, "Playlist deleted");
    activities::log(
        store,
        actor,
        ActivityType::PlaylistDeleted,
        format!("Deleted playlist \"{}\"", removed.name),
    )
    .await?;

    Ok(removed)
}

/// Append a copy of `track`. Adding a song that is already present is a no-op.
pub async fn add_song(store: &dyn KeyValueStore, id: &PlaylistId, track: Track) -> Result<Playlist> {
    modify(store, id, |playlist| {
        if !playlist.add_song(track) {
            tracing::debug!(playlist = %playlist.id, "Song already in playlist");
        }
        Ok(())
    })
    .await
}

/// Remove a song from a playlist
pub async fn remove_song(
    store: &dyn KeyValueStore,
    id: &PlaylistId,
    track_id: &TrackId,
) -> Result<Playlist> {
    modify(store, id, |playlist| {
        if playlist.remove_song(track_id) {
            Ok(())
        } else {
            Err(MoodError::not_found("Song", track_id.as_str()))
        }
    })
    .await
}

/// Apply `f` to one playlist and save; nothing is written if `f` fails
async fn modify<F>(store: &dyn KeyValueStore, id: &PlaylistId, f: F) -> Result<Playlist>
where
    F: FnOnce(&mut Playlist) -> Result<()>,
{
    let mut playlists: Vec<Playlist> = load_for_update(store, keys::USER_PLAYLISTS).await?;
    let playlist = playlists
        .iter_mut()
        .find(|p| &p.id == id)
        .ok_or_else(|| MoodError::PlaylistNotFound(id.clone()))?;

    f(playlist)?;
    let updated = playlist.clone();
    store_json(store, keys::USER_PLAYLISTS, &playlists).await?;

    tracing::debug!(id = %id, songs = updated.songs.len(), "Playlist saved");
    Ok(updated)
}
