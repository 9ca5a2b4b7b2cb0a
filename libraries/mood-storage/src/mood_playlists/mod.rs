//! Curated per-mood playlists (key `playlists`)
//!
//! One playlist per category, rebuilt from the music library on demand.
//! These are separate from user playlists and never edited by hand.

use crate::document::{load_json, store_json};
use crate::music;
use mood_core::{error::Result, library, storage::keys, storage::KeyValueStore, Playlist};

/// Stored mood playlists
pub async fn get_all(store: &dyn KeyValueStore) -> Result<Vec<Playlist>> {
    load_json(store, keys::MOOD_PLAYLISTS).await
}

/// Rebuild one playlist per category from the current library
///
/// Playlists keep their id and creation time across rebuilds when the
/// category name (case-insensitive) is unchanged. The stored value is
/// derived from the library, so an unreadable one is simply replaced.
pub async fn regenerate(store: &dyn KeyValueStore) -> Result<Vec<Playlist>> {
    let tracks = music::get_all(store).await?;
    let previous = get_all(store).await?;

    let playlists: Vec<Playlist> = library::categories(&tracks)
        .into_iter()
        .map(|category| {
            let mut playlist = previous
                .iter()
                .find(|p| p.name.to_lowercase() == category.to_lowercase())
                .cloned()
                .unwrap_or_else(|| Playlist::new(category.clone()));
            playlist.name = category.clone();
            playlist.songs = library::filter_by_category(&tracks, &category)
                .into_iter()
                .cloned()
                .collect();
            playlist
        })
        .collect();

    store_json(store, keys::MOOD_PLAYLISTS, &playlists).await?;
    tracing::info!(count = playlists.len(), "Mood playlists regenerated");
    Ok(playlists)
}
