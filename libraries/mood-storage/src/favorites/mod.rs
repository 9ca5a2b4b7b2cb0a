//! Favorite tracks (key `favorites`)

use crate::activities;
use crate::document::{load_for_update, load_json, store_json};
use mood_core::{
    error::Result, library, storage::keys, storage::KeyValueStore, ActivityType, Track, TrackId,
};

/// All favorites in the order they were added
pub async fn get_all(store: &dyn KeyValueStore) -> Result<Vec<Track>> {
    load_json(store, keys::FAVORITES).await
}

/// Check whether a track is a favorite
pub async fn is_favorite(store: &dyn KeyValueStore, id: &TrackId) -> Result<bool> {
    let favorites = get_all(store).await?;
    Ok(library::find_by_id(&favorites, id).is_some())
}

/// Add the track if absent, remove it if present
///
/// Returns `true` when the track is a favorite after the call. The
/// activity entry is only written once the favorites are saved.
pub async fn toggle(store: &dyn KeyValueStore, user: &str, track: Track) -> Result<bool> {
    let mut favorites: Vec<Track> = load_for_update(store, keys::FAVORITES).await?;

    let title = track.title.clone();
    let now_favorite = if library::remove_by_id(&mut favorites, &track.id).is_some() {
        false
    } else {
        favorites.push(track);
        true
    };
    store_json(store, keys::FAVORITES, &favorites).await?;

    let (kind, description) = if now_favorite {
        (ActivityType::FavoriteAdded, format!("Added \"{}\" to favorites", title))
    } else {
        (ActivityType::FavoriteRemoved, format!("Removed \"{}\" from favorites", title))
    };
    activities::log(store, user, kind, description).await?;

    Ok(now_favorite)
}

/// Remove a favorite by id. Returns `true` if it was present.
pub async fn remove(store: &dyn KeyValueStore, id: &TrackId) -> Result<bool> {
    let mut favorites: Vec<Track> = load_for_update(store, keys::FAVORITES).await?;
    if library::remove_by_id(&mut favorites, id).is_none() {
        return Ok(false);
    }
    store_json(store, keys::FAVORITES, &favorites).await?;
    Ok(true)
}
