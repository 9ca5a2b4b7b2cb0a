//! Music library (key `music`)
//!
//! Admin-managed tracks. Every mutation loads the whole library, changes
//! it in memory and writes it back. A stored library that fails to parse
//! is never written over.
//!
//! # Example
//!
//! ```rust,no_run
//! use mood_storage::{music, MemoryStore};
//! use mood_core::CreateTrack;
//!
//! # async fn example() -> mood_core::Result<()> {
//! let store = MemoryStore::new();
//! music::add(&store, "admin", CreateTrack {
//!     title: "Sunny Day".into(),
//!     artist: "The Band".into(),
//!     category: "Happy".into(),
//!     audio_file: "/music/sunny.mp3".into(),
//!     cover_image: None,
//! }).await?;
//!
//! let happy = music::get_by_category(&store, "happy").await?;
//! # Ok(())
//! # }
//! ```

use crate::activities;
use crate::document::{load_for_update, load_json, store_json};
use mood_core::{
    error::Result, library, storage::keys, storage::KeyValueStore, ActivityType, CreateTrack,
    MoodError, Track, TrackId, UpdateTrack,
};

/// Get every track in the library
pub async fn get_all(store: &dyn KeyValueStore) -> Result<Vec<Track>> {
    load_json(store, keys::MUSIC).await
}

/// Get a track by id
pub async fn get_by_id(store: &dyn KeyValueStore, id: &TrackId) -> Result<Option<Track>> {
    let tracks = get_all(store).await?;
    Ok(library::find_by_id(&tracks, id).cloned())
}

/// Tracks in a category (case-insensitive)
pub async fn get_by_category(store: &dyn KeyValueStore, category: &str) -> Result<Vec<Track>> {
    let tracks = get_all(store).await?;
    Ok(library::filter_by_category(&tracks, category)
        .into_iter()
        .cloned()
        .collect())
}

/// Tracks whose title or artist contains `query`
pub async fn search(store: &dyn KeyValueStore, query: &str) -> Result<Vec<Track>> {
    let tracks = get_all(store).await?;
    Ok(library::search_tracks(&tracks, query)
        .into_iter()
        .cloned()
        .collect())
}

/// Distinct categories present in the library
pub async fn categories(store: &dyn KeyValueStore) -> Result<Vec<String>> {
    let tracks = get_all(store).await?;
    Ok(library::categories(&tracks))
}

/// Add a track
///
/// Title and audio file are required; everything else is free-form.
pub async fn add(store: &dyn KeyValueStore, actor: &str, track: CreateTrack) -> Result<Track> {
    if track.title.trim().is_empty() {
        return Err(MoodError::invalid_input("track title is required"));
    }
    if track.audio_file.trim().is_empty() {
        return Err(MoodError::invalid_input("audio file is required"));
    }

    let mut new_track = Track::new(
        track.title.trim(),
        track.artist.trim(),
        track.category.trim(),
        track.audio_file.trim(),
    );
    new_track.cover_image = track.cover_image;

    let mut tracks: Vec<Track> = load_for_update(store, keys::MUSIC).await?;
    tracks.push(new_track.clone());
    store_json(store, keys::MUSIC, &tracks).await?;

    tracing::info!(id = %new_track.id, title = %new_track.title, "Track added");
    activities::log(
        store,
        actor,
        ActivityType::TrackAdded,
        format!("Added track \"{}\"", new_track.title),
    )
    .await?;

    Ok(new_track)
}

/// Edit a track in place
pub async fn update(
    store: &dyn KeyValueStore,
    actor: &str,
    id: &TrackId,
    update: UpdateTrack,
) -> Result<Track> {
    if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(MoodError::invalid_input("track title cannot be empty"));
    }

    let mut tracks: Vec<Track> = load_for_update(store, keys::MUSIC).await?;
    let track = tracks
        .iter_mut()
        .find(|t| &t.id == id)
        .ok_or_else(|| MoodError::TrackNotFound(id.clone()))?;

    update.apply_to(track);
    let updated = track.clone();
    store_json(store, keys::MUSIC, &tracks).await?;

    tracing::info!(id = %id, "Track updated");
    activities::log(
        store,
        actor,
        ActivityType::TrackUpdated,
        format!("Updated track \"{}\"", updated.title),
    )
    .await?;

    Ok(updated)
}

/// Delete a track by id
///
/// Playlists keep their embedded copies.
pub async fn delete(store: &dyn KeyValueStore, actor: &str, id: &TrackId) -> Result<Track> {
    let mut tracks: Vec<Track> = load_for_update(store, keys::MUSIC).await?;
    let removed =
        library::remove_by_id(&mut tracks, id).ok_or_else(|| MoodError::TrackNotFound(id.clone()))?;
    store_json(store, keys::MUSIC, &tracks).await?;

    tracing::info!(id = %id, "Track deleted");
    activities::log(
        store,
        actor,
        ActivityType::TrackDeleted,
        format!("Deleted track \"{}\"", removed.title),
    )
    .await?;

    Ok(removed)
}

/// Populate an empty library with a starter catalogue
///
/// Returns the number of tracks written; a non-empty library is left alone.
pub async fn seed_defaults(store: &dyn KeyValueStore) -> Result<usize> {
    let existing: Vec<Track> = load_for_update(store, keys::MUSIC).await?;
    if !existing.is_empty() {
        return Ok(0);
    }

    let tracks = default_catalogue();
    store_json(store, keys::MUSIC, &tracks).await?;
    tracing::info!(count = tracks.len(), "Seeded default catalogue");
    Ok(tracks.len())
}

fn default_catalogue() -> Vec<Track> {
    const CATALOGUE: &[(&str, &str, &str, &str)] = &[
        ("Morning Glow", "Sunny Lane", "Happy", "audio/morning_glow.mp3"),
        ("Golden Hour", "Sunny Lane", "Happy", "audio/golden_hour.mp3"),
        ("Rainy Window", "Grey Skies", "Sad", "audio/rainy_window.mp3"),
        ("Empty Rooms", "Grey Skies", "Sad", "audio/empty_rooms.mp3"),
        ("Still Water", "Low Tide", "Calm", "audio/still_water.mp3"),
        ("Slow Breath", "Low Tide", "Calm", "audio/slow_breath.mp3"),
        ("Full Throttle", "Redline", "Energetic", "audio/full_throttle.mp3"),
        ("Heartbeat Run", "Redline", "Energetic", "audio/heartbeat_run.mp3"),
    ];

    CATALOGUE
        .iter()
        .map(|(title, artist, category, file)| Track::new(*title, *artist, *category, *file))
        .collect()
}
