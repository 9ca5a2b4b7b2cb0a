//! Integration tests for the music library slice
//!
//! Tests:
//! - Add/edit/delete with validation
//! - Category filtering and search
//! - Activity entries written by admin actions
//! - Seeding the default catalogue


use mood_core::{ActivityType, CreateTrack, MoodError, TrackId, UpdateTrack};
use mood_storage::{activities, music, playlists};
use test_helpers::*;

#[tokio::test]
async fn test_add_and_get_track() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let track = music::add(
        store,
        ADMIN,
        CreateTrack {
            title: "  Morning Glow ".to_string(),
            artist: "Sunny Lane".to_string(),
            category: "Happy".to_string(),
            audio_file: "audio/morning.mp3".to_string(),
            cover_image: Some("covers/morning.png".to_string()),
        },
    )
    .await
    .expect("Failed to add track");

    assert_eq!(track.title, "Morning Glow");
    assert_eq!(track.cover_image.as_deref(), Some("covers/morning.png"));

    let retrieved = music::get_by_id(store, &track.id).await.unwrap().unwrap();
    assert_eq!(retrieved, track);
}

#[tokio::test]
async fn test_add_requires_title_and_audio() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let missing_title = music::add(
        store,
        ADMIN,
        CreateTrack {
            title: "   ".to_string(),
            audio_file: "a.mp3".to_string(),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(missing_title, Err(MoodError::InvalidInput(_))));

    let missing_audio = music::add(
        store,
        ADMIN,
        CreateTrack {
            title: "Song".to_string(),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(missing_audio, Err(MoodError::InvalidInput(_))));

    assert!(music::get_all(store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_track() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let track = create_test_track(store, "Old Title", "Sad").await;

    let updated = music::update(
        store,
        ADMIN,
        &track.id,
        UpdateTrack {
            title: Some("New Title".to_string()),
            category: Some("Calm".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.category, "Calm");
    assert_eq!(updated.artist, track.artist);

    let stored = music::get_by_id(store, &track.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_missing_track() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let result = music::update(
        store,
        ADMIN,
        &TrackId::new("nope"),
        UpdateTrack {
            title: Some("X".to_string()),
            ..Default::default()
        },
    )
    .await;

    assert!(matches!(result, Err(MoodError::TrackNotFound(_))));
}

#[tokio::test]
async fn test_delete_track_keeps_playlist_copies() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let keep = create_test_track(store, "Keep", "Happy").await;
    let gone = create_test_track(store, "Gone", "Happy").await;
    let playlist = create_test_playlist(store, "Mix").await;
    playlists::add_song(store, &playlist.id, gone.clone()).await.unwrap();

    let removed = music::delete(store, ADMIN, &gone.id).await.unwrap();
    assert_eq!(removed.id, gone.id);

    let remaining = music::get_all(store).await.unwrap();
    assert_eq!(remaining, vec![keep]);

    // Embedded copy is not touched
    let playlist = playlists::get_by_id(store, &playlist.id).await.unwrap().unwrap();
    assert!(playlist.contains(&gone.id));

    let again = music::delete(store, ADMIN, &gone.id).await;
    assert!(matches!(again, Err(MoodError::TrackNotFound(_))));
}

#[tokio::test]
async fn test_get_by_category_ignores_case() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    create_test_track(store, "One", "Happy").await;
    create_test_track(store, "Two", "happy").await;
    create_test_track(store, "Three", "Sad").await;

    let happy = music::get_by_category(store, "HAPPY").await.unwrap();
    assert_eq!(happy.len(), 2);
    assert!(happy.iter().all(|t| t.category.to_lowercase() == "happy"));

    assert!(music::get_by_category(store, "Jazz").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_and_categories() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    create_test_track(store, "Night Drive", "Chill").await;
    create_test_track(store, "Day Dream", "Happy").await;

    let found = music::search(store, "night").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Night Drive");

    let by_artist = music::search(store, "test artist").await.unwrap();
    assert_eq!(by_artist.len(), 2);

    assert_eq!(
        music::categories(store).await.unwrap(),
        vec!["Chill".to_string(), "Happy".to_string()]
    );
}

#[tokio::test]
async fn test_admin_actions_are_logged() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let track = create_test_track(store, "Logged", "Happy").await;
    music::delete(store, ADMIN, &track.id).await.unwrap();

    let entries = activities::get_all(store).await.unwrap();
    let kinds: Vec<ActivityType> = entries.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ActivityType::TrackAdded, ActivityType::TrackDeleted]);
    assert!(entries.iter().all(|e| e.user == ADMIN));
    assert!(entries[1].description.contains("Logged"));
}

#[tokio::test]
async fn test_seed_defaults_only_when_empty() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let seeded = music::seed_defaults(store).await.unwrap();
    assert!(seeded > 0);
    assert_eq!(music::get_all(store).await.unwrap().len(), seeded);
    assert!(!music::categories(store).await.unwrap().is_empty());

    assert_eq!(music::seed_defaults(store).await.unwrap(), 0);
    assert_eq!(music::get_all(store).await.unwrap().len(), seeded);
}
