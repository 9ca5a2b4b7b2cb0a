//! Integration tests for per-device state
//!
//! Tests:
//! - Session save/load/clear and admin checks
//! - Favorites toggle
//! - Theme preference
//! - Activity log ordering and listener records


use mood_core::{storage::keys, ActivityType, KeyValueStore, MoodError, Role, Theme};
use mood_storage::{activities, favorites, listeners, session, settings};
use test_helpers::*;

#[tokio::test]
async fn test_session_round_trip() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    assert!(session::load(store).await.unwrap().is_none());
    assert!(!session::is_authenticated(store).await.unwrap());

    let admin = test_session("alice", Role::Admin);
    session::save(store, &admin).await.unwrap();

    assert_eq!(session::load(store).await.unwrap(), Some(admin.clone()));
    assert!(session::is_admin(store).await.unwrap());
    assert_eq!(session::require_admin(store).await.unwrap().user.username, "alice");

    let cleared = session::clear(store).await.unwrap();
    assert_eq!(cleared.map(|u| u.username).as_deref(), Some("alice"));
    assert!(!session::is_authenticated(store).await.unwrap());

    let kinds: Vec<ActivityType> = activities::get_all(store)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(kinds, vec![ActivityType::Login, ActivityType::Logout]);
}

#[tokio::test]
async fn test_session_needs_both_keys() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    store.set(keys::USER_TOKEN, "\"abc\"").await.unwrap();
    assert!(session::load(store).await.unwrap().is_none());
}

#[tokio::test]
async fn test_require_admin_rejects_users() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let none = session::require_admin(store).await;
    assert!(matches!(none, Err(MoodError::PermissionDenied(_))));

    session::save(store, &test_session("bob", Role::User)).await.unwrap();
    let user = session::require_admin(store).await;
    assert!(matches!(user, Err(MoodError::PermissionDenied(msg)) if msg.contains("bob")));
}

#[tokio::test]
async fn test_favorites_toggle() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let track = create_test_track(store, "Loved", "Happy").await;

    assert!(favorites::toggle(store, "bob", track.clone()).await.unwrap());
    assert!(favorites::is_favorite(store, &track.id).await.unwrap());
    assert_eq!(favorites::get_all(store).await.unwrap(), vec![track.clone()]);

    assert!(!favorites::toggle(store, "bob", track.clone()).await.unwrap());
    assert!(!favorites::is_favorite(store, &track.id).await.unwrap());

    favorites::toggle(store, "bob", track.clone()).await.unwrap();
    assert!(favorites::remove(store, &track.id).await.unwrap());
    assert!(!favorites::remove(store, &track.id).await.unwrap());
}

#[tokio::test]
async fn test_failed_favorite_save_logs_nothing() {
    let store = RecordingStore::failing_on(keys::FAVORITES);
    let track = mood_core::Track::new("Loved", "A", "Happy", "/loved.mp3");

    let result = favorites::toggle(&store, "bob", track).await;

    assert!(matches!(result, Err(MoodError::Storage(_))));
    assert!(activities::get_all(&store).await.unwrap().is_empty());
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn test_theme_defaults_and_toggles() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    assert_eq!(settings::get_theme(store).await.unwrap(), Theme::Light);
    assert_eq!(settings::toggle_theme(store).await.unwrap(), Theme::Dark);
    assert_eq!(settings::get_theme(store).await.unwrap(), Theme::Dark);

    settings::set_theme(store, Theme::Light).await.unwrap();
    assert_eq!(store.get(keys::THEME).await.unwrap().as_deref(), Some("\"light\""));
}

#[tokio::test]
async fn test_recent_activity_newest_first() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    for i in 0..5 {
        activities::log(store, ADMIN, ActivityType::TrackAdded, format!("entry {}", i))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let recent = activities::get_recent(store, 2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].description, "entry 4");
    assert_eq!(recent[1].description, "entry 3");

    activities::clear(store).await.unwrap();
    assert!(activities::get_all(store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_listener_records() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let track = create_test_track(store, "Played", "Calm").await;
    listeners::record(store, "ann", track.id.clone()).await.unwrap();
    listeners::record(store, "ann", track.id.clone()).await.unwrap();

    let entries = listeners::get_all(store).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.track_id == track.id && e.user == "ann"));
}
