//! End-to-end tests for the CLI commands
//!
//! Each test parses a real command line and runs it against an in-memory
//! store, checking both the printed output and what was persisted.

mod common;

use common::{exec, fixtures, memory_state, seeded_admin_state};
use mood_core::{ActivityType, MoodError};
use mood_storage::{activities, listeners, music, playlists};
use moodtunes::{AppConfig, AppState, CliError};

#[tokio::test]
async fn test_admin_commands_require_admin_session() {
    let state = memory_state();

    let result = exec(&state, &["tracks", "add", "--title", "X", "--audio", "x.mp3"]).await;
    assert!(matches!(
        result,
        Err(CliError::Core(MoodError::PermissionDenied(_)))
    ));

    exec(&state, &["login", "-u", fixtures::LISTENER_USERNAME])
        .await
        .unwrap();
    let result = exec(&state, &["dashboard"]).await;
    assert!(matches!(
        result,
        Err(CliError::Core(MoodError::PermissionDenied(_)))
    ));
}

#[tokio::test]
async fn test_seed_list_and_filter() {
    let state = seeded_admin_state().await;

    let listing = exec(&state, &["tracks", "list"]).await.unwrap();
    assert_eq!(listing.lines().count(), 8);

    let happy = exec(&state, &["tracks", "filter", "HAPPY"]).await.unwrap();
    assert_eq!(happy.lines().count(), 2);
    assert!(happy.lines().all(|line| line.ends_with("[Happy]")));

    let categories = exec(&state, &["tracks", "categories"]).await.unwrap();
    assert_eq!(categories, "Happy\nSad\nCalm\nEnergetic\n");

    let found = exec(&state, &["tracks", "search", "rainy"]).await.unwrap();
    assert!(found.contains("Rainy Window"));

    let again = exec(&state, &["tracks", "seed"]).await.unwrap();
    assert!(again.contains("nothing seeded"));
}

#[tokio::test]
async fn test_add_edit_delete_track() {
    let state = memory_state();
    exec(&state, &["login", "-u", "boss", "--admin"]).await.unwrap();

    let added = exec(
        &state,
        &[
            "tracks", "add", "--title", "Night Drive", "--artist", "Neon", "--category",
            "Chill", "--audio", "audio/night.mp3",
        ],
    )
    .await
    .unwrap();
    assert!(added.starts_with("Added "));

    let id = music::get_all(state.store()).await.unwrap()[0].id.to_string();

    exec(&state, &["tracks", "edit", &id, "--category", "Calm"])
        .await
        .unwrap();
    let stored = music::get_all(state.store()).await.unwrap();
    assert_eq!(stored[0].category, "Calm");

    let deleted = exec(&state, &["tracks", "delete", &id]).await.unwrap();
    assert_eq!(deleted, "Deleted Night Drive\n");

    let kinds: Vec<ActivityType> = activities::get_all(state.store())
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ActivityType::Login,
            ActivityType::TrackAdded,
            ActivityType::TrackUpdated,
            ActivityType::TrackDeleted,
        ]
    );
}

#[tokio::test]
async fn test_playlist_lifecycle() {
    let state = seeded_admin_state().await;
    let tracks = music::get_all(state.store()).await.unwrap();
    let first = tracks[0].id.to_string();
    let second = tracks[1].id.to_string();

    for name in ["Morning", "Evening", "Night"] {
        exec(&state, &["playlists", "create", name, "--track", &first])
            .await
            .unwrap();
    }

    let all = playlists::get_all(state.store()).await.unwrap();
    let evening = all[1].id.to_string();

    exec(&state, &["playlists", "add-song", &evening, &second])
        .await
        .unwrap();
    let shown = exec(&state, &["playlists", "show", &evening]).await.unwrap();
    assert!(shown.starts_with(&format!("{}  Evening (2 songs)", evening)));

    exec(&state, &["playlists", "delete", &evening]).await.unwrap();
    let names: Vec<String> = playlists::get_all(state.store())
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Morning", "Night"]);

    let missing = exec(&state, &["playlists", "delete", &evening]).await;
    assert!(matches!(
        missing,
        Err(CliError::Core(MoodError::PlaylistNotFound(_)))
    ));
}

#[tokio::test]
async fn test_mood_playlists() {
    let state = seeded_admin_state().await;

    let empty = exec(&state, &["playlists", "moods"]).await.unwrap();
    assert!(empty.contains("--regenerate"));

    let moods = exec(&state, &["playlists", "moods", "--regenerate"])
        .await
        .unwrap();
    assert_eq!(moods.lines().count(), 4);
    assert!(moods.lines().all(|line| line.ends_with("(2 songs)")));
}

#[tokio::test]
async fn test_play_single_loop_repeats() {
    let state = seeded_admin_state().await;

    let output = exec(
        &state,
        &["play", "--category", "calm", "--mode", "singleLoop", "-n", "3"],
    )
    .await
    .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Playing 2 tracks in singleLoop mode");
    let titles: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split_once(". ").unwrap().1)
        .collect();
    assert_eq!(titles.len(), 4);
    assert!(titles.iter().all(|t| *t == titles[0]));

    assert_eq!(listeners::get_all(state.store()).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_play_all_loop_wraps() {
    let state = seeded_admin_state().await;

    let output = exec(&state, &["play", "--category", "Sad", "-n", "2"])
        .await
        .unwrap();
    let titles: Vec<&str> = output
        .lines()
        .skip(1)
        .map(|l| l.split_once(". ").unwrap().1)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Rainy Window - Grey Skies",
            "Empty Rooms - Grey Skies",
            "Rainy Window - Grey Skies",
        ]
    );
}

#[tokio::test]
async fn test_play_shuffle_never_repeats_back_to_back() {
    let state = seeded_admin_state().await;

    let output = exec(&state, &["play", "--mode", "shuffle", "-n", "20", "--seed", "3"])
        .await
        .unwrap();
    let titles: Vec<&str> = output.lines().skip(1).collect::<Vec<_>>();
    let titles: Vec<&str> = titles
        .iter()
        .map(|l| l.split_once(". ").unwrap().1)
        .collect();

    assert_eq!(titles.len(), 21);
    for pair in titles.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[tokio::test]
async fn test_play_nothing() {
    let state = memory_state();
    let output = exec(&state, &["play"]).await.unwrap();
    assert_eq!(output, "Nothing to play\n");
}

#[tokio::test]
async fn test_dashboard_counts_listens() {
    let state = seeded_admin_state().await;
    exec(&state, &["play", "--category", "Energetic", "-n", "1"])
        .await
        .unwrap();

    let dashboard = exec(&state, &["dashboard"]).await.unwrap();
    assert!(dashboard.contains("Tracks:           8"));
    assert!(dashboard.contains("Unique listeners: 1"));
    assert!(dashboard.contains("Total listens:    2"));
    assert!(dashboard.contains("Full Throttle (1 plays)"));
}

#[tokio::test]
async fn test_favorites_toggle() {
    let state = seeded_admin_state().await;
    let id = music::get_all(state.store()).await.unwrap()[0].id.to_string();

    let added = exec(&state, &["favorites", "toggle", &id]).await.unwrap();
    assert_eq!(added, "Added Morning Glow to favorites\n");
    let listed = exec(&state, &["favorites", "list"]).await.unwrap();
    assert!(listed.contains("Morning Glow"));

    let removed = exec(&state, &["favorites", "toggle", &id]).await.unwrap();
    assert_eq!(removed, "Removed Morning Glow from favorites\n");
}

#[tokio::test]
async fn test_session_and_theme() {
    let state = memory_state();

    assert_eq!(exec(&state, &["whoami"]).await.unwrap(), "Not signed in\n");
    exec(&state, &["login", "-u", "ann"]).await.unwrap();
    assert_eq!(exec(&state, &["whoami"]).await.unwrap(), "ann (user)\n");
    assert_eq!(exec(&state, &["logout"]).await.unwrap(), "Signed out ann\n");

    assert_eq!(exec(&state, &["theme", "show"]).await.unwrap(), "Theme: light\n");
    assert_eq!(exec(&state, &["theme", "toggle"]).await.unwrap(), "Theme: dark\n");
}

#[tokio::test]
async fn test_activity_list_and_clear() {
    let state = seeded_admin_state().await;
    exec(&state, &["playlists", "create", "Mix"]).await.unwrap();

    let listed = exec(&state, &["activity", "list", "--limit", "1"])
        .await
        .unwrap();
    assert_eq!(listed.lines().count(), 1);
    assert!(listed.contains("playlist_created"));

    exec(&state, &["activity", "clear"]).await.unwrap();
    assert_eq!(
        exec(&state, &["activity", "list"]).await.unwrap(),
        "No activity\n"
    );
}

#[tokio::test]
async fn test_sqlite_state_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.storage.database_url = format!("sqlite://{}", dir.path().join("moodtunes.db").display());

    {
        let state = AppState::open(config.clone()).await.unwrap();
        exec(&state, &["login", "-u", "admin", "--admin"]).await.unwrap();
        exec(&state, &["tracks", "seed"]).await.unwrap();
    }

    let state = AppState::open(config).await.unwrap();
    let listing = exec(&state, &["tracks", "list"]).await.unwrap();
    assert_eq!(listing.lines().count(), 8);
    assert_eq!(exec(&state, &["whoami"]).await.unwrap(), "admin (admin)\n");
}
