/// Common test utilities and fixtures
use clap::Parser;
use moodtunes::{commands, AppConfig, AppState, Cli};
use mood_storage::MemoryStore;

/// State backed by an in-memory store and default config
pub fn memory_state() -> AppState {
    AppState::with_store(MemoryStore::new(), AppConfig::default())
}

/// Parse `args` as a command line and run it, returning stdout
pub async fn exec(state: &AppState, args: &[&str]) -> moodtunes::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("moodtunes").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut out = Vec::new();
    commands::run(state, cli.command, &mut out).await?;
    Ok(String::from_utf8(out).expect("output is utf-8"))
}

/// Sign in as an admin and seed the starter catalogue
pub async fn seeded_admin_state() -> AppState {
    let state = memory_state();
    exec(&state, &["login", "-u", fixtures::ADMIN_USERNAME, "--admin"])
        .await
        .unwrap();
    exec(&state, &["tracks", "seed"]).await.unwrap();
    state
}

/// Test user names
pub mod fixtures {
    pub const ADMIN_USERNAME: &str = "admin";
    pub const LISTENER_USERNAME: &str = "listener";
}
