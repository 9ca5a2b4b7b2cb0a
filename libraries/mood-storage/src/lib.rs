//! MoodTunes Storage
//!
//! Device-local persistence for MoodTunes, modelled as a key-value store of
//! JSON documents held in one `SQLite` table.
//!
//! # Architecture
//!
//! - **Key-value documents**: each collection lives under one fixed key and
//!   is always read and written as a whole
//! - **Vertical Slicing**: each storage key has its own module
//! - **Last write wins**: concurrent writers to one key are not coordinated
//!
//! # Example
//!
//! ```rust,no_run
//! use mood_storage::{create_pool, music, run_migrations, SqliteStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://moodtunes.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteStore::new(pool);
//! let tracks = music::get_all(&store).await?;
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod memory;
mod sqlite_store;

// Vertical slices
pub mod activities;
pub mod favorites;
pub mod listeners;
pub mod mood_playlists;
pub mod music;
pub mod playlists;
pub mod session;
pub mod settings;

pub use document::{load_for_update, load_json, load_optional, store_json};
pub use error::StorageError;
pub use memory::MemoryStore;
pub use sqlite_store::SqliteStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before any slice touches the store.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://moodtunes.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");
    Ok(pool)
}

/// Open (creating if needed) the database at `database_url` and migrate it
pub async fn open(database_url: &str) -> Result<SqliteStore, StorageError> {
    if let Some(path) = database_url
        .strip_prefix("sqlite://")
        .filter(|p| !p.is_empty() && !p.starts_with(':'))
    {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StorageError::Connection(e.to_string()))?;
            }
        }
    }

    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;
    Ok(SqliteStore::new(pool))
}
