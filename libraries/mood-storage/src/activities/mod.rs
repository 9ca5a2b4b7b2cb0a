//! Admin activity log (key `activities`)
//!
//! Append-only. Readers decide how many entries to show.

use crate::document::{load_for_update, load_json, store_json};
use mood_core::{
    error::Result, library, storage::keys, storage::KeyValueStore, ActivityLogEntry, ActivityType,
};

/// Append an entry to the log
pub async fn log(
    store: &dyn KeyValueStore,
    user: &str,
    kind: ActivityType,
    description: impl Into<String>,
) -> Result<ActivityLogEntry> {
    let entry = ActivityLogEntry::new(user, kind, description);

    let mut entries: Vec<ActivityLogEntry> = load_for_update(store, keys::ACTIVITIES).await?;
    entries.push(entry.clone());
    store_json(store, keys::ACTIVITIES, &entries).await?;

    tracing::debug!(user, kind = kind.as_str(), "Activity logged");
    Ok(entry)
}

/// All entries in insertion order
pub async fn get_all(store: &dyn KeyValueStore) -> Result<Vec<ActivityLogEntry>> {
    load_json(store, keys::ACTIVITIES).await
}

/// The `limit` most recent entries, newest first
pub async fn get_recent(store: &dyn KeyValueStore, limit: usize) -> Result<Vec<ActivityLogEntry>> {
    let mut entries = get_all(store).await?;
    library::sort_by_recent(&mut entries);
    entries.truncate(limit);
    Ok(entries)
}

/// Remove every entry
pub async fn clear(store: &dyn KeyValueStore) -> Result<()> {
    store.remove(keys::ACTIVITIES).await?;
    tracing::info!("Activity log cleared");
    Ok(())
}
