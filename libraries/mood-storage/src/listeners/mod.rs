//! Listen records (key `listeners`)

use crate::document::{load_for_update, load_json, store_json};
use mood_core::{error::Result, storage::keys, storage::KeyValueStore, ListenerEntry, TrackId};

/// Record that `user` started listening to a track
pub async fn record(store: &dyn KeyValueStore, user: &str, track_id: TrackId) -> Result<()> {
    let mut entries: Vec<ListenerEntry> = load_for_update(store, keys::LISTENERS).await?;
    entries.push(ListenerEntry::new(user, track_id));
    store_json(store, keys::LISTENERS, &entries).await
}

/// Every listen in insertion order
pub async fn get_all(store: &dyn KeyValueStore) -> Result<Vec<ListenerEntry>> {
    load_json(store, keys::LISTENERS).await
}
