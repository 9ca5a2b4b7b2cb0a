//! Key-value storage abstraction
//!
//! Every collection is persisted as one JSON document under a fixed key.
//! Readers load the whole document, mutate it in memory and write the whole
//! document back.

use crate::error::Result;
use async_trait::async_trait;

/// Fixed storage keys
pub mod keys {
    /// Music library (`Vec<Track>`)
    pub const MUSIC: &str = "music";

    /// User playlists (`Vec<Playlist>`)
    pub const USER_PLAYLISTS: &str = "userPlaylists";

    /// Curated per-mood playlists (`Vec<Playlist>`)
    pub const MOOD_PLAYLISTS: &str = "playlists";

    /// Favorite tracks (`Vec<Track>`)
    pub const FAVORITES: &str = "favorites";

    /// Admin activity log (`Vec<ActivityLogEntry>`)
    pub const ACTIVITIES: &str = "activities";

    /// Listen records (`Vec<ListenerEntry>`)
    pub const LISTENERS: &str = "listeners";

    /// Authentication token (raw JSON string)
    pub const USER_TOKEN: &str = "userToken";

    /// Signed-in user info (`UserInfo`)
    pub const USER_INFO: &str = "userInfo";

    /// UI theme (`Theme`)
    pub const THEME: &str = "theme";

    /// All keys that hold collections
    pub const COLLECTIONS: &[&str] = &[
        MUSIC,
        USER_PLAYLISTS,
        MOOD_PLAYLISTS,
        FAVORITES,
        ACTIVITIES,
        LISTENERS,
    ];
}

/// Device-local key-value store holding serialized documents
///
/// Implementations only move strings; (de)serialization happens in the
/// callers. Writes to the same key are last-write-wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Returns `true` if a value was removed.
    async fn remove(&self, key: &str) -> Result<bool>;

    /// List all keys currently stored
    async fn keys(&self) -> Result<Vec<String>>;

    /// Check whether a key holds a value
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapStore(Mutex<HashMap<String, String>>);

    #[async_trait]
    impl KeyValueStore for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<bool> {
            Ok(self.0.lock().unwrap().remove(key).is_some())
        }

        async fn keys(&self) -> Result<Vec<String>> {
            Ok(self.0.lock().unwrap().keys().cloned().collect())
        }
    }

    #[tokio::test]
    async fn contains_uses_get() {
        let store = MapStore(Mutex::new(HashMap::new()));
        assert!(!store.contains(keys::MUSIC).await.unwrap());

        store.set(keys::MUSIC, "[]").await.unwrap();
        assert!(store.contains(keys::MUSIC).await.unwrap());
    }

    #[test]
    fn collection_keys_are_unique() {
        let mut sorted = keys::COLLECTIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), keys::COLLECTIONS.len());
    }
}
