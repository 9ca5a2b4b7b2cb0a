//! Typed JSON documents on top of a `KeyValueStore`

use crate::error::StorageError;
use mood_core::{error::Result, storage::KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};

/// Load the document under `key`
///
/// A missing key yields `T::default()`. A value that fails to parse is
/// logged and also yields the default, so one corrupt blob never blocks
/// the rest of the app.
pub async fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key).await? else {
        tracing::debug!(key, "No stored value, using default");
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored value is not valid JSON, using default");
            Ok(T::default())
        }
    }
}

/// Load the document under `key` ahead of writing it back
///
/// A missing key yields `T::default()`. Unlike [`load_json`], a value that
/// fails to parse is an error: the caller must not replace records it
/// could not read.
pub async fn load_for_update<T>(store: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(T::default());
    };

    serde_json::from_str(&raw).map_err(|e| {
        tracing::error!(key, error = %e, "Stored value is unreadable, refusing to overwrite");
        StorageError::serialization(key, &e).into()
    })
}

/// Load the document under `key`, or `None` if missing or unreadable
pub async fn load_optional<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored value is not valid JSON, ignoring");
            Ok(None)
        }
    }
}

/// Serialize `value` and store it under `key`
pub async fn store_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::serialization(key, &e))?;
    store.set(key, &raw).await
}
