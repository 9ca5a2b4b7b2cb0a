//! Device preferences
//!
//! Currently only the UI theme (key `theme`).
//!
//! # Example
//!
//! ```rust,no_run
//! use mood_storage::{settings, MemoryStore};
//! use mood_core::Theme;
//!
//! # async fn example() -> mood_core::Result<()> {
//! let store = MemoryStore::new();
//! settings::set_theme(&store, Theme::Dark).await?;
//! assert_eq!(settings::get_theme(&store).await?, Theme::Dark);
//! # Ok(())
//! # }
//! ```

use crate::document::{load_json, store_json};
use mood_core::{error::Result, storage::keys, storage::KeyValueStore, Theme};

/// Get the theme, `Light` when unset
pub async fn get_theme(store: &dyn KeyValueStore) -> Result<Theme> {
    load_json(store, keys::THEME).await
}

/// Set the theme
pub async fn set_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<()> {
    store_json(store, keys::THEME, &theme).await
}

/// Switch between light and dark. Returns the new theme.
pub async fn toggle_theme(store: &dyn KeyValueStore) -> Result<Theme> {
    let theme = get_theme(store).await?.toggled();
    set_theme(store, theme).await?;
    tracing::debug!(?theme, "Theme toggled");
    Ok(theme)
}
