/// Shared state for one CLI invocation
use crate::config::AppConfig;
use crate::error::Result;
use mood_core::{KeyValueStore, Session};
use mood_storage::session;
use std::sync::Arc;

/// Name recorded in activity and listener entries when nobody is signed in
pub const GUEST: &str = "guest";

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn KeyValueStore>,
    pub config: AppConfig,
}

impl AppState {
    /// Open the configured database
    pub async fn open(config: AppConfig) -> Result<Self> {
        let store = mood_storage::open(&config.storage.database_url).await?;
        tracing::debug!(url = %config.storage.database_url, "Database connected");
        Ok(Self::with_store(store, config))
    }

    /// Use an already constructed store
    pub fn with_store(store: impl KeyValueStore + 'static, config: AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Username of the signed-in user, or `guest`
    pub async fn actor(&self) -> Result<String> {
        Ok(session::load(self.store())
            .await?
            .map(|s| s.user.username)
            .unwrap_or_else(|| GUEST.to_string()))
    }

    /// Current session, failing unless it belongs to an admin
    pub async fn require_admin(&self) -> Result<Session> {
        Ok(session::require_admin(self.store()).await?)
    }
}
