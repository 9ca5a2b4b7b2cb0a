//! Main MoodTunes API client.

use crate::auth::AuthClient;
use crate::error::{ApiError, Result};
use crate::library::LibraryClient;
use crate::types::{ApiConfig, HealthResponse, LoginResponse, UploadMetadata};
use crate::upload::UploadClient;
use mood_core::Track;
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Client for the MoodTunes REST backend.
///
/// Holds the base URL and, after `login`, the bearer token used by the
/// authenticated endpoints.
pub struct ApiClient {
    http: Client,
    config: Arc<RwLock<ApiConfig>>,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("MoodTunes/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(ApiConfig {
                base_url,
                token: config.token,
            })),
        })
    }

    /// Get the normalized base URL.
    pub async fn base_url(&self) -> String {
        self.config.read().await.base_url.clone()
    }

    /// Check if the client has a token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.token.is_some()
    }

    /// Current token, if any.
    pub async fn token(&self) -> Option<String> {
        self.config.read().await.token.clone()
    }

    /// Set the token directly (e.g., from a stored session).
    pub async fn set_token(&self, token: impl Into<String>) {
        self.config.write().await.token = Some(token.into());
    }

    /// Clear the stored token.
    pub async fn logout(&self) {
        self.config.write().await.token = None;
        info!("Logged out");
    }

    /// Check that the backend is reachable.
    ///
    /// This does not require authentication.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url().await);
        debug!(url = %url, "Checking API health");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse health response: {}", e)))
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    /// Login with username and password.
    ///
    /// On success, the token is stored for subsequent requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let base_url = self.base_url().await;
        let response = AuthClient::new(&self.http, &base_url)
            .login(username, password)
            .await?;

        self.config.write().await.token = Some(response.token.clone());
        Ok(response)
    }

    /// Fetch the remote track catalogue.
    pub async fn fetch_tracks(&self) -> Result<Vec<Track>> {
        let config = self.config.read().await.clone();
        LibraryClient::new(&self.http, &config.base_url, config.token.as_deref())
            .fetch_tracks()
            .await
    }

    /// Upload an audio file. Requires a token.
    pub async fn upload_track(&self, file_path: &Path, metadata: &UploadMetadata) -> Result<Track> {
        let config = self.config.read().await.clone();
        let token = config.token.as_deref().ok_or(ApiError::AuthRequired)?;
        UploadClient::new(&self.http, &config.base_url, token)
            .upload_track(file_path, metadata)
            .await
    }
}
