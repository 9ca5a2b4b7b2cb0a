//! Request and response types for the MoodTunes API.

use mood_core::{Track, UserInfo};
use serde::{Deserialize, Serialize};

/// Default base URL; the backend is a placeholder during development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the API prefix, e.g. `https://host/api`
    pub base_url: String,
    /// Bearer token for authenticated requests
    pub token: Option<String>,
}

impl ApiConfig {
    /// Create a config without a token.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Login response: a bearer token and the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Track list returned by `GET /tracks`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TracksResponse {
    pub tracks: Vec<Track>,
}

/// Metadata sent alongside an uploaded audio file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadMetadata {
    pub title: String,
    pub artist: String,
    pub category: String,
}
