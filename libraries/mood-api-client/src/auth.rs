//! Authentication requests.

use crate::error::{ApiError, Result};
use crate::types::{LoginRequest, LoginResponse};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for the MoodTunes API.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with username and password.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(url = %url, username = %username, "Attempting login");

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let login: LoginResponse = response.json().await.map_err(|e| {
                ApiError::Parse(format!("Failed to parse login response: {}", e))
            })?;

            info!(username = %login.user.username, role = %login.user.role.as_str(), "Login successful");
            Ok(login)
        } else if status.as_u16() == 401 {
            warn!(status = %status, "Login failed: invalid credentials");
            Err(ApiError::AuthFailed(
                "Invalid username or password".to_string(),
            ))
        } else {
            Err(ApiError::from_response(response).await)
        }
    }
}
