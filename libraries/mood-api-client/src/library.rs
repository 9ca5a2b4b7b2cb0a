//! Track catalogue requests.

use crate::error::{ApiError, Result};
use crate::types::TracksResponse;
use mood_core::Track;
use reqwest::Client;
use tracing::debug;

/// Library client for the MoodTunes API.
pub struct LibraryClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    token: Option<&'a str>,
}

impl<'a> LibraryClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Fetch the remote track catalogue.
    ///
    /// Accepts either a bare JSON array or `{ "tracks": [...] }`.
    pub async fn fetch_tracks(&self) -> Result<Vec<Track>> {
        let url = format!("{}/tracks", self.base_url);
        debug!(url = %url, "Fetching tracks");

        let mut request = self.http.get(&url);
        if let Some(token) = self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(ApiError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            let tracks = serde_json::from_str::<Vec<Track>>(&body)
                .or_else(|_| serde_json::from_str::<TracksResponse>(&body).map(|r| r.tracks))
                .map_err(|e| ApiError::Parse(format!("Failed to parse tracks: {}", e)))?;

            debug!(tracks = tracks.len(), "Fetched tracks");
            Ok(tracks)
        } else if status.as_u16() == 401 {
            Err(ApiError::AuthRequired)
        } else {
            Err(ApiError::from_response(response).await)
        }
    }
}
