//! Track upload requests.

use crate::error::{ApiError, Result};
use crate::types::UploadMetadata;
use mood_core::Track;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info};

/// Upload client for the MoodTunes API.
pub struct UploadClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    token: &'a str,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Upload an audio file with its metadata.
    ///
    /// Returns the track as stored by the server.
    pub async fn upload_track(&self, file_path: &Path, metadata: &UploadMetadata) -> Result<Track> {
        if !file_path.exists() {
            return Err(ApiError::FileNotFound(file_path.display().to_string()));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("track")
            .to_string();

        debug!(file = %file_path.display(), "Uploading track");

        let contents = tokio::fs::read(file_path).await?;
        let file_size = contents.len();

        let file_part = Part::bytes(contents)
            .file_name(file_name.clone())
            .mime_str(mime_type_for_file(file_path))?;

        let form = Form::new()
            .part("file", file_part)
            .text("title", metadata.title.clone())
            .text("artist", metadata.artist.clone())
            .text("category", metadata.category.clone());

        let url = format!("{}/tracks/upload", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let track: Track = response.json().await.map_err(|e| {
                ApiError::Parse(format!("Failed to parse upload response: {}", e))
            })?;

            info!(track_id = %track.id, file = %file_name, size = file_size, "Track uploaded");
            Ok(track)
        } else if status.as_u16() == 401 {
            Err(ApiError::AuthRequired)
        } else {
            Err(ApiError::from_response(response).await)
        }
    }
}

/// Guess the MIME type from the file extension.
fn mime_type_for_file(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("m4a" | "aac") => "audio/mp4",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_type_for_file(Path::new("a/song.MP3")), "audio/mpeg");
        assert_eq!(mime_type_for_file(Path::new("song.m4a")), "audio/mp4");
        assert_eq!(mime_type_for_file(Path::new("song")), "application/octet-stream");
    }
}
