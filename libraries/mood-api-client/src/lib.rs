//! MoodTunes API Client
//!
//! HTTP client for the MoodTunes backend. The backend URL is a placeholder
//! during development; nothing in the app depends on it being reachable.
//!
//! # Features
//!
//! - **Health**: check the backend is up
//! - **Authentication**: login with username/password
//! - **Library**: fetch the remote track catalogue
//! - **Upload**: upload an audio file with metadata
//!
//! # Example
//!
//! ```ignore
//! use mood_api_client::{ApiClient, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::new("https://moodtunes.example.com/api"))?;
//!
//!     let login = client.login("admin", "secret").await?;
//!     println!("Logged in as {}", login.user.username);
//!
//!     let tracks = client.fetch_tracks().await?;
//!     println!("Found {} tracks", tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod library;
mod types;
mod upload;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use types::{ApiConfig, HealthResponse, LoginResponse, UploadMetadata, DEFAULT_BASE_URL};

pub use auth::AuthClient;
pub use library::LibraryClient;
pub use upload::UploadClient;
