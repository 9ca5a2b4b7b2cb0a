//! MoodTunes command-line front end
//!
//! Stands in for the mobile screens: library browsing and admin edits,
//! playlists, favorites, the admin dashboard and a headless player.
//!
//! This library exposes the components for testing purposes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use cli::{Cli, Commands};
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use state::AppState;
