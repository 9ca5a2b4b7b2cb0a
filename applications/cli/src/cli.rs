/// Command-line definitions
use clap::{Parser, Subcommand};
use mood_playback::PlaybackMode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "moodtunes")]
#[command(about = "Mood-based music library and player", long_about = None, version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse and manage the music library
    Tracks {
        #[command(subcommand)]
        action: TrackCommand,
    },
    /// Manage user playlists and mood playlists
    Playlists {
        #[command(subcommand)]
        action: PlaylistCommand,
    },
    /// List or toggle favorite tracks
    Favorites {
        #[command(subcommand)]
        action: FavoriteCommand,
    },
    /// Show or clear the activity log
    Activity {
        #[command(subcommand)]
        action: ActivityCommand,
    },
    /// Show admin dashboard stats
    Dashboard,
    /// Sign in
    Login {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Create an admin session (local sign-in only)
        #[arg(long)]
        admin: bool,
        /// Authenticate against the configured API instead of locally
        #[arg(long, requires = "password")]
        remote: bool,
        /// Password for remote sign-in
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show or toggle the UI theme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },
    /// Simulate playback over a playlist or category
    Play {
        /// Play a user or mood playlist by id
        #[arg(long, conflicts_with = "category")]
        playlist: Option<String>,
        /// Play every track in a category
        #[arg(long)]
        category: Option<String>,
        /// Playback mode (allLoop, singleLoop, shuffle)
        #[arg(short, long)]
        mode: Option<PlaybackMode>,
        /// Number of track completions to simulate
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
        /// Seed for reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TrackCommand {
    /// List all tracks
    List,
    /// Add a track (admin)
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        artist: String,
        #[arg(long, default_value = "")]
        category: String,
        /// Audio file location
        #[arg(long)]
        audio: String,
        /// Cover image location
        #[arg(long)]
        cover: Option<String>,
    },
    /// Edit a track (admin)
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        audio: Option<String>,
        #[arg(long)]
        cover: Option<String>,
    },
    /// Delete a track (admin)
    Delete { id: String },
    /// Tracks in a category (case-insensitive)
    Filter { category: String },
    /// Search titles and artists
    Search { query: String },
    /// List categories
    Categories,
    /// Load the starter catalogue into an empty library (admin)
    Seed,
}

#[derive(Debug, Subcommand)]
pub enum PlaylistCommand {
    /// List user playlists
    List,
    /// Show a playlist and its songs
    Show { id: String },
    /// Create a playlist
    Create {
        name: String,
        #[arg(long)]
        image: Option<String>,
        /// Track ids to add
        #[arg(long = "track")]
        tracks: Vec<String>,
    },
    /// Rename a playlist
    Rename { id: String, name: String },
    /// Delete a playlist
    Delete { id: String },
    /// Add a library track to a playlist
    AddSong { playlist: String, track: String },
    /// Remove a song from a playlist
    RemoveSong { playlist: String, track: String },
    /// List mood playlists
    Moods {
        /// Rebuild them from the library first
        #[arg(long)]
        regenerate: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoriteCommand {
    /// List favorites
    List,
    /// Add or remove a track from favorites
    Toggle { track: String },
}

#[derive(Debug, Subcommand)]
pub enum ActivityCommand {
    /// Show recent activity (admin)
    List {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Clear the activity log (admin)
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    Show,
    Toggle,
}
