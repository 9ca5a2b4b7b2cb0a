//! Subcommand handlers
//!
//! Each handler writes its human-readable output to `out` so the same code
//! serves the binary and the tests.

mod account;
mod activity;
mod dashboard;
mod favorites;
mod play;
mod playlists;
mod tracks;

use crate::cli::Commands;
use crate::error::Result;
use crate::state::AppState;
use mood_core::{Playlist, Track};
use std::io::Write;

/// Dispatch one parsed command
pub async fn run(state: &AppState, command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Tracks { action } => tracks::run(state, action, out).await,
        Commands::Playlists { action } => playlists::run(state, action, out).await,
        Commands::Favorites { action } => favorites::run(state, action, out).await,
        Commands::Activity { action } => activity::run(state, action, out).await,
        Commands::Dashboard => dashboard::show(state, out).await,
        Commands::Login {
            username,
            admin,
            remote,
            password,
        } => {
            if remote {
                account::login_remote(state, &username, password.as_deref().unwrap_or(""), out)
                    .await
            } else {
                account::login_local(state, &username, admin, out).await
            }
        }
        Commands::Logout => account::logout(state, out).await,
        Commands::Whoami => account::whoami(state, out).await,
        Commands::Theme { action } => account::theme(state, action, out).await,
        Commands::Play {
            playlist,
            category,
            mode,
            count,
            seed,
        } => {
            let request = play::PlayRequest {
                playlist,
                category,
                mode,
                count,
                seed,
            };
            play::run(state, request, out).await
        }
    }
}

fn write_track(out: &mut impl Write, track: &Track) -> Result<()> {
    writeln!(
        out,
        "{}  {} - {} [{}]",
        track.id, track.title, track.artist, track.category
    )?;
    Ok(())
}

fn write_tracks(out: &mut impl Write, tracks: &[Track]) -> Result<()> {
    if tracks.is_empty() {
        writeln!(out, "No tracks")?;
    }
    for track in tracks {
        write_track(out, track)?;
    }
    Ok(())
}

fn write_playlist_summary(out: &mut impl Write, playlist: &Playlist) -> Result<()> {
    writeln!(
        out,
        "{}  {} ({} songs)",
        playlist.id,
        playlist.name,
        playlist.songs.len()
    )?;
    Ok(())
}
