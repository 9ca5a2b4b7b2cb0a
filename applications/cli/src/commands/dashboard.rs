use super::activity::write_entry;
use crate::error::Result;
use crate::state::AppState;
use mood_core::{DashboardLimits, DashboardStats};
use mood_storage::{activities, listeners, music, playlists};
use std::io::Write;

pub(super) async fn show(state: &AppState, out: &mut impl Write) -> Result<()> {
    state.require_admin().await?;
    let store = state.store();

    let tracks = music::get_all(store).await?;
    let user_playlists = playlists::get_all(store).await?;
    let listens = listeners::get_all(store).await?;
    let entries = activities::get_all(store).await?;

    let limits = DashboardLimits {
        recent_activity: state.config.dashboard.recent_activity_limit,
        ..DashboardLimits::default()
    };
    let stats = DashboardStats::compute(&tracks, &user_playlists, &listens, &entries, limits);
    tracing::debug!(tracks = stats.total_tracks, listens = stats.total_listens, "Dashboard computed");

    writeln!(out, "Tracks:           {}", stats.total_tracks)?;
    writeln!(out, "Playlists:        {}", stats.total_playlists)?;
    writeln!(out, "Playlist songs:   {}", stats.total_playlist_songs)?;
    writeln!(out, "Unique listeners: {}", stats.unique_listeners)?;
    writeln!(out, "Total listens:    {}", stats.total_listens)?;

    writeln!(out, "\nBy category:")?;
    for entry in &stats.tracks_per_category {
        writeln!(out, "  {:<16} {}", entry.category, entry.count)?;
    }

    writeln!(out, "\nTop tracks:")?;
    for (rank, entry) in stats.top_tracks.iter().enumerate() {
        writeln!(out, "  {}. {} ({} plays)", rank + 1, entry.title, entry.plays)?;
    }

    writeln!(out, "\nRecent activity:")?;
    for entry in &stats.recent_activity {
        write!(out, "  ")?;
        write_entry(out, entry)?;
    }
    Ok(())
}
