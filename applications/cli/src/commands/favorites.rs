use super::write_tracks;
use crate::cli::FavoriteCommand;
use crate::error::Result;
use crate::state::AppState;
use mood_core::{MoodError, TrackId};
use mood_storage::{favorites, music};
use std::io::Write;

pub(super) async fn run(
    state: &AppState,
    action: FavoriteCommand,
    out: &mut impl Write,
) -> Result<()> {
    let store = state.store();

    match action {
        FavoriteCommand::List => write_tracks(out, &favorites::get_all(store).await?),
        FavoriteCommand::Toggle { track } => {
            let id = TrackId::new(track);
            let track = match music::get_by_id(store, &id).await? {
                Some(track) => track,
                // Allows un-favoriting a track that has since left the library
                None => favorites::get_all(store)
                    .await?
                    .into_iter()
                    .find(|t| t.id == id)
                    .ok_or(MoodError::TrackNotFound(id))?,
            };
            let title = track.title.clone();
            let actor = state.actor().await?;
            if favorites::toggle(store, &actor, track).await? {
                writeln!(out, "Added {} to favorites", title)?;
            } else {
                writeln!(out, "Removed {} from favorites", title)?;
            }
            Ok(())
        }
    }
}
