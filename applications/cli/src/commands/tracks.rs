use super::{write_track, write_tracks};
use crate::cli::TrackCommand;
use crate::error::Result;
use crate::state::AppState;
use mood_core::{CreateTrack, TrackId, UpdateTrack};
use mood_storage::music;
use std::io::Write;

pub(super) async fn run(state: &AppState, action: TrackCommand, out: &mut impl Write) -> Result<()> {
    let store = state.store();

    match action {
        TrackCommand::List => write_tracks(out, &music::get_all(store).await?),
        TrackCommand::Add {
            title,
            artist,
            category,
            audio,
            cover,
        } => {
            let admin = state.require_admin().await?;
            let track = music::add(
                store,
                &admin.user.username,
                CreateTrack {
                    title,
                    artist,
                    category,
                    audio_file: audio,
                    cover_image: cover,
                },
            )
            .await?;
            write!(out, "Added ")?;
            write_track(out, &track)
        }
        TrackCommand::Edit {
            id,
            title,
            artist,
            category,
            audio,
            cover,
        } => {
            let admin = state.require_admin().await?;
            let update = UpdateTrack {
                title,
                artist,
                category,
                audio_file: audio,
                cover_image: cover,
            };
            if update.is_empty() {
                writeln!(out, "Nothing to change")?;
                return Ok(());
            }
            let track = music::update(store, &admin.user.username, &TrackId::new(id), update).await?;
            write!(out, "Updated ")?;
            write_track(out, &track)
        }
        TrackCommand::Delete { id } => {
            let admin = state.require_admin().await?;
            let track = music::delete(store, &admin.user.username, &TrackId::new(id)).await?;
            writeln!(out, "Deleted {}", track.title)?;
            Ok(())
        }
        TrackCommand::Filter { category } => {
            write_tracks(out, &music::get_by_category(store, &category).await?)
        }
        TrackCommand::Search { query } => write_tracks(out, &music::search(store, &query).await?),
        TrackCommand::Categories => {
            for category in music::categories(store).await? {
                writeln!(out, "{}", category)?;
            }
            Ok(())
        }
        TrackCommand::Seed => {
            state.require_admin().await?;
            let added = music::seed_defaults(store).await?;
            if added == 0 {
                writeln!(out, "Library already has tracks, nothing seeded")?;
            } else {
                writeln!(out, "Seeded {} tracks", added)?;
            }
            Ok(())
        }
    }
}
