//! Pure operations over in-memory collections
//!
//! Collections are small (tens to low hundreds of items), so everything
//! here is a linear scan.

use crate::types::{ActivityLogEntry, Playlist, PlaylistId, Track, TrackId};

/// Entities addressed by id inside a stored collection
pub trait Identified {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
}

impl Identified for Track {
    type Id = TrackId;

    fn id(&self) -> &TrackId {
        &self.id
    }
}

impl Identified for Playlist {
    type Id = PlaylistId;

    fn id(&self) -> &PlaylistId {
        &self.id
    }
}

/// Find an entry by id
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &T::Id) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Remove the first entry with `id`, keeping the order of the rest
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &T::Id) -> Option<T> {
    let index = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(index))
}

/// Tracks whose category equals `category`, ignoring case
pub fn filter_by_category<'a>(tracks: &'a [Track], category: &str) -> Vec<&'a Track> {
    tracks.iter().filter(|t| t.has_category(category)).collect()
}

/// Tracks whose title or artist contains `query`, ignoring case
///
/// An empty query matches everything.
pub fn search_tracks<'a>(tracks: &'a [Track], query: &str) -> Vec<&'a Track> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tracks.iter().collect();
    }
    tracks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle) || t.artist.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Distinct categories in first-seen order
///
/// Deduplication ignores case; the first spelling seen wins. Blank
/// categories are skipped.
pub fn categories(tracks: &[Track]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();
    for track in tracks {
        let category = track.category.trim();
        if category.is_empty() {
            continue;
        }
        let lowered = category.to_lowercase();
        if !seen.contains(&lowered) {
            seen.push(lowered);
            result.push(category.to_string());
        }
    }
    result
}

/// Sort activity entries newest first
///
/// Entries are stored in append order, so equal timestamps keep the later
/// entry first.
pub fn sort_by_recent(entries: &mut [ActivityLogEntry]) {
    entries.reverse();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
