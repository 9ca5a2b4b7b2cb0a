//! Admin dashboard aggregates
//!
//! Recomputed from the collections on every view; nothing is cached.

use crate::library;
use crate::types::{ActivityLogEntry, ListenerEntry, Playlist, Track, TrackId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Number of tracks tagged with one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// A track and how many listens it has
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackPlays {
    pub track_id: TrackId,
    pub title: String,
    pub plays: usize,
}

/// Aggregate numbers shown on the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_tracks: usize,
    pub total_playlists: usize,
    /// Songs across all playlists, counting embedded copies
    pub total_playlist_songs: usize,
    pub unique_listeners: usize,
    pub total_listens: usize,
    /// Sorted by count descending, then category name
    pub tracks_per_category: Vec<CategoryCount>,
    pub top_tracks: Vec<TrackPlays>,
    /// Newest first
    pub recent_activity: Vec<ActivityLogEntry>,
}

/// Limits applied while computing the dashboard
#[derive(Debug, Clone, Copy)]
pub struct DashboardLimits {
    pub recent_activity: usize,
    pub top_tracks: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            recent_activity: 10,
            top_tracks: 5,
        }
    }
}

impl DashboardStats {
    /// Compute the dashboard from the full collections
    pub fn compute(
        tracks: &[Track],
        playlists: &[Playlist],
        listeners: &[ListenerEntry],
        activities: &[ActivityLogEntry],
        limits: DashboardLimits,
    ) -> Self {
        let tracks_per_category = count_categories(tracks);

        let unique_listeners = listeners
            .iter()
            .map(|l| l.user.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mut recent_activity = activities.to_vec();
        library::sort_by_recent(&mut recent_activity);
        recent_activity.truncate(limits.recent_activity);

        Self {
            total_tracks: tracks.len(),
            total_playlists: playlists.len(),
            total_playlist_songs: playlists.iter().map(|p| p.songs.len()).sum(),
            unique_listeners,
            total_listens: listeners.len(),
            tracks_per_category,
            top_tracks: top_tracks(tracks, listeners, limits.top_tracks),
            recent_activity,
        }
    }
}

fn count_categories(tracks: &[Track]) -> Vec<CategoryCount> {
    // Group case-insensitively but report the first spelling seen
    let names = library::categories(tracks);
    let mut counts: Vec<CategoryCount> = names
        .into_iter()
        .map(|category| {
            let count = library::filter_by_category(tracks, &category).len();
            CategoryCount { category, count }
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    counts
}

fn top_tracks(tracks: &[Track], listeners: &[ListenerEntry], limit: usize) -> Vec<TrackPlays> {
    let mut plays: HashMap<&TrackId, usize> = HashMap::new();
    for entry in listeners {
        *plays.entry(&entry.track_id).or_default() += 1;
    }

    // Listens for tracks no longer in the library are not reported
    let mut result: Vec<TrackPlays> = tracks
        .iter()
        .filter_map(|t| {
            plays.get(&t.id).map(|&count| TrackPlays {
                track_id: t.id.clone(),
                title: t.title.clone(),
                plays: count,
            })
        })
        .collect();

    result.sort_by(|a, b| b.plays.cmp(&a.plays).then_with(|| a.title.cmp(&b.title)));
    result.truncate(limit);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityType;

    fn track(id: &str, title: &str, category: &str) -> Track {
        let mut t = Track::new(title, "Artist", category, "/a.mp3");
        t.id = TrackId::new(id);
        t
    }

    #[test]
    fn empty_collections() {
        let stats = DashboardStats::compute(&[], &[], &[], &[], DashboardLimits::default());
        assert_eq!(stats.total_tracks, 0);
        assert_eq!(stats.unique_listeners, 0);
        assert!(stats.tracks_per_category.is_empty());
        assert!(stats.top_tracks.is_empty());
    }

    #[test]
    fn counts_and_categories() {
        let tracks = vec![
            track("1", "A", "Happy"),
            track("2", "B", "sad"),
            track("3", "C", "happy"),
            track("4", "D", "Calm"),
        ];
        let mut mix = Playlist::new("Mix");
        mix.add_song(tracks[0].clone());
        mix.add_song(tracks[1].clone());
        let playlists = vec![mix, Playlist::new("Empty")];

        let stats =
            DashboardStats::compute(&tracks, &playlists, &[], &[], DashboardLimits::default());

        assert_eq!(stats.total_tracks, 4);
        assert_eq!(stats.total_playlists, 2);
        assert_eq!(stats.total_playlist_songs, 2);
        assert_eq!(
            stats.tracks_per_category,
            vec![
                CategoryCount { category: "Happy".into(), count: 2 },
                CategoryCount { category: "Calm".into(), count: 1 },
                CategoryCount { category: "sad".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn listeners_and_top_tracks() {
        let tracks = vec![track("1", "A", "Happy"), track("2", "B", "Sad")];
        let listeners = vec![
            ListenerEntry::new("ann", TrackId::new("2")),
            ListenerEntry::new("bob", TrackId::new("2")),
            ListenerEntry::new("ann", TrackId::new("1")),
            ListenerEntry::new("ann", TrackId::new("gone")),
        ];
        let limits = DashboardLimits { recent_activity: 10, top_tracks: 1 };

        let stats = DashboardStats::compute(&tracks, &[], &listeners, &[], limits);

        assert_eq!(stats.unique_listeners, 2);
        assert_eq!(stats.total_listens, 4);
        assert_eq!(stats.top_tracks.len(), 1);
        assert_eq!(stats.top_tracks[0].track_id.as_str(), "2");
        assert_eq!(stats.top_tracks[0].plays, 2);
    }

    #[test]
    fn recent_activity_is_limited() {
        let activities: Vec<ActivityLogEntry> = (0..5)
            .map(|i| ActivityLogEntry::new("admin", ActivityType::TrackAdded, format!("#{}", i)))
            .collect();
        let limits = DashboardLimits { recent_activity: 3, top_tracks: 5 };

        let stats = DashboardStats::compute(&[], &[], &[], &activities, limits);
        assert_eq!(stats.recent_activity.len(), 3);
    }
}
