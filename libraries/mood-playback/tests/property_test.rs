//! Property-based tests for playback sequencing
//!
//! Uses proptest to verify the mode rules across many playlists and seeds.

use mood_core::{Track, TrackId};
use mood_playback::{
    sequencer, NullBackend, PlaybackConfig, PlaybackManager, PlaybackMode,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ===== Helpers =====

fn playlist(len: usize) -> Vec<Track> {
    (0..len)
        .map(|i| {
            let mut track = Track::new(
                format!("Song {}", i),
                "Artist",
                "Calm",
                format!("audio/{}.mp3", i),
            );
            track.id = TrackId::new(format!("track-{}", i));
            track
        })
        .collect()
}

fn manager(len: usize, mode: PlaybackMode, seed: u64) -> PlaybackManager {
    let config = PlaybackConfig {
        mode,
        ..Default::default()
    };
    let mut manager = PlaybackManager::with_seed(config, Box::new(NullBackend::new()), seed);
    manager.set_playlist(playlist(len));
    manager
}

fn arbitrary_mode() -> impl Strategy<Value = PlaybackMode> {
    prop_oneof![
        Just(PlaybackMode::AllLoop),
        Just(PlaybackMode::SingleLoop),
        Just(PlaybackMode::Shuffle),
    ]
}

// ===== Property Tests =====

proptest! {
    /// Property: shuffle never picks the playing track when there is a choice
    #[test]
    fn shuffle_never_repeats_current(
        len in 2usize..40,
        start in 0usize..40,
        seed in any::<u64>(),
    ) {
        let current = start % len;
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..20 {
            let next = sequencer::next_index(PlaybackMode::Shuffle, Some(current), len, &mut rng);
            prop_assert!(next.is_some());
            prop_assert_ne!(next, Some(current));
            prop_assert!(next.unwrap() < len);
        }
    }

    /// Property: shuffle through the manager keeps changing track
    #[test]
    fn shuffle_manager_changes_track_on_finish(
        len in 2usize..20,
        finishes in 1usize..30,
        seed in any::<u64>(),
    ) {
        let mut manager = manager(len, PlaybackMode::Shuffle, seed);
        manager.play().unwrap();

        for _ in 0..finishes {
            let before = manager.current_track().unwrap().id.clone();
            manager.on_track_finished().unwrap();
            let after = manager.current_track().unwrap().id.clone();
            prop_assert_ne!(before, after);
        }
    }

    /// Property: single loop always returns the same track
    #[test]
    fn single_loop_returns_same_track(
        len in 1usize..30,
        start in 0usize..30,
        finishes in 1usize..20,
    ) {
        let tracks = playlist(len);
        let chosen = tracks[start % len].clone();

        let mut manager = manager(len, PlaybackMode::SingleLoop, 0);
        manager.play_track(chosen.clone()).unwrap();

        for _ in 0..finishes {
            manager.on_track_finished().unwrap();
            prop_assert_eq!(manager.current_track(), Some(&chosen));
        }
    }

    /// Property: all loop visits every track in order and wraps to the start
    #[test]
    fn all_loop_wraps_to_first(len in 1usize..30) {
        let mut manager = manager(len, PlaybackMode::AllLoop, 0);
        manager.play().unwrap();

        for expected in 1..=len {
            manager.on_track_finished().unwrap();
            prop_assert_eq!(manager.current_index(), Some(expected % len));
        }
    }

    /// Property: three cycles return to the starting mode
    #[test]
    fn mode_cycle_has_period_three(mode in arbitrary_mode()) {
        let mut manager = manager(1, mode, 0);
        manager.cycle_mode();
        manager.cycle_mode();
        prop_assert_eq!(manager.cycle_mode(), mode);
    }

    /// Property: next then previous in all loop returns to the same track
    #[test]
    fn next_then_previous_is_identity(len in 1usize..30, start in 0usize..30) {
        let tracks = playlist(len);
        let mut manager = manager(len, PlaybackMode::AllLoop, 0);
        manager.play_track(tracks[start % len].clone()).unwrap();

        manager.next().unwrap();
        manager.previous().unwrap();
        prop_assert_eq!(manager.current_index(), Some(start % len));
    }
}
