//! Next/previous index selection
//!
//! Pure functions over playlist positions. The manager owns the playlist
//! and the rng; these only decide which index comes next.

use crate::types::PlaybackMode;
use rand::Rng;

/// Index to play when the current track finishes on its own
///
/// - `AllLoop`: `(current + 1) % len`
/// - `SingleLoop`: `current` again
/// - `Shuffle`: uniform over every index except `current`; with one track
///   that track is replayed
///
/// With no current track, playback starts at index 0 (a random index in
/// shuffle). Returns `None` for an empty playlist.
pub fn next_index<R: Rng + ?Sized>(
    mode: PlaybackMode,
    current: Option<usize>,
    len: usize,
    rng: &mut R,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let Some(current) = current.filter(|&c| c < len) else {
        return Some(match mode {
            PlaybackMode::Shuffle => rng.gen_range(0..len),
            _ => 0,
        });
    };

    match mode {
        PlaybackMode::SingleLoop => Some(current),
        PlaybackMode::AllLoop => Some((current + 1) % len),
        PlaybackMode::Shuffle => Some(random_other(current, len, rng)),
    }
}

/// Index for a manual skip forward
///
/// Same as [`next_index`] except single loop advances like all loop.
pub fn skip_index<R: Rng + ?Sized>(
    mode: PlaybackMode,
    current: Option<usize>,
    len: usize,
    rng: &mut R,
) -> Option<usize> {
    let mode = match mode {
        PlaybackMode::SingleLoop => PlaybackMode::AllLoop,
        other => other,
    };
    next_index(mode, current, len, rng)
}

/// Index for a manual skip backward: `(current - 1 + len) % len`
pub fn previous_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current.filter(|&c| c < len) {
        Some(current) => Some((current + len - 1) % len),
        None => Some(len - 1),
    }
}

/// Draw from `0..len - 1` and step over `current`, keeping the result uniform
fn random_other<R: Rng + ?Sized>(current: usize, len: usize, rng: &mut R) -> usize {
    if len < 2 {
        return current;
    }
    let pick = rng.gen_range(0..len - 1);
    if pick >= current {
        pick + 1
    } else {
        pick
    }
}
