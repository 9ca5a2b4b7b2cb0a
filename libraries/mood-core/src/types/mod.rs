mod activity;
mod ids;
mod playlist;
mod track;
mod user;

pub use activity::{ActivityLogEntry, ActivityType, ListenerEntry};
pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::{CreatePlaylist, Playlist};
pub use track::{CreateTrack, Track, UpdateTrack};
pub use user::{Role, Session, Theme, UserInfo};
