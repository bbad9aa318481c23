mod album;
mod ids;
mod input;
mod playlist;
mod podcast;
mod song;
mod user;

pub use album::Album;
pub use ids::{PlaylistId, PodcastId, SongId};
pub use input::{AlbumInput, EpisodeInput, PodcastInput, SongInput, UserInput};
pub use playlist::Playlist;
pub use podcast::{Episode, Podcast};
pub use song::Song;
pub use user::{Artist, Host, User, UserRole};
