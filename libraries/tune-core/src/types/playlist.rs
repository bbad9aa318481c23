/// Playlist domain type
use crate::types::{PlaylistId, SongId};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// Songs are held by id and are not owned by the playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Username of the owner
    pub owner: String,

    /// Simulation timestamp at creation
    pub created_at: u64,

    followers: u32,
    songs: Vec<SongId>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(
        id: PlaylistId,
        name: impl Into<String>,
        owner: impl Into<String>,
        created_at: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            owner: owner.into(),
            created_at,
            followers: 0,
            songs: Vec::new(),
        }
    }

    /// Number of users following this playlist
    pub fn followers(&self) -> u32 {
        self.followers
    }

    pub fn increase_followers(&mut self) {
        self.followers += 1;
    }

    /// Drop one follower; the count never goes negative
    pub fn decrease_followers(&mut self) {
        self.followers = self.followers.saturating_sub(1);
    }

    /// Song ids in playlist order
    pub fn songs(&self) -> &[SongId] {
        &self.songs
    }

    pub fn contains(&self, id: SongId) -> bool {
        self.songs.contains(&id)
    }

    pub fn add_song(&mut self, id: SongId) {
        self.songs.push(id);
    }

    /// Remove every occurrence of the given songs, returning how many went
    pub fn remove_songs(&mut self, ids: &[SongId]) -> usize {
        let before = self.songs.len();
        self.songs.retain(|id| !ids.contains(id));
        before - self.songs.len()
    }
}
