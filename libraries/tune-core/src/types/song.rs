/// Song domain type
use crate::types::{SongId, SongInput};
use serde::{Deserialize, Serialize};

/// A catalog song
///
/// Songs are identified by `id` inside the registry. In the catalog itself a
/// song is recognised by its (name, album, artist) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Registry-assigned identifier
    pub id: SongId,

    /// Song title
    pub name: String,

    /// Duration in seconds
    pub duration: u32,

    /// Name of the album this song was released on
    pub album: String,

    /// Free-form tags
    pub tags: Vec<String>,

    /// Lyrics
    pub lyrics: String,

    /// Genre
    pub genre: String,

    /// Release year
    pub release_year: i32,

    /// Username of the performing artist
    pub artist: String,

    /// Number of users currently liking this song
    pub likes: u32,

    /// Number of completed listens
    pub listens: u32,
}

impl Song {
    /// Build a song from its input record
    pub fn from_input(id: SongId, input: SongInput) -> Self {
        Self {
            id,
            name: input.name,
            duration: input.duration,
            album: input.album,
            tags: input.tags,
            lyrics: input.lyrics,
            genre: input.genre,
            release_year: input.release_year,
            artist: input.artist,
            likes: 0,
            listens: 0,
        }
    }

    /// Record a like
    pub fn like(&mut self) {
        self.likes += 1;
    }

    /// Withdraw a like; never goes below zero
    pub fn dislike(&mut self) {
        self.likes = self.likes.saturating_sub(1);
    }

    /// Record a completed listen
    pub fn listen(&mut self) {
        self.listens += 1;
    }
}
