/// ID types for catalog entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Song identifier
///
/// Assigned by the registry in registration order, so ordering by id is
/// ordering by registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(u64);

impl SongId {
    /// Create a song ID from a raw value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playlist identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(u64);

impl PlaylistId {
    /// Create a playlist ID from a raw value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Podcast identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PodcastId(u64);

impl PodcastId {
    /// Create a podcast ID from a raw value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PodcastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
