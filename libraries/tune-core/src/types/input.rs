//! Input records
//!
//! Plain decoded records handed to the registry by the input layer. Field
//! names follow the camelCase of the library files they are decoded from.

use serde::{Deserialize, Serialize};

/// User definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub username: String,
    pub age: u32,
    pub city: String,
}

impl UserInput {
    /// Create a user input record
    pub fn new(username: impl Into<String>, age: u32, city: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            age,
            city: city.into(),
        }
    }
}

/// Song definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInput {
    pub name: String,
    /// Duration in seconds
    pub duration: u32,
    pub album: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub lyrics: String,
    pub genre: String,
    pub release_year: i32,
    pub artist: String,
}

/// Episode definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeInput {
    pub name: String,
    /// Duration in seconds
    pub duration: u32,
    #[serde(default)]
    pub description: String,
}

/// Podcast definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastInput {
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub episodes: Vec<EpisodeInput>,
}

/// Album definition, as submitted by an artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInput {
    pub name: String,
    pub release_year: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub songs: Vec<SongInput>,
}
