//! Album types

use crate::error::{CatalogError, Result};
use crate::types::{Song, SongId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An album
///
/// Holds the ids of its songs in track order. The songs themselves live in
/// the registry's global song collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    /// Username of the owning artist
    pub owner: String,
    pub release_year: i32,
    pub description: String,
    songs: Vec<SongId>,
}

impl Album {
    /// Create an empty album
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        release_year: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            release_year,
            description: description.into(),
            songs: Vec::new(),
        }
    }

    /// Check whether a song carries this album's name and owner
    ///
    /// Comparison is case-insensitive on both fields.
    pub fn accepts(&self, song: &Song) -> bool {
        same_name(&song.album, &self.name) && same_name(&song.artist, &self.owner)
    }

    /// Whether this album goes by `name`, ignoring case
    pub fn has_name(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    /// Append a song to the track list
    ///
    /// # Errors
    /// Returns `CatalogError::DoesNotBelong` and leaves the album untouched if
    /// the song's album or artist does not match.
    pub fn add_song(&mut self, song: &Song) -> Result<()> {
        if !self.accepts(song) {
            return Err(CatalogError::DoesNotBelong {
                song: song.name.clone(),
                album: self.name.clone(),
            });
        }
        self.songs.push(song.id);
        Ok(())
    }

    /// Song ids in track order
    pub fn songs(&self) -> &[SongId] {
        &self.songs
    }

    /// Number of tracks
    pub fn track_count(&self) -> usize {
        self.songs.len()
    }

    /// Song id at a track index
    pub fn track(&self, index: usize) -> Option<SongId> {
        self.songs.get(index).copied()
    }

    /// Whether the album lists this song
    pub fn contains(&self, id: SongId) -> bool {
        self.songs.contains(&id)
    }

    /// Drop every track, returning the ids that were listed
    pub fn clear_songs(&mut self) -> Vec<SongId> {
        std::mem::take(&mut self.songs)
    }

    /// Names of the tracks, resolved against the song collection
    pub fn song_names(&self, catalog: &BTreeMap<SongId, Song>) -> Vec<String> {
        self.resolve(catalog).map(|song| song.name.clone()).collect()
    }

    /// Sum of the likes of every track, recomputed on each call
    pub fn total_likes(&self, catalog: &BTreeMap<SongId, Song>) -> u64 {
        self.resolve(catalog).map(|song| u64::from(song.likes)).sum()
    }

    /// Sum of the listens of every track, recomputed on each call
    pub fn listens(&self, catalog: &BTreeMap<SongId, Song>) -> u64 {
        self.resolve(catalog)
            .map(|song| u64::from(song.listens))
            .sum()
    }

    fn resolve<'a>(
        &'a self,
        catalog: &'a BTreeMap<SongId, Song>,
    ) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter_map(move |id| catalog.get(id))
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
