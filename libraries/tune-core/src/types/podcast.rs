//! Podcast types

use crate::types::{EpisodeInput, PodcastId, PodcastInput};
use serde::{Deserialize, Serialize};

/// A podcast episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub name: String,
    /// Duration in seconds
    pub duration: u32,
    pub description: String,
}

impl From<EpisodeInput> for Episode {
    fn from(input: EpisodeInput) -> Self {
        Self {
            name: input.name,
            duration: input.duration,
            description: input.description,
        }
    }
}

/// A podcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    pub id: PodcastId,
    pub name: String,
    /// Username of the owning host
    pub owner: String,
    pub episodes: Vec<Episode>,
}

impl Podcast {
    /// Build a podcast from its input record
    pub fn from_input(id: PodcastId, input: PodcastInput) -> Self {
        Self {
            id,
            name: input.name,
            owner: input.owner,
            episodes: input.episodes.into_iter().map(Episode::from).collect(),
        }
    }

    /// Total running time in seconds
    pub fn duration(&self) -> u64 {
        self.episodes.iter().map(|e| u64::from(e.duration)).sum()
    }
}
