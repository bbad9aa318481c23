//! Tune Core
//!
//! Entity model, input records, and error handling for the Tune catalog
//! simulator.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Artist`, `Host`, `Song`, `Album`, `Podcast`, `Playlist`
//! - **Input Records**: `UserInput`, `SongInput`, `PodcastInput` as produced by a decoding layer
//! - **Session Simulation**: `PlayerSession`, advanced by elapsed time only
//! - **Error Handling**: Unified `CatalogError` and `Result` types
//!
//! Entities never hold references to each other. Relationships are expressed
//! with identifiers (`SongId`, `PlaylistId`, `PodcastId`) that resolve against
//! the collections owned by the registry.
//!
//! # Example
//!
//! ```rust
//! use tune_core::types::{Album, Song, SongId, SongInput};
//!
//! let input = SongInput {
//!     name: "Intro".to_string(),
//!     duration: 95,
//!     album: "Debut".to_string(),
//!     tags: vec!["ambient".to_string()],
//!     lyrics: String::new(),
//!     genre: "electronic".to_string(),
//!     release_year: 2021,
//!     artist: "nova".to_string(),
//! };
//! let song = Song::from_input(SongId::new(1), input);
//!
//! let mut album = Album::new("Debut", "nova", 2021, "First record");
//! album.add_song(&song).unwrap();
//! assert_eq!(album.track_count(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use session::{LoadedItem, PlayerSession, SessionState};

pub use types::{
    // Entities
    Album, Artist, Episode, Host, Playlist, Podcast, Song, User, UserRole,
    // Identifiers
    PlaylistId, PodcastId, SongId,
    // Input records
    AlbumInput, EpisodeInput, PodcastInput, SongInput, UserInput,
};
