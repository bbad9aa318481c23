/// User domain types
use crate::session::PlayerSession;
use crate::types::{Album, Playlist, PlaylistId, PodcastId, Song, SongId, UserInput};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Role tag carried by every user
///
/// The tag decides which specialised registry (artists or hosts) also holds
/// a record for the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    /// Listener account (`normal`, also accepted as `user`)
    Normal,
    /// Owns albums
    Artist,
    /// Owns podcasts
    Host,
    /// Empty tag
    Unassigned,
    /// Any tag the catalog does not recognise
    Other(String),
}

impl UserRole {
    /// Parse a role tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "normal" | "user" => UserRole::Normal,
            "artist" => UserRole::Artist,
            "host" => UserRole::Host,
            "" => UserRole::Unassigned,
            other => UserRole::Other(other.to_string()),
        }
    }

    /// Textual tag
    pub fn as_tag(&self) -> &str {
        match self {
            UserRole::Normal => "normal",
            UserRole::Artist => "artist",
            UserRole::Host => "host",
            UserRole::Unassigned => "",
            UserRole::Other(tag) => tag,
        }
    }
}

impl From<String> for UserRole {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for UserRole {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_tag().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Globally unique username
    pub username: String,

    pub age: u32,

    pub city: String,

    pub role: UserRole,

    /// Playlists owned by this user
    pub playlists: Vec<Playlist>,

    /// Playlists of other users this user follows
    pub followed_playlists: Vec<PlaylistId>,

    /// Songs this user likes
    pub liked_songs: Vec<SongId>,

    /// Username whose page this user is currently viewing
    pub page_owner: Option<String>,

    /// Playback simulation state
    pub session: PlayerSession,
}

impl User {
    /// Create a user from its input record
    pub fn new(input: &UserInput, role: UserRole) -> Self {
        Self {
            username: input.username.clone(),
            age: input.age,
            city: input.city.clone(),
            role,
            playlists: Vec::new(),
            followed_playlists: Vec::new(),
            liked_songs: Vec::new(),
            page_owner: Some(input.username.clone()),
            session: PlayerSession::default(),
        }
    }

    /// Owned playlist by id
    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Owned playlist by id (mutable)
    pub fn playlist_mut(&mut self, id: PlaylistId) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.id == id)
    }

    pub fn owns_playlist(&self, id: PlaylistId) -> bool {
        self.playlists.iter().any(|p| p.id == id)
    }

    pub fn follows(&self, id: PlaylistId) -> bool {
        self.followed_playlists.contains(&id)
    }

    pub fn likes(&self, id: SongId) -> bool {
        self.liked_songs.contains(&id)
    }

    /// Forward elapsed simulation time to the player session
    pub fn simulate_time(&mut self, elapsed: u64) {
        self.session.simulate_time(elapsed);
    }
}

/// Artist record, kept alongside the `User` with the same username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub username: String,
    pub age: u32,
    pub city: String,
    pub albums: Vec<Album>,
}

impl Artist {
    pub fn new(input: &UserInput) -> Self {
        Self {
            username: input.username.clone(),
            age: input.age,
            city: input.city.clone(),
            albums: Vec::new(),
        }
    }

    /// Album by name, ignoring case like the membership check does
    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.has_name(name))
    }

    /// Sum of the likes across every album
    pub fn total_likes(&self, catalog: &BTreeMap<SongId, Song>) -> u64 {
        self.albums.iter().map(|a| a.total_likes(catalog)).sum()
    }
}

/// Host record, kept alongside the `User` with the same username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub username: String,
    pub age: u32,
    pub city: String,
    /// Podcasts owned by this host, in the global podcast collection
    pub podcasts: Vec<PodcastId>,
}

impl Host {
    pub fn new(input: &UserInput) -> Self {
        Self {
            username: input.username.clone(),
            age: input.age,
            city: input.city.clone(),
            podcasts: Vec::new(),
        }
    }
}
