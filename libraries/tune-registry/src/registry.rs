//! Catalog registry - core orchestration
//!
//! Owns every top-level collection and keeps cross-collection references
//! consistent on mutation.

use crate::{cascade, charts, config::RegistrySettings};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use tune_core::{
    error::{CatalogError, Result},
    session::PlayerSession,
    types::{
        Album, AlbumInput, Artist, Host, Playlist, PlaylistId, Podcast, PodcastId, PodcastInput,
        Song, SongId, SongInput, User, UserInput, UserRole,
    },
};

/// In-memory catalog registry
///
/// Owns users, artists, hosts, songs and podcasts. Playlists live inside
/// their owning `User`, albums inside their owning `Artist`. Every other
/// relationship is an id resolved against these collections.
///
/// Single-threaded by construction: every operation takes `&mut self` and
/// runs to completion. Sharing a registry between threads requires wrapping
/// the whole registry in one lock.
#[derive(Debug, Clone)]
pub struct Registry {
    settings: RegistrySettings,

    /// Users in registration order
    users: Vec<User>,

    /// Artist records in registration order
    artists: Vec<Artist>,

    /// Host records in registration order
    hosts: Vec<Host>,

    /// Global song collection, keyed by registration-ordered id
    songs: BTreeMap<SongId, Song>,

    /// Global podcast collection, keyed by registration-ordered id
    podcasts: BTreeMap<PodcastId, Podcast>,

    /// Simulation clock
    timestamp: u64,

    next_song_id: u64,
    next_playlist_id: u64,
    next_podcast_id: u64,
}

impl Registry {
    /// Create an empty registry with default settings
    pub fn new() -> Self {
        Self::with_settings(RegistrySettings::default())
    }

    /// Create an empty registry with explicit settings
    pub fn with_settings(settings: RegistrySettings) -> Self {
        Self {
            timestamp: settings.initial_timestamp,
            settings,
            users: Vec::new(),
            artists: Vec::new(),
            hosts: Vec::new(),
            songs: BTreeMap::new(),
            podcasts: BTreeMap::new(),
            next_song_id: 0,
            next_playlist_id: 0,
            next_podcast_id: 0,
        }
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Current value of the simulation clock
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Clear every collection and rewind the clock
    pub fn reset(&mut self) {
        *self = Self::with_settings(self.settings.clone());
        info!("registry reset");
    }

    // ===== Bulk loading =====

    /// Replace all users with plain listener accounts
    ///
    /// Artist and host records are dropped with the users they belonged to.
    /// Repeated usernames after the first are skipped.
    pub fn set_users(&mut self, inputs: Vec<UserInput>) {
        self.users.clear();
        self.artists.clear();
        self.hosts.clear();

        for input in inputs {
            if self.user_exists(&input.username) {
                warn!(username = %input.username, "duplicate username in user list skipped");
                continue;
            }
            self.users.push(User::new(&input, UserRole::Normal));
        }
        debug!(count = self.users.len(), "users loaded");
    }

    /// Replace the global song collection
    ///
    /// Songs loaded this way belong to no album. References to the previous
    /// songs are swept from liked songs, playlists and album track lists.
    pub fn set_songs(&mut self, inputs: Vec<SongInput>) {
        let previous: Vec<SongId> = self.songs.keys().copied().collect();
        cascade::purge_songs(&previous, &mut self.songs, &mut self.users);
        for artist in &mut self.artists {
            for album in &mut artist.albums {
                album.clear_songs();
            }
        }

        for input in inputs {
            let id = self.allocate_song_id();
            self.songs.insert(id, Song::from_input(id, input));
        }
        debug!(count = self.songs.len(), "songs loaded");
    }

    /// Replace the global podcast collection
    ///
    /// Podcasts whose owner is a registered host are attached to that host.
    pub fn set_podcasts(&mut self, inputs: Vec<PodcastInput>) {
        self.podcasts.clear();
        for host in &mut self.hosts {
            host.podcasts.clear();
        }

        for input in inputs {
            self.insert_podcast(input);
        }
        debug!(count = self.podcasts.len(), "podcasts loaded");
    }

    // ===== Users =====

    /// Register a user under the given role
    ///
    /// Artists and hosts also get a record in their specialised registry. A
    /// new host takes ownership of any podcast already listing it as owner.
    ///
    /// # Errors
    /// `CatalogError::UsernameTaken` if any user already has this username.
    pub fn add_user(&mut self, input: UserInput, role: impl Into<UserRole>) -> Result<String> {
        let role = role.into();
        if self.user_exists(&input.username) {
            warn!(username = %input.username, "username already taken");
            return Err(CatalogError::UsernameTaken(input.username));
        }

        match role {
            UserRole::Artist => self.artists.push(Artist::new(&input)),
            UserRole::Host => {
                let mut host = Host::new(&input);
                // Adopt podcasts bulk-loaded before the host registered
                host.podcasts = self
                    .podcasts
                    .values()
                    .filter(|p| p.owner == input.username)
                    .map(|p| p.id)
                    .collect();
                self.hosts.push(host);
            }
            _ => {}
        }
        self.users.push(User::new(&input, role.clone()));

        info!(username = %input.username, role = %role, "user added");
        Ok(format!(
            "The username {} has been added successfully.",
            input.username
        ))
    }

    /// Delete a user and every reference to it
    ///
    /// Runs the cascade steps in order:
    /// 1. detach the user
    /// 2. drop the artist catalog or host podcasts
    /// 3. survivors unfollow the user's playlists
    /// 4. playlists the user followed lose a follower
    /// 5. survivors drop songs the user also liked
    /// 6. clear the user's page view
    ///
    /// # Errors
    /// `CatalogError::UserNotFound` if no user has this username.
    pub fn delete_user(&mut self, username: &str) -> Result<String> {
        let Some(pos) = self.users.iter().position(|u| u.username == username) else {
            warn!(username, "delete requested for unknown user");
            return Err(CatalogError::UserNotFound);
        };

        let mut deleted = self.users.remove(pos);

        match deleted.role {
            UserRole::Artist => {
                cascade::detach_artist(
                    username,
                    &mut self.artists,
                    &mut self.songs,
                    &mut self.users,
                );
            }
            UserRole::Host => {
                cascade::detach_host(username, &mut self.hosts, &mut self.podcasts);
            }
            _ => {}
        }
        cascade::unfollow_owned_playlists(&mut deleted, &mut self.users);
        cascade::release_followed_playlists(&deleted, &mut self.users);
        cascade::strip_shared_likes(&deleted, &mut self.users);
        cascade::clear_page_owner(&mut deleted);

        info!(username, "user deleted");
        Ok(format!("{} was successfully deleted.", deleted.username))
    }

    pub fn get_user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn get_artist(&self, username: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.username == username)
    }

    pub fn get_host(&self, username: &str) -> Option<&Host> {
        self.hosts.iter().find(|h| h.username == username)
    }

    /// Player session of a user, for the playback layer to drive
    pub fn session_mut(&mut self, username: &str) -> Option<&mut PlayerSession> {
        self.users
            .iter_mut()
            .find(|u| u.username == username)
            .map(|u| &mut u.session)
    }

    /// Users in registration order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    /// Usernames grouped by role
    ///
    /// Normal users first, then artists, then hosts, each group in
    /// registration order. Users with an empty role tag are listed with the
    /// hosts; users with an unrecognised tag are not listed.
    pub fn all_users(&self) -> Vec<String> {
        let group = |matches: fn(&UserRole) -> bool| {
            self.users
                .iter()
                .filter(move |u| matches(&u.role))
                .map(|u| u.username.clone())
        };

        group(|r| *r == UserRole::Normal)
            .chain(group(|r| *r == UserRole::Artist))
            .chain(group(|r| matches!(r, UserRole::Host | UserRole::Unassigned)))
            .collect()
    }

    // ===== Songs and albums =====

    /// Songs in registration order
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.values()
    }

    pub fn song(&self, id: SongId) -> Option<&Song> {
        self.songs.get(&id)
    }

    /// Find a song by its (name, album, artist) identity
    pub fn find_song(&self, name: &str, album: &str, artist: &str) -> Option<&Song> {
        self.songs
            .values()
            .find(|s| s.name == name && s.album == album && s.artist == artist)
    }

    /// Every album, by artist registration order then album order
    pub fn albums(&self) -> Vec<&Album> {
        self.artists.iter().flat_map(|a| a.albums.iter()).collect()
    }

    /// Publish an album for an artist
    ///
    /// All checks run before anything is stored.
    ///
    /// # Errors
    /// - `NotFound` if the artist is not registered
    /// - `Duplicate` if the artist already has an album with this name
    /// - `DoesNotBelong` if any song names another album or artist
    pub fn add_album(&mut self, artist: &str, input: AlbumInput) -> Result<()> {
        let Some(pos) = self.artists.iter().position(|a| a.username == artist) else {
            warn!(artist, "album submitted for unknown artist");
            return Err(CatalogError::not_found("Artist", artist));
        };
        if self.artists[pos].album(&input.name).is_some() {
            warn!(artist, album = %input.name, "album name already used");
            return Err(CatalogError::duplicate(format!(
                "{} already has an album named {}",
                artist, input.name
            )));
        }

        let mut album = Album::new(input.name, artist, input.release_year, input.description);
        let mut staged = Vec::with_capacity(input.songs.len());
        for (offset, song_input) in (0u64..).zip(input.songs) {
            let song = Song::from_input(SongId::new(self.next_song_id + offset), song_input);
            if let Err(err) = album.add_song(&song) {
                warn!(artist, album = %album.name, song = %song.name, "song rejected by album");
                return Err(err);
            }
            staged.push(song);
        }

        self.next_song_id += staged.len() as u64;
        for song in staged {
            self.songs.insert(song.id, song);
        }
        info!(artist, album = %album.name, tracks = album.track_count(), "album added");
        self.artists[pos].albums.push(album);
        Ok(())
    }

    /// Withdraw an album and its songs from the catalog
    ///
    /// # Errors
    /// `NotFound` if the artist or the album does not exist.
    pub fn remove_album(&mut self, artist: &str, name: &str) -> Result<()> {
        let owner = self
            .artists
            .iter_mut()
            .find(|a| a.username == artist)
            .ok_or_else(|| CatalogError::not_found("Artist", artist))?;
        let pos = owner
            .albums
            .iter()
            .position(|a| a.has_name(name))
            .ok_or_else(|| CatalogError::not_found("Album", name))?;

        let mut album = owner.albums.remove(pos);
        let ids = album.clear_songs();
        let dropped = cascade::purge_songs(&ids, &mut self.songs, &mut self.users);

        info!(artist, album = name, dropped, "album removed");
        Ok(())
    }

    // ===== Podcasts =====

    /// Podcasts in registration order
    pub fn podcasts(&self) -> impl Iterator<Item = &Podcast> {
        self.podcasts.values()
    }

    /// Register a podcast in the global collection
    ///
    /// # Errors
    /// - `NotFound` if the owner is not a registered host
    /// - `Duplicate` if the owner already has a podcast with this name
    pub fn add_podcast(&mut self, input: PodcastInput) -> Result<PodcastId> {
        if self.get_host(&input.owner).is_none() {
            warn!(
                owner = %input.owner,
                podcast = %input.name,
                "podcast submitted for unknown host"
            );
            return Err(CatalogError::not_found("Host", &input.owner));
        }
        if self.find_podcast(&input.owner, &input.name).is_some() {
            warn!(owner = %input.owner, podcast = %input.name, "podcast already exists");
            return Err(CatalogError::duplicate(format!(
                "{} already has a podcast named {}",
                input.owner, input.name
            )));
        }
        Ok(self.insert_podcast(input))
    }

    /// Remove a podcast from the global collection and from its host
    ///
    /// # Errors
    /// `NotFound` if the owner has no podcast with this name.
    pub fn remove_podcast(&mut self, owner: &str, name: &str) -> Result<Podcast> {
        let id = self
            .find_podcast(owner, name)
            .map(|p| p.id)
            .ok_or_else(|| CatalogError::not_found("Podcast", name))?;

        if let Some(host) = self.hosts.iter_mut().find(|h| h.username == owner) {
            host.podcasts.retain(|p| *p != id);
        }
        let podcast = self
            .podcasts
            .remove(&id)
            .ok_or_else(|| CatalogError::not_found("Podcast", name))?;

        info!(owner, podcast = name, "podcast removed");
        Ok(podcast)
    }

    fn find_podcast(&self, owner: &str, name: &str) -> Option<&Podcast> {
        self.podcasts
            .values()
            .find(|p| p.owner == owner && p.name == name)
    }

    fn insert_podcast(&mut self, input: PodcastInput) -> PodcastId {
        let id = PodcastId::new(self.next_podcast_id);
        self.next_podcast_id += 1;

        if let Some(host) = self.hosts.iter_mut().find(|h| h.username == input.owner) {
            host.podcasts.push(id);
        }
        debug!(owner = %input.owner, podcast = %input.name, "podcast registered");
        self.podcasts.insert(id, Podcast::from_input(id, input));
        id
    }

    // ===== Playlists =====

    /// Every playlist, by owner registration order then creation order
    pub fn playlists(&self) -> Vec<&Playlist> {
        self.users.iter().flat_map(|u| u.playlists.iter()).collect()
    }

    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.users.iter().find_map(|u| u.playlist(id))
    }

    /// Create a playlist stamped with the current clock
    ///
    /// # Errors
    /// - `UserNotFound` if the owner does not exist
    /// - `Duplicate` if the owner already has a playlist with this name
    pub fn create_playlist(&mut self, username: &str, name: &str) -> Result<PlaylistId> {
        let id = PlaylistId::new(self.next_playlist_id);
        let timestamp = self.timestamp;
        let owner = self.user_mut(username)?;

        if owner.playlists.iter().any(|p| p.name == name) {
            return Err(CatalogError::duplicate(format!(
                "{} already has a playlist named {}",
                username, name
            )));
        }
        owner
            .playlists
            .push(Playlist::new(id, name, username, timestamp));
        self.next_playlist_id += 1;

        debug!(username, playlist = name, "playlist created");
        Ok(id)
    }

    /// Append a catalog song to a playlist the user owns
    ///
    /// # Errors
    /// `NotFound` for an unknown song or a playlist the user does not own,
    /// `Duplicate` if the song is already in the playlist.
    pub fn add_song_to_playlist(
        &mut self,
        username: &str,
        playlist: PlaylistId,
        song: SongId,
    ) -> Result<()> {
        if !self.songs.contains_key(&song) {
            return Err(CatalogError::not_found("Song", song));
        }
        let playlist = self
            .user_mut(username)?
            .playlist_mut(playlist)
            .ok_or_else(|| CatalogError::not_found("Playlist", playlist))?;

        if playlist.contains(song) {
            return Err(CatalogError::duplicate(format!(
                "song {} already in playlist {}",
                song, playlist.name
            )));
        }
        playlist.add_song(song);
        Ok(())
    }

    /// Follow another user's playlist
    ///
    /// # Errors
    /// - `UserNotFound` / `NotFound` for unknown user or playlist
    /// - `InvalidInput` when following one's own playlist
    /// - `Duplicate` when already following
    pub fn follow_playlist(&mut self, username: &str, playlist: PlaylistId) -> Result<()> {
        let follower = self.user_index(username)?;
        let owner = self.playlist_owner_index(playlist)?;

        if follower == owner {
            return Err(CatalogError::invalid_input(
                "You cannot follow or unfollow your own playlist.",
            ));
        }
        if self.users[follower].follows(playlist) {
            return Err(CatalogError::duplicate(format!(
                "{} already follows playlist {}",
                username, playlist
            )));
        }

        self.users[follower].followed_playlists.push(playlist);
        if let Some(target) = self.users[owner].playlist_mut(playlist) {
            target.increase_followers();
        }
        debug!(username, %playlist, "playlist followed");
        Ok(())
    }

    /// Stop following a playlist
    ///
    /// # Errors
    /// `NotFound` if the user does not follow the playlist.
    pub fn unfollow_playlist(&mut self, username: &str, playlist: PlaylistId) -> Result<()> {
        let follower = self.user_index(username)?;
        if !self.users[follower].follows(playlist) {
            return Err(CatalogError::not_found("Followed playlist", playlist));
        }

        self.users[follower]
            .followed_playlists
            .retain(|id| *id != playlist);
        if let Ok(owner) = self.playlist_owner_index(playlist) {
            if let Some(target) = self.users[owner].playlist_mut(playlist) {
                target.decrease_followers();
            }
        }
        debug!(username, %playlist, "playlist unfollowed");
        Ok(())
    }

    // ===== Likes =====

    /// Like a catalog song
    ///
    /// # Errors
    /// `NotFound` for an unknown song, `Duplicate` if already liked.
    pub fn like_song(&mut self, username: &str, song: SongId) -> Result<()> {
        if !self.songs.contains_key(&song) {
            return Err(CatalogError::not_found("Song", song));
        }
        let user = self.user_mut(username)?;
        if user.likes(song) {
            return Err(CatalogError::duplicate(format!(
                "{} already likes song {}",
                username, song
            )));
        }
        user.liked_songs.push(song);

        if let Some(entry) = self.songs.get_mut(&song) {
            entry.like();
        }
        Ok(())
    }

    /// Withdraw a like
    ///
    /// # Errors
    /// `NotFound` if the user does not like the song.
    pub fn unlike_song(&mut self, username: &str, song: SongId) -> Result<()> {
        let user = self.user_mut(username)?;
        if !user.likes(song) {
            return Err(CatalogError::not_found("Liked song", song));
        }
        user.liked_songs.retain(|id| *id != song);

        if let Some(entry) = self.songs.get_mut(&song) {
            entry.dislike();
        }
        Ok(())
    }

    // ===== Charts =====

    /// Most liked song names
    pub fn top_songs(&self) -> Vec<String> {
        charts::top_songs(self.songs.values(), self.settings.chart_limit)
    }

    /// Most followed playlist names
    pub fn top_playlists(&self) -> Vec<String> {
        charts::top_playlists(self.playlists(), self.settings.chart_limit)
    }

    /// Most liked album names
    pub fn top_albums(&self) -> Vec<String> {
        charts::top_albums(self.albums(), &self.songs, self.settings.chart_limit)
    }

    /// Most liked artist usernames
    pub fn top_artists(&self) -> Vec<String> {
        charts::top_artists(&self.artists, &self.songs, self.settings.chart_limit)
    }

    // ===== Clock =====

    /// Advance the simulation clock
    ///
    /// The elapsed time is forwarded to every user's player session. A zero
    /// delta is a no-op. A timestamp earlier than the clock moves the clock
    /// back without touching any session.
    pub fn update_timestamp(&mut self, new_timestamp: u64) {
        let previous = self.timestamp;
        self.timestamp = new_timestamp;

        let Some(elapsed) = new_timestamp.checked_sub(previous) else {
            warn!(previous, new_timestamp, "clock moved backwards");
            return;
        };
        if elapsed == 0 {
            return;
        }

        for user in &mut self.users {
            user.simulate_time(elapsed);
        }
        debug!(elapsed, timestamp = new_timestamp, "clock advanced");
    }

    // ===== Internal helpers =====

    fn user_exists(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    fn user_index(&self, username: &str) -> Result<usize> {
        self.users
            .iter()
            .position(|u| u.username == username)
            .ok_or(CatalogError::UserNotFound)
    }

    fn user_mut(&mut self, username: &str) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or(CatalogError::UserNotFound)
    }

    fn playlist_owner_index(&self, playlist: PlaylistId) -> Result<usize> {
        self.users
            .iter()
            .position(|u| u.owns_playlist(playlist))
            .ok_or_else(|| CatalogError::not_found("Playlist", playlist))
    }

    fn allocate_song_id(&mut self) -> SongId {
        let id = SongId::new(self.next_song_id);
        self.next_song_id += 1;
        id
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
