//! Cascading deletion steps
//!
//! Deleting a user runs these steps in order over the registry collections.
//! Each step takes the collections it touches explicitly and returns how
//! many references it removed. The deleted user has already been detached
//! from `users` when the steps run, so `users` holds survivors only.
//!
//! Catalog purges (step 2) run before the liked-songs sweep (step 5) because
//! both walk the same liked-songs lists.

use std::collections::BTreeMap;
use tracing::debug;
use tune_core::types::{Artist, Host, Podcast, PodcastId, Song, SongId, User};

/// Remove songs from the global collection and from every liked-songs list
/// and playlist that refers to them
///
/// Returns the number of liked-song and playlist references dropped.
pub fn purge_songs(
    ids: &[SongId],
    songs: &mut BTreeMap<SongId, Song>,
    users: &mut [User],
) -> usize {
    for id in ids {
        songs.remove(id);
    }

    let mut dropped = 0;
    for user in users.iter_mut() {
        let before = user.liked_songs.len();
        user.liked_songs.retain(|id| !ids.contains(id));
        dropped += before - user.liked_songs.len();

        for playlist in &mut user.playlists {
            dropped += playlist.remove_songs(ids);
        }
    }
    dropped
}

/// Step 2 for artists: drop the artist record and its whole catalog
///
/// Every song of every album leaves the global collection and every
/// survivor's liked songs and playlists. Album track lists are cleared.
pub fn detach_artist(
    username: &str,
    artists: &mut Vec<Artist>,
    songs: &mut BTreeMap<SongId, Song>,
    users: &mut [User],
) -> usize {
    let Some(pos) = artists.iter().position(|a| a.username == username) else {
        return 0;
    };
    let mut artist = artists.remove(pos);

    let mut removed_songs = 0;
    for album in &mut artist.albums {
        let ids = album.clear_songs();
        removed_songs += ids.len();
        purge_songs(&ids, songs, users);
    }
    artist.albums.clear();

    debug!(artist = %username, removed_songs, "artist catalog removed");
    removed_songs
}

/// Step 2 for hosts: drop the host record and its podcasts
///
/// Podcasts are matched by the host's id list and by owner name, so a
/// podcast never outlives the host it names.
pub fn detach_host(
    username: &str,
    hosts: &mut Vec<Host>,
    podcasts: &mut BTreeMap<PodcastId, Podcast>,
) -> usize {
    let Some(pos) = hosts.iter().position(|h| h.username == username) else {
        return 0;
    };
    let host = hosts.remove(pos);

    let before = podcasts.len();
    podcasts.retain(|id, p| p.owner != username && !host.podcasts.contains(id));
    let removed_podcasts = before - podcasts.len();

    debug!(host = %username, removed_podcasts, "host podcasts removed");
    removed_podcasts
}

/// Step 3: survivors stop following the deleted user's playlists
///
/// Each removal also takes one follower off the playlist.
pub fn unfollow_owned_playlists(deleted: &mut User, users: &mut [User]) -> usize {
    let mut removed = 0;
    for user in users.iter_mut() {
        user.followed_playlists.retain(|id| match deleted.playlist_mut(*id) {
            Some(playlist) => {
                playlist.decrease_followers();
                removed += 1;
                false
            }
            None => true,
        });
    }

    debug!(username = %deleted.username, removed, "followers of deleted playlists dropped");
    removed
}

/// Step 4: playlists the deleted user followed lose that follower
pub fn release_followed_playlists(deleted: &User, users: &mut [User]) -> usize {
    let mut released = 0;
    for user in users.iter_mut() {
        for playlist in &mut user.playlists {
            if deleted.follows(playlist.id) {
                playlist.decrease_followers();
                released += 1;
            }
        }
    }

    debug!(username = %deleted.username, released, "followed playlists released");
    released
}

/// Step 5: survivors drop every song the deleted user also liked
///
/// `Song::likes` is not decremented here, so like counters keep counting
/// the dropped likes.
pub fn strip_shared_likes(deleted: &User, users: &mut [User]) -> usize {
    let mut stripped = 0;
    for user in users.iter_mut() {
        let before = user.liked_songs.len();
        user.liked_songs.retain(|id| !deleted.likes(*id));
        stripped += before - user.liked_songs.len();
    }

    debug!(username = %deleted.username, stripped, "shared likes stripped");
    stripped
}

/// Step 6: the deleted user no longer owns a page view
pub fn clear_page_owner(deleted: &mut User) {
    deleted.page_owner = None;
}
