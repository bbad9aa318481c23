//! Top-N charts
//!
//! Every chart sorts with a stable sort, so entries with equal keys keep the
//! order they were handed in. The registry hands them in registration order.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use tune_core::types::{Album, Artist, Playlist, Song, SongId};

/// Song names by like count, most liked first
pub fn top_songs<'a>(songs: impl IntoIterator<Item = &'a Song>, limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Song> = songs.into_iter().collect();
    ranked.sort_by_key(|song| Reverse(song.likes));
    ranked
        .into_iter()
        .take(limit)
        .map(|song| song.name.clone())
        .collect()
}

/// Playlist names by follower count, then earliest creation
pub fn top_playlists<'a>(
    playlists: impl IntoIterator<Item = &'a Playlist>,
    limit: usize,
) -> Vec<String> {
    let mut ranked: Vec<&Playlist> = playlists.into_iter().collect();
    ranked.sort_by_key(|playlist| (Reverse(playlist.followers()), playlist.created_at));
    ranked
        .into_iter()
        .take(limit)
        .map(|playlist| playlist.name.clone())
        .collect()
}

/// Album names by total likes, then name ascending
pub fn top_albums<'a>(
    albums: impl IntoIterator<Item = &'a Album>,
    catalog: &BTreeMap<SongId, Song>,
    limit: usize,
) -> Vec<String> {
    let mut ranked: Vec<(u64, &Album)> = albums
        .into_iter()
        .map(|album| (album.total_likes(catalog), album))
        .collect();
    ranked.sort_by(|(a_likes, a), (b_likes, b)| {
        b_likes.cmp(a_likes).then_with(|| a.name.cmp(&b.name))
    });
    ranked
        .into_iter()
        .take(limit)
        .map(|(_, album)| album.name.clone())
        .collect()
}

/// Artist usernames by total likes across their albums
pub fn top_artists<'a>(
    artists: impl IntoIterator<Item = &'a Artist>,
    catalog: &BTreeMap<SongId, Song>,
    limit: usize,
) -> Vec<String> {
    let mut ranked: Vec<(u64, &Artist)> = artists
        .into_iter()
        .map(|artist| (artist.total_likes(catalog), artist))
        .collect();
    ranked.sort_by_key(|(likes, _)| Reverse(*likes));
    ranked
        .into_iter()
        .take(limit)
        .map(|(_, artist)| artist.username.clone())
        .collect()
}
