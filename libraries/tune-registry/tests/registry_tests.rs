//! Integration tests for the registry
//!
//! Covers user registration and listing, album and podcast bookkeeping,
//! the clock, and reset between simulation runs.


use test_helpers::*;
use tune_core::types::{EpisodeInput, PodcastInput, UserRole};
use tune_core::{CatalogError, SessionState};
use tune_registry::{Registry, RegistrySettings};

// ===== Registration and listing =====

#[test]
fn test_all_users_grouped_by_role() {
    let mut registry = registry();

    registry.add_user(user_input("host1"), UserRole::Host).unwrap();
    registry.add_user(user_input("alice"), UserRole::Normal).unwrap();
    registry.add_user(user_input("nova"), UserRole::Artist).unwrap();
    registry.add_user(user_input("bob"), "user").unwrap();
    registry.add_user(user_input("host2"), UserRole::Host).unwrap();
    registry.add_user(user_input("echo"), UserRole::Artist).unwrap();

    assert_eq!(
        registry.all_users(),
        vec!["alice", "bob", "nova", "echo", "host1", "host2"]
    );
}

#[test]
fn test_empty_role_listed_with_hosts() {
    let mut registry = registry();

    registry.add_user(user_input("blank"), "").unwrap();
    registry.add_user(user_input("host1"), UserRole::Host).unwrap();
    registry.add_user(user_input("alice"), UserRole::Normal).unwrap();

    assert_eq!(registry.all_users(), vec!["alice", "blank", "host1"]);
    // No parallel host record for an empty tag
    assert!(registry.get_host("blank").is_none());
}

#[test]
fn test_unrecognised_role_not_listed() {
    let mut registry = registry();

    registry.add_user(user_input("admin"), "admin").unwrap();

    assert!(registry.get_user("admin").is_some());
    assert!(registry.all_users().is_empty());
}

#[test]
fn test_duplicate_username_mutates_nothing() {
    let mut registry = registry();
    add_artist_with_album(&mut registry, "nova", "Debut", &["Intro"]);
    add_listener(&mut registry, "alice");
    let before_users = registry.all_users();
    let before_songs = registry.songs().count();

    let err = registry
        .add_user(user_input("nova"), UserRole::Normal)
        .unwrap_err();

    assert_eq!(err, CatalogError::UsernameTaken("nova".to_string()));
    assert_eq!(registry.all_users(), before_users);
    assert_eq!(registry.artists().len(), 1);
    assert_eq!(registry.songs().count(), before_songs);
}

#[test]
fn test_lookup_absent_user_is_none() {
    let registry = registry();
    assert!(registry.get_user("ghost").is_none());
    assert!(registry.get_artist("ghost").is_none());
    assert!(registry.get_host("ghost").is_none());
}

#[test]
fn test_set_users_loads_normal_accounts() {
    let mut registry = registry();

    registry.set_users(vec![
        user_input("alice"),
        user_input("bob"),
        user_input("alice"),
    ]);

    assert_eq!(registry.all_users(), vec!["alice", "bob"]);
    assert!(registry
        .users()
        .iter()
        .all(|u| u.role == UserRole::Normal));
}

// ===== Albums =====

#[test]
fn test_albums_flattened_in_artist_order() {
    let mut registry = registry();
    add_artist_with_album(&mut registry, "nova", "Debut", &["Intro"]);
    add_artist_with_album(&mut registry, "echo", "Waves", &["Tide"]);
    registry
        .add_album("nova", album_input("Second", "nova", &["Outro"]))
        .unwrap();

    let names: Vec<&str> = registry.albums().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Debut", "Second", "Waves"]);
}

#[test]
fn test_album_with_foreign_song_is_rejected_whole() {
    let mut registry = registry();
    registry.add_user(user_input("nova"), UserRole::Artist).unwrap();

    let mut input = album_input("Debut", "nova", &["Intro", "Middle"]);
    input.songs.push(song_input("Stray", "Other Album", "nova"));

    let err = registry.add_album("nova", input).unwrap_err();

    assert!(err.is_invariant_violation());
    assert!(err.to_string().contains("does not belong"));
    assert!(registry.albums().is_empty());
    assert_eq!(registry.songs().count(), 0);

    // Ids were not consumed by the failed attempt
    registry
        .add_album("nova", album_input("Debut", "nova", &["Intro"]))
        .unwrap();
    let ids: Vec<u64> = registry.songs().map(|s| s.id.get()).collect();
    assert_eq!(ids, vec![0]);
}

#[test]
fn test_album_membership_ignores_case() {
    let mut registry = registry();
    registry.add_user(user_input("nova"), UserRole::Artist).unwrap();

    let mut input = album_input("Debut", "nova", &[]);
    input.songs.push(song_input("Intro", "DEBUT", "Nova"));

    registry.add_album("nova", input).unwrap();
    assert_eq!(registry.albums()[0].track_count(), 1);
}

#[test]
fn test_album_requires_registered_artist() {
    let mut registry = registry();
    add_listener(&mut registry, "alice");

    let err = registry
        .add_album("alice", album_input("Debut", "alice", &["Intro"]))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[test]
fn test_duplicate_album_name_rejected() {
    let mut registry = registry();
    add_artist_with_album(&mut registry, "nova", "Debut", &["Intro"]);

    let err = registry
        .add_album("nova", album_input("Debut", "nova", &["Other"]))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Duplicate(_)));
    assert_eq!(registry.songs().count(), 1);
}

#[test]
fn test_duplicate_album_name_ignores_case() {
    let mut registry = registry();
    add_artist_with_album(&mut registry, "nova", "Debut", &["Intro"]);

    let err = registry
        .add_album("nova", album_input("debut", "nova", &["Other"]))
        .unwrap_err();

    assert!(matches!(err, CatalogError::Duplicate(_)));
    let names: Vec<&str> = registry.albums().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Debut"]);
    assert_eq!(registry.songs().count(), 1);
}

#[test]
fn test_remove_album_sweeps_references() {
    let mut registry = registry();
    let ids = add_artist_with_album(&mut registry, "nova", "Debut", &["Intro", "Outro"]);
    add_listener(&mut registry, "alice");
    registry.like_song("alice", ids[0]).unwrap();
    let playlist = registry.create_playlist("alice", "Mix").unwrap();
    registry
        .add_song_to_playlist("alice", playlist, ids[1])
        .unwrap();

    registry.remove_album("nova", "Debut").unwrap();

    assert!(registry.albums().is_empty());
    assert_eq!(registry.songs().count(), 0);
    assert!(registry.get_user("alice").unwrap().liked_songs.is_empty());
    assert!(registry.playlist(playlist).unwrap().songs().is_empty());
    assert_consistent(&registry);
}

#[test]
fn test_album_listens_sum_song_counters() {
    let mut registry = registry();
    add_artist_with_album(&mut registry, "nova", "Debut", &["Intro", "Outro"]);

    let album = registry.albums()[0].clone();
    let catalog = registry.songs().map(|s| (s.id, s.clone())).collect();
    assert_eq!(album.listens(&catalog), 0);
    assert_eq!(album.song_names(&catalog), vec!["Intro", "Outro"]);
}

// ===== Podcasts =====

fn podcast_input(name: &str, owner: &str) -> PodcastInput {
    PodcastInput {
        name: name.to_string(),
        owner: owner.to_string(),
        episodes: vec![EpisodeInput {
            name: format!("{} #1", name),
            duration: 1200,
            description: "Pilot".to_string(),
        }],
    }
}

#[test]
fn test_add_and_remove_podcast() {
    let mut registry = registry();
    registry.add_user(user_input("host1"), UserRole::Host).unwrap();

    let id = registry.add_podcast(podcast_input("Talks", "host1")).unwrap();
    assert_eq!(registry.get_host("host1").unwrap().podcasts, vec![id]);
    assert_eq!(registry.podcasts().count(), 1);

    let dup = registry.add_podcast(podcast_input("Talks", "host1"));
    assert!(matches!(dup, Err(CatalogError::Duplicate(_))));

    let removed = registry.remove_podcast("host1", "Talks").unwrap();
    assert_eq!(removed.episodes.len(), 1);
    assert_eq!(registry.podcasts().count(), 0);
    assert!(registry.get_host("host1").unwrap().podcasts.is_empty());

    let missing = registry.remove_podcast("host1", "Talks");
    assert!(matches!(missing, Err(CatalogError::NotFound { .. })));
}

#[test]
fn test_add_podcast_requires_registered_host() {
    let mut registry = registry();
    add_listener(&mut registry, "alice");

    let err = registry
        .add_podcast(podcast_input("Talks", "alice"))
        .unwrap_err();
    assert_eq!(err, CatalogError::not_found("Host", "alice"));

    let err = registry
        .add_podcast(podcast_input("Talks", "ghost"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
    assert_eq!(registry.podcasts().count(), 0);

    registry.delete_user("alice").unwrap();
    assert_eq!(registry.podcasts().count(), 0);
}

#[test]
fn test_set_podcasts_attaches_known_hosts() {
    let mut registry = registry();
    registry.add_user(user_input("host1"), UserRole::Host).unwrap();

    registry.set_podcasts(vec![
        podcast_input("Talks", "host1"),
        podcast_input("Orphan", "nobody"),
    ]);

    let names: Vec<&str> = registry.podcasts().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Talks", "Orphan"]);
    assert_eq!(registry.get_host("host1").unwrap().podcasts.len(), 1);
}

// ===== Clock =====

#[test]
fn test_update_timestamp_forwards_elapsed() {
    let mut registry = registry();
    add_listener(&mut registry, "alice");
    add_listener(&mut registry, "bob");
    registry.update_timestamp(10);
    registry.session_mut("alice").unwrap().load("Intro", 100);

    registry.update_timestamp(40);

    let alice = &registry.get_user("alice").unwrap().session;
    assert_eq!(alice.loaded().unwrap().remaining, 70);
    assert_eq!(alice.listened(), 30);
    let bob = &registry.get_user("bob").unwrap().session;
    assert_eq!(bob.state(), SessionState::Stopped);
}

#[test]
fn test_session_unloads_when_item_finishes() {
    let mut registry = registry();
    add_listener(&mut registry, "alice");
    registry.session_mut("alice").unwrap().load("Intro", 100);

    registry.update_timestamp(150);

    let alice = &registry.get_user("alice").unwrap().session;
    assert_eq!(alice.state(), SessionState::Stopped);
    assert_eq!(alice.listened(), 100);
}

#[test]
fn test_repeated_timestamp_is_noop() {
    let mut registry = registry();
    add_listener(&mut registry, "alice");
    add_listener(&mut registry, "bob");
    registry.session_mut("alice").unwrap().load("Intro", 100);
    registry.update_timestamp(25);
    let before: Vec<_> = registry.users().iter().map(|u| u.session.clone()).collect();

    registry.update_timestamp(25);

    let after: Vec<_> = registry.users().iter().map(|u| u.session.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(registry.timestamp(), 25);
    assert_eq!(after[0].loaded().unwrap().remaining, 75);
}

// ===== Reset =====

#[test]
fn test_reset_behaves_like_fresh_registry() {
    let mut registry = registry();
    add_artist_with_album(&mut registry, "nova", "Debut", &["Intro", "Outro"]);
    add_listener(&mut registry, "alice");
    registry.create_playlist("alice", "Mix").unwrap();
    registry.update_timestamp(99);

    registry.reset();

    assert!(registry.all_users().is_empty());
    assert!(registry.albums().is_empty());
    assert!(registry.playlists().is_empty());
    assert_eq!(registry.songs().count(), 0);
    assert!(registry.top_songs().is_empty());
    assert!(registry.top_playlists().is_empty());
    assert!(registry.top_albums().is_empty());
    assert!(registry.top_artists().is_empty());
    assert_eq!(registry.timestamp(), 0);

    let mut fresh = Registry::new();
    let replay = |r: &mut Registry| {
        let msg = r.add_user(user_input("nova"), UserRole::Artist).unwrap();
        r.add_album("nova", album_input("Debut", "nova", &["Intro"]))
            .unwrap();
        (msg, r.songs().map(|s| s.id).collect::<Vec<_>>())
    };
    assert_eq!(replay(&mut registry), replay(&mut fresh));
}

#[test]
fn test_reset_keeps_settings() {
    let settings = RegistrySettings {
        chart_limit: 2,
        initial_timestamp: 7,
    };
    let mut registry = Registry::with_settings(settings.clone());
    registry.update_timestamp(50);

    registry.reset();

    assert_eq!(registry.timestamp(), 7);
    assert_eq!(registry.settings(), &settings);
}
