//! Player session simulation
//!
//! Each user owns a `PlayerSession`. The registry only tells it how much
//! simulated time has passed; what is loaded and whether it is paused are
//! decided by the playback layer that drives the session.

use serde::{Deserialize, Serialize};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Nothing loaded
    Stopped,

    /// Loaded and advancing with the clock
    Playing,

    /// Loaded but not advancing
    Paused,
}

/// Item currently loaded in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedItem {
    /// Display name of the song or episode
    pub name: String,

    /// Seconds left before the item finishes
    pub remaining: u64,
}

/// Playback simulation state for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSession {
    loaded: Option<LoadedItem>,
    paused: bool,
    /// Seconds of playback consumed since the session started
    listened: u64,
}

impl PlayerSession {
    /// Load an item, replacing whatever was loaded
    pub fn load(&mut self, name: impl Into<String>, duration: u64) {
        self.loaded = Some(LoadedItem {
            name: name.into(),
            remaining: duration,
        });
        self.paused = false;
    }

    /// Toggle pause; no effect when nothing is loaded
    pub fn toggle_pause(&mut self) {
        if self.loaded.is_some() {
            self.paused = !self.paused;
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        match (&self.loaded, self.paused) {
            (None, _) => SessionState::Stopped,
            (Some(_), true) => SessionState::Paused,
            (Some(_), false) => SessionState::Playing,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedItem> {
        self.loaded.as_ref()
    }

    /// Total seconds played
    pub fn listened(&self) -> u64 {
        self.listened
    }

    /// Advance the session by `elapsed` seconds
    ///
    /// Playing items consume remaining time and unload once finished.
    pub fn simulate_time(&mut self, elapsed: u64) {
        if self.paused {
            return;
        }
        let Some(item) = self.loaded.as_mut() else {
            return;
        };

        let consumed = elapsed.min(item.remaining);
        item.remaining -= consumed;
        self.listened += consumed;

        if item.remaining == 0 {
            self.loaded = None;
        }
    }
}
