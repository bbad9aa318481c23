//! Tune Registry
//!
//! In-memory catalog registry for the Tune simulator.
//!
//! This crate provides:
//! - User registration with role-specific artist and host records
//! - Cascading deletion that leaves no dangling references
//! - Album, podcast and playlist bookkeeping
//! - Top-N charts for songs, playlists, albums and artists
//! - A simulation clock forwarded to every user's player session
//!
//! # Architecture
//!
//! `Registry` is a plain owned value. Nothing is global: create one per
//! simulation run, pass it where it is needed, and call `reset()` between
//! independent runs. Entities refer to each other by id, so deleting an
//! entity is a matter of removing it and sweeping the ids that point at it
//! (see [`cascade`]).
//!
//! # Example
//!
//! ```rust
//! use tune_core::types::{UserInput, UserRole};
//! use tune_registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add_user(UserInput::new("alice", 28, "Madrid"), UserRole::Normal).unwrap();
//! registry.add_user(UserInput::new("nova", 31, "Rome"), UserRole::Artist).unwrap();
//!
//! assert_eq!(registry.all_users(), vec!["alice", "nova"]);
//!
//! let msg = registry.delete_user("nova").unwrap();
//! assert_eq!(msg, "nova was successfully deleted.");
//! assert!(registry.get_artist("nova").is_none());
//! ```
//!
//! # Configuration
//!
//! ```rust,no_run
//! use tune_registry::{Registry, RegistrySettings};
//! use std::path::Path;
//!
//! // Reads tune.toml, then TUNE_CHART_LIMIT and friends from the environment
//! let settings = RegistrySettings::load(Some(Path::new("tune.toml"))).unwrap();
//! let registry = Registry::with_settings(settings);
//! ```

pub mod cascade;
pub mod charts;
mod config;
mod registry;

// Public exports
pub use config::RegistrySettings;
pub use registry::Registry;
pub use tune_core::{CatalogError, Result};
